use crate::error::SortError;
use crate::RadixKey;

/// Counts every level of every key in a single scan.
///
/// The result holds one block of 256 counters per level, with `counts[level][b]` being the number
/// of keys whose byte at `level` equals `b`.
#[inline]
pub fn get_all_counts<T>(bucket: &[T]) -> Result<Vec<[usize; 256]>, SortError>
where
    T: RadixKey,
{
    let mut counts: Vec<[usize; 256]> = Vec::new();
    counts
        .try_reserve_exact(T::LEVELS)
        .map_err(|source| SortError::CounterAllocation {
            levels: T::LEVELS,
            source,
        })?;
    counts.resize(T::LEVELS, [0usize; 256]);

    let chunks = bucket.chunks_exact(4);
    let rem = chunks.remainder();

    chunks.into_iter().for_each(|chunk| {
        for (level, level_counts) in counts.iter_mut().enumerate() {
            let a = chunk[0].get_level(level) as usize;
            let b = chunk[1].get_level(level) as usize;
            let c = chunk[2].get_level(level) as usize;
            let d = chunk[3].get_level(level) as usize;

            level_counts[a] += 1;
            level_counts[b] += 1;
            level_counts[c] += 1;
            level_counts[d] += 1;
        }
    });

    rem.iter().for_each(|v| {
        for (level, level_counts) in counts.iter_mut().enumerate() {
            level_counts[v.get_level(level) as usize] += 1;
        }
    });

    Ok(counts)
}

#[inline]
pub fn get_prefix_sums(counts: &[usize; 256]) -> [usize; 256] {
    let mut sums = [0usize; 256];

    let mut running_total = 0;
    for (i, c) in counts.iter().enumerate() {
        sums[i] = running_total;
        running_total += c;
    }

    sums
}

/// Prefix sums for the sign-bearing level of a two's-complement key.
///
/// Bytes `128..=255` have their top bit set and belong to negative keys, so they are given the
/// lowest offsets. Bytes `0..=127` start after the last negative key.
#[inline]
pub fn get_signed_prefix_sums(counts: &[usize; 256]) -> [usize; 256] {
    let mut sums = [0usize; 256];
    let total_negative: usize = counts[128..].iter().sum();

    let (low_sums, high_sums) = sums.split_at_mut(128);
    let (low_counts, high_counts) = counts.split_at(128);

    let mut running_total = total_negative;
    for (s, c) in low_sums.iter_mut().zip(low_counts) {
        *s = running_total;
        running_total += c;
    }

    running_total = 0;
    for (s, c) in high_sums.iter_mut().zip(high_counts) {
        *s = running_total;
        running_total += c;
    }

    sums
}

#[inline]
pub fn is_homogenous_bucket(counts: &[usize; 256]) -> bool {
    let mut seen = false;
    for c in counts {
        if *c > 0 {
            if seen {
                return false;
            } else {
                seen = true;
            }
        }
    }

    true
}

/// Returns `true` if the bucket is in ascending order, stopping at the first inversion.
#[inline]
pub fn is_sorted<T>(bucket: &[T]) -> bool
where
    T: Ord,
{
    bucket.windows(2).all(|w| w[0] <= w[1])
}

/// Allocates the ping-pong buffer used by out-of-place passes.
///
/// The contents are a copy of `bucket`. Every slot is overwritten by the first pass that writes
/// into it, so the values only serve to initialize the memory.
#[inline]
pub fn get_tmp_bucket<T>(bucket: &[T]) -> Result<Vec<T>, SortError>
where
    T: Copy,
{
    let mut tmp_bucket = Vec::new();
    tmp_bucket
        .try_reserve_exact(bucket.len())
        .map_err(|source| SortError::ScratchAllocation {
            len: bucket.len(),
            source,
        })?;
    tmp_bucket.extend_from_slice(bucket);

    Ok(tmp_bucket)
}
