//! `lsb_sort` is the complete least-significant-byte-first radix sort for signed keys.
//!
//! All levels are counted up front in a single scan. Each level below the sign byte is then
//! sorted with `out_of_place_sort`, and the sign byte is sorted last with `sign_sort`. Passes
//! alternate between the input and a scratch buffer; if an odd number of passes ran, the result
//! is copied back into the input once at the end.
//!
//! When level skipping is enabled, any level where every key shares the same byte is skipped, as
//! the pass would leave the order unchanged.

use crate::error::SortError;
use crate::sorts::out_of_place_sort::out_of_place_sort;
use crate::sorts::sign_sort::sign_sort;
use crate::utils::*;
use crate::RadixKey;
use log::trace;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PassStats {
    pub passes: usize,
    pub skipped: usize,
}

pub fn lsb_sort<T>(bucket: &mut [T], skip_levels: bool) -> Result<PassStats, SortError>
where
    T: RadixKey,
{
    let mut stats = PassStats::default();

    if bucket.len() < 2 {
        return Ok(stats);
    }

    let mut tmp_bucket = get_tmp_bucket(bucket)?;
    let counts = get_all_counts(bucket)?;
    let sign_level = T::LEVELS - 1;
    let mut invert = false;

    for (level, level_counts) in counts.iter().enumerate() {
        if skip_levels && is_homogenous_bucket(level_counts) {
            trace!("({}) SKIP", level);
            stats.skipped += 1;
            continue;
        }

        trace!("({}) {}", level, if level == sign_level { "SIGN" } else { "LSB" });

        match (invert, level == sign_level) {
            (false, false) => out_of_place_sort(bucket, &mut tmp_bucket, level_counts, level),
            (true, false) => out_of_place_sort(&tmp_bucket, bucket, level_counts, level),
            (false, true) => sign_sort(bucket, &mut tmp_bucket, level_counts, level),
            (true, true) => sign_sort(&tmp_bucket, bucket, level_counts, level),
        };

        stats.passes += 1;
        invert = !invert;
    }

    if invert {
        bucket.copy_from_slice(&tmp_bucket);
    }

    Ok(stats)
}
