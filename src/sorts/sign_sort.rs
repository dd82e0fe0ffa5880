//! `sign_sort` is the counting sort used for the most significant level of a two's-complement
//! key.
//!
//! Read as an unsigned byte, the sign-bearing level puts negative keys (`128..=255`) after
//! non-negative keys (`0..=127`). The offsets are therefore built in two halves: the negative half
//! starts at zero, and the non-negative half starts after the total number of negative keys.
//! Within each half ascending byte order is ascending numeric order, and the lower levels were
//! already ordered by earlier stable passes.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * stable

use crate::sorts::out_of_place_sort::scatter;
use crate::utils::*;
use crate::RadixKey;

#[inline]
pub fn sign_sort<T>(src_bucket: &[T], dst_bucket: &mut [T], counts: &[usize; 256], level: usize)
where
    T: RadixKey,
{
    if src_bucket.len() < 2 {
        dst_bucket.copy_from_slice(src_bucket);
        return;
    }

    let prefix_sums = get_signed_prefix_sums(counts);
    scatter(src_bucket, dst_bucket, prefix_sums, level);
}

#[cfg(test)]
mod tests {
    use crate::sorts::sign_sort::sign_sort;
    use crate::utils::get_all_counts;

    #[test]
    pub fn test_negatives_first() {
        let src: Vec<i8> = vec![3, -1, 0, -128, 127, -2];
        let mut dst = vec![0i8; src.len()];
        let counts = get_all_counts(&src).unwrap();

        sign_sort(&src, &mut dst, &counts[0], 0);

        assert_eq!(dst, vec![-128, -2, -1, 0, 3, 127]);
    }

    #[test]
    pub fn test_orders_only_the_sign_level() {
        // Lower level already sorted, as it would be after the preceding passes
        let src: Vec<i16> = vec![0x0100, -256, 0x0001, -255, 0x7F02];
        let mut dst = vec![0i16; src.len()];
        let counts = get_all_counts(&src).unwrap();

        sign_sort(&src, &mut dst, &counts[1], 1);

        assert_eq!(dst, vec![-256, -255, 0x0001, 0x0100, 0x7F02]);
    }

    #[test]
    pub fn test_all_negative() {
        let src: Vec<i8> = vec![-1, -100, -50, -128];
        let mut dst = vec![0i8; src.len()];
        let counts = get_all_counts(&src).unwrap();

        sign_sort(&src, &mut dst, &counts[0], 0);

        assert_eq!(dst, vec![-128, -100, -50, -1]);
    }
}
