//! `insertion_sort` is a classic adjacent-swap insertion sort.
//!
//! It runs in place with no allocation, which beats the fixed per-level cost of a radix sort on
//! tiny inputs.
//!
//! ## Characteristics
//!
//!  * in-place
//!  * single-threaded
//!  * stable
//!  * O(n^2) worst case

pub fn insertion_sort<T>(bucket: &mut [T])
where
    T: Ord,
{
    for i in 1..bucket.len() {
        let mut j = i;
        while j > 0 && bucket[j] < bucket[j - 1] {
            bucket.swap(j, j - 1);
            j -= 1;
        }
    }
}
