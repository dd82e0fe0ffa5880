//! # signed-radix
//!
//! signed-radix is a native Rust implementation of stable LSD radix sort for signed integers.
//!
//! ## Usage
//!
//! In the simplest case, you can use this sort by simply calling `my_vec.radix_sort()` or
//! `signed_radix::sort(&mut my_vec)`.
//!
//! ```
//! use signed_radix::RadixSort;
//!
//! let mut data: Vec<i32> = vec![3, -1, 0, -128, 127, -2];
//! data.radix_sort();
//!
//! assert_eq!(data, vec![-128, -2, -1, 0, 3, 127]);
//! ```
//!
//! ## How it works
//!
//! Inputs of zero or one keys, and inputs that are already ascending, are returned untouched
//! without allocating. Up to 64 keys are sorted in place with insertion sort. Anything larger is
//! sorted with an LSD radix sort: every byte of every key is counted in one scan, then one stable
//! counting sort pass runs per byte from least to most significant. Passes over bytes that are
//! identical for all keys are skipped.
//!
//! The most significant byte carries the two's-complement sign bit, so read as an unsigned byte
//! it would put negative keys after positive ones. The final pass splits its offsets into a
//! negative half placed first and a non-negative half placed after it.
//!
//! ## Supported types
//!
//! `RadixKey` is sealed and implemented for the following types only:
//!
//!  * `i8`
//!  * `i16`
//!  * `i32`
//!  * `i64`
//!  * `i128`
//!  * `isize`
//!
//! Trying to sort any other type is a compile error.
//!
//! ## Configuration
//!
//! `radix_sort_builder()` gives access to a few knobs, and reports which path was taken:
//!
//! ```
//! use signed_radix::{Dispatch, RadixSort};
//!
//! let mut data: Vec<i64> = (0..1_000).rev().collect();
//! let dispatch = data
//!     .radix_sort_builder()
//!     .with_level_skipping(false)
//!     .try_sort()
//!     .unwrap();
//!
//! assert_eq!(dispatch, Dispatch::Radix { passes: 8, skipped: 0 });
//! assert_eq!(data, (0..1_000).collect::<Vec<i64>>());
//! ```
//!
//! Custom algorithm choice is possible by implementing `Tuner`.
//!
//! ## Logging
//!
//! Dispatch decisions are logged at `debug` level and individual radix passes at `trace` level
//! through the `log` facade.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.
//!
//! ### Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.

mod error;
mod radix_key;
mod radix_key_impl;
mod radix_sort_builder;
mod sorter;
mod sorts;
mod tuner;
mod tuners;
mod utils;


pub use error::SortError;
pub use radix_key::RadixKey;
pub use radix_sort_builder::RadixSortBuilder;
pub use sorter::Dispatch;
pub use tuner::{Algorithm, Tuner, TuningParams};
pub use tuners::StandardTuner;

pub trait RadixSort<T> {
    /// radix_sort_builder returns a builder for configuring how the radix sort of `T` in your
    /// `Vec<T>` or `[T]` is run.
    fn radix_sort_builder(&mut self) -> RadixSortBuilder<'_, T>;

    /// radix_sort runs the radix sort with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the scratch memory for the sort cannot be allocated.
    fn radix_sort(&mut self);

    /// try_radix_sort runs the radix sort with the default configuration, returning an error
    /// instead of panicking if the scratch memory cannot be allocated.
    fn try_radix_sort(&mut self) -> Result<(), SortError>;
}

impl<T> RadixSort<T> for Vec<T>
where
    T: RadixKey,
{
    fn radix_sort_builder(&mut self) -> RadixSortBuilder<'_, T> {
        RadixSortBuilder::new(self)
    }

    fn radix_sort(&mut self) {
        self.radix_sort_builder().sort();
    }

    fn try_radix_sort(&mut self) -> Result<(), SortError> {
        self.radix_sort_builder().try_sort().map(|_| ())
    }
}

impl<T> RadixSort<T> for [T]
where
    T: RadixKey,
{
    fn radix_sort_builder(&mut self) -> RadixSortBuilder<'_, T> {
        RadixSortBuilder::new(self)
    }

    fn radix_sort(&mut self) {
        self.radix_sort_builder().sort();
    }

    fn try_radix_sort(&mut self) -> Result<(), SortError> {
        self.radix_sort_builder().try_sort().map(|_| ())
    }
}

/// Sorts `data` ascending with the default configuration.
///
/// # Panics
///
/// Panics if the scratch memory for the sort cannot be allocated.
pub fn sort<T>(data: &mut [T])
where
    T: RadixKey,
{
    data.radix_sort();
}

/// Sorts `data` ascending with the default configuration.
///
/// Returns an error, leaving `data` in its original order, if the scratch memory cannot be
/// allocated.
pub fn try_sort<T>(data: &mut [T]) -> Result<(), SortError>
where
    T: RadixKey,
{
    data.try_radix_sort()
}
