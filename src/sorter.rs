use crate::error::SortError;
use crate::sorts::insertion_sort::insertion_sort;
use crate::sorts::lsb_sort::lsb_sort;
use crate::tuner::{Algorithm, Tuner, TuningParams};
use crate::utils::is_sorted;
use crate::RadixKey;
use log::debug;

/// The path taken by a single sort.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Dispatch {
    /// Zero or one keys, nothing to do.
    Untouched,
    /// The keys were already ascending. Nothing was allocated or moved.
    AlreadySorted,
    /// Sorted in place by insertion sort.
    Insertion,
    /// Sorted by the radix sort. `passes` counts the levels that moved data and `skipped` the
    /// levels whose byte was constant across all keys.
    Radix { passes: usize, skipped: usize },
}

pub struct Sorter<'a> {
    presorted_check: bool,
    level_skipping: bool,
    tuner: &'a dyn Tuner,
}

impl<'a> Sorter<'a> {
    pub fn new(presorted_check: bool, level_skipping: bool, tuner: &'a dyn Tuner) -> Self {
        Self {
            presorted_check,
            level_skipping,
            tuner,
        }
    }

    pub fn sort<T>(&self, bucket: &mut [T]) -> Result<Dispatch, SortError>
    where
        T: RadixKey,
    {
        // By definition, this is already sorted
        if bucket.len() <= 1 {
            return Ok(Dispatch::Untouched);
        }

        if self.presorted_check && is_sorted(bucket) {
            debug!("({}) ALREADY SORTED", bucket.len());
            return Ok(Dispatch::AlreadySorted);
        }

        let tp = TuningParams {
            input_len: bucket.len(),
            total_levels: T::LEVELS,
        };

        let algorithm = self.tuner.pick_algorithm(&tp);

        debug!("({}) {:?}", bucket.len(), algorithm);

        match algorithm {
            Algorithm::Insertion => {
                insertion_sort(bucket);
                Ok(Dispatch::Insertion)
            }
            Algorithm::Lsb => {
                let stats = lsb_sort(bucket, self.level_skipping)?;
                Ok(Dispatch::Radix {
                    passes: stats.passes,
                    skipped: stats.skipped,
                })
            }
        }
    }
}
