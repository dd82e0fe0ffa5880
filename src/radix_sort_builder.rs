use crate::error::SortError;
use crate::sorter::{Dispatch, Sorter};
use crate::tuner::Tuner;
use crate::tuners::StandardTuner;
use crate::RadixKey;

pub struct RadixSortBuilder<'a, T> {
    data: &'a mut [T],
    presorted_check: bool,
    level_skipping: bool,
    tuner: &'a dyn Tuner,
}

impl<'a, T> RadixSortBuilder<'a, T>
where
    T: RadixKey,
{
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        Self {
            data,
            presorted_check: true,
            level_skipping: true,
            tuner: &StandardTuner,
        }
    }

    /// Enables or disables the linear scan that returns early when the input is already
    /// ascending. Enabled by default.
    pub fn with_presorted_check(mut self, presorted_check: bool) -> Self {
        self.presorted_check = presorted_check;

        self
    }

    /// Enables or disables skipping radix passes over levels where every key has the same byte.
    /// Enabled by default.
    pub fn with_level_skipping(mut self, level_skipping: bool) -> Self {
        self.level_skipping = level_skipping;

        self
    }

    pub fn with_tuner(mut self, tuner: &'a dyn Tuner) -> Self {
        self.tuner = tuner;

        self
    }

    /// Sorts the data, panicking if the scratch memory cannot be allocated.
    pub fn sort(self) {
        if let Err(e) = self.try_sort() {
            panic!("radix sort failed: {}", e);
        }
    }

    /// Sorts the data and reports which path was taken.
    ///
    /// On error the data is left in its original order.
    pub fn try_sort(self) -> Result<Dispatch, SortError> {
        let sorter = Sorter::new(self.presorted_check, self.level_skipping, self.tuner);
        sorter.sort(self.data)
    }
}
