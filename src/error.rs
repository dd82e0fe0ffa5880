use std::collections::TryReserveError;
use thiserror::Error;

/// Errors returned when a radix sort cannot acquire its working memory.
///
/// Both variants are raised before any element has been moved, so the input is left untouched.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("failed to allocate a scratch buffer of {len} elements")]
    ScratchAllocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("failed to allocate counters for {levels} levels")]
    CounterAllocation {
        levels: usize,
        #[source]
        source: TryReserveError,
    },
}
