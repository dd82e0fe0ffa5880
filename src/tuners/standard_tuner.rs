//! `StandardTuner` represents the default tuning of algorithm choices offered by signed-radix.
//!
//! StandardTuner algorithm choice is:
//!  * insertion sort up to and including 64 keys
//!  * lsb radix sort for anything larger

use crate::tuner::{Algorithm, Tuner, TuningParams};

pub const INSERTION_SORT_THRESHOLD: usize = 64;

pub struct StandardTuner;
impl Tuner for StandardTuner {
    #[inline]
    fn pick_algorithm(&self, p: &TuningParams) -> Algorithm {
        if p.input_len <= INSERTION_SORT_THRESHOLD {
            Algorithm::Insertion
        } else {
            Algorithm::Lsb
        }
    }
}
