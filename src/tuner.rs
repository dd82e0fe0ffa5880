#[derive(Clone, Debug)]
pub struct TuningParams {
    pub input_len: usize,
    pub total_levels: usize,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Algorithm {
    Insertion,
    Lsb,
}

/// Picks the algorithm used for an unsorted input of at least two keys.
///
/// The choice only affects performance. Every algorithm produces the same ascending order.
pub trait Tuner {
    fn pick_algorithm(&self, p: &TuningParams) -> Algorithm;
}
