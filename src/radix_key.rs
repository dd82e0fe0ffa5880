mod private {
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

/// A fixed-width signed integer that can be sorted byte by byte.
///
/// `LEVELS` is the byte width of the key. `get_level` returns the byte at a given position of the
/// two's-complement representation, starting from the least significant byte at level `0`. The
/// byte at `LEVELS - 1` carries the sign bit.
///
/// This trait is sealed. Only the primitive signed integers implement it, so attempting to sort
/// unsigned or non-integral data is rejected at compile time:
///
/// ```compile_fail
/// let mut data = vec![3u32, 1, 2];
/// signed_radix::sort(&mut data);
/// ```
pub trait RadixKey: Sealed + Copy + Ord {
    const LEVELS: usize;

    fn get_level(&self, level: usize) -> u8;
}
