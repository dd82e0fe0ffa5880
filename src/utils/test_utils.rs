use crate::tuner::{Algorithm, Tuner, TuningParams};
use crate::RadixKey;
use nanorand::{Rng, WyRand};
use std::fmt::Debug;
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

pub trait NumericTest<T>:
    RadixKey
    + Sized
    + Copy
    + Debug
    + PartialEq
    + Ord
    + Shl<Output = T>
    + Shr<Output = T>
    + ShrAssign
    + ShlAssign
    + FromRandom
{
}

impl<T> NumericTest<T> for T where
    T: RadixKey
        + Sized
        + Copy
        + Debug
        + PartialEq
        + Ord
        + Shl<Output = T>
        + Shr<Output = T>
        + ShrAssign
        + ShlAssign
        + FromRandom
{
}

/// Truncates 128 random bits down to the width of the implementing type.
pub trait FromRandom {
    fn from_random(bits: u128) -> Self;
}

macro_rules! impl_from_random {
    ($($t:ty)*) => ($(
        impl FromRandom for $t {
            #[inline]
            fn from_random(bits: u128) -> Self {
                bits as $t
            }
        }
    )*)
}

impl_from_random! { i8 i16 i32 i64 i128 isize }

pub struct SingleAlgoTuner {
    pub(crate) algo: Algorithm,
}

impl Tuner for SingleAlgoTuner {
    #[inline]
    fn pick_algorithm(&self, _p: &TuningParams) -> Algorithm {
        self.algo
    }
}

pub fn rand_vec<T>(n: usize, seed: u64) -> Vec<T>
where
    T: FromRandom,
{
    let mut rng = WyRand::new_seed(seed);

    (0..n)
        .map(|_| {
            let hi = rng.generate::<u64>() as u128;
            let lo = rng.generate::<u64>() as u128;
            T::from_random((hi << 64) | lo)
        })
        .collect()
}

pub fn gen_inputs<T>(n: usize, shift: T) -> Vec<T>
where
    T: NumericTest<T>,
{
    let mut inputs: Vec<T> = rand_vec(n, 0x5EED);

    inputs[0..(n / 2)].iter_mut().for_each(|v| *v >>= shift);
    inputs[(n / 2)..n].iter_mut().for_each(|v| *v <<= shift);

    inputs
}

pub fn gen_input_set<T>(shift: T) -> Vec<Vec<T>>
where
    T: NumericTest<T>,
{
    let n = 400_000;
    let half = n / 2;
    let inputs = gen_inputs(n, shift);

    // Middle values are used for the case where shift is provided
    let mut out = vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[(half - 5)..(half + 5)].to_vec(),
        inputs[(half - 32)..(half + 32)].to_vec(),
        inputs[(half - 32)..(half + 33)].to_vec(),
        inputs[(half - 50)..(half + 50)].to_vec(),
        inputs[(half - 2_500)..(half + 2_500)].to_vec(),
        inputs[(half - 25_000)..(half + 25_000)].to_vec(),
        inputs[(half - 100_000)..(half + 100_000)].to_vec(),
        inputs,
    ];

    out.reverse();

    out
}

pub fn validate_sort<T, F>(mut inputs: Vec<T>, sort_fn: F)
where
    T: NumericTest<T>,
    F: Fn(&mut [T]),
{
    let mut inputs_clone = inputs.clone();

    sort_fn(&mut inputs);
    inputs_clone.sort_unstable();

    assert_eq!(inputs, inputs_clone);
}

pub fn sort_comparison_suite<T, F>(shift: T, sort_fn: F)
where
    F: Fn(&mut [T]),
    T: NumericTest<T>,
{
    let input_set = gen_input_set(shift);

    for s in input_set {
        validate_sort(s, &sort_fn);
    }
}

pub fn validate_i32_patterns<F>(sort_fn: F)
where
    F: Fn(&mut [i32]),
{
    let input_sets: Vec<Vec<i32>> = vec![
        vec![i32::MAX; 128],
        vec![i32::MIN; 128],
        vec![-1; 128],
        rand_vec(128, 1),
        rand_vec(128_000, 2),
        rand_vec(4, 3),
    ];

    let masks: [u32; 12] = [
        0xFFFF_FF00,
        0xFFFF_00FF,
        0xFF00_FFFF,
        0x00FF_FFFF,
        0x0000_FFFF,
        0xFFFF_0000,
        0b10000000000000000000000000000000,
        0b00000000000000000000000000000001,
        0b11111111111111111111111111111110,
        0b01111111111111111111111111111111,
        0b10101010101010101010101010101010,
        0b01010101010101010101010101010101,
    ];

    for inputs in input_sets.iter() {
        validate_sort(inputs.clone(), &sort_fn);

        // Empty levels
        for mask in masks {
            validate_sort(
                inputs
                    .iter()
                    .map(|v| *v & (mask as i32))
                    .collect::<Vec<i32>>(),
                &sort_fn,
            );
        }
    }
}
