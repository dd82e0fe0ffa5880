mod standard_tuner;

pub use standard_tuner::StandardTuner;
