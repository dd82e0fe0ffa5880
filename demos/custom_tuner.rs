use signed_radix::{Algorithm, Dispatch, RadixSort, Tuner, TuningParams};

struct MyTuner;

impl Tuner for MyTuner {
    fn pick_algorithm(&self, p: &TuningParams) -> Algorithm {
        // Wider keys need more radix passes, so stay with insertion sort a little longer
        if p.input_len <= 16 * p.total_levels {
            Algorithm::Insertion
        } else {
            Algorithm::Lsb
        }
    }
}

fn main() {
    let mut inputs: Vec<i64> = (0..1_000).map(|i| (i * 7_919) % 1_000 - 500).collect();

    let dispatch = inputs
        .radix_sort_builder()
        .with_tuner(&MyTuner {})
        .try_sort();

    match dispatch {
        Ok(Dispatch::Radix { passes, skipped }) => {
            println!("radix sort: {} passes, {} skipped", passes, skipped)
        }
        Ok(d) => println!("{:?}", d),
        Err(e) => eprintln!("sort failed: {}", e),
    }

    println!("{:?}", &inputs[..10]);
}
