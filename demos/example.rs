use signed_radix::RadixSort;

fn main() {
    let mut inputs: Vec<i32> = Vec::new();
    inputs.extend_from_slice(&[55, -22, 73, 4, -89, 0, 100, -3]);

    inputs.radix_sort();
    println!("{:?}", &inputs[..]);
}
