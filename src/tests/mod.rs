extern crate rand;
use rand::random;

pub type TestValue = u32;

/// Random number in `[a, b)`.
pub fn rand(a: u64, b: u64) -> u64 {
    a + (random::<u64>() % (b - a))
}

/// Random values in `[0, max)`.
pub fn rand_values(n: usize, max: u64) -> Vec<TestValue> {
    (0..n).map(|_| rand(0, max) as TestValue).collect()
}

mod buffer;
pub use buffer::{test_buffer, test_buffer_nonempty, test_fifo};
pub use container::{test_container, test_size_overflow, test_sorted_container};
pub use concurrent::{test_concurrent_buffer, test_concurrent_container};
