use super::{rand, rand_values, TestValue};
use crate::{Buffer, Error};

fn sorted(mut values: Vec<TestValue>) -> Vec<TestValue> {
    values.sort_unstable();
    values
}

fn visit<B: Buffer<TestValue>>(b: &B) -> Vec<TestValue> {
    let mut out = Vec::new();
    b.for_each(&mut |v| out.push(*v));
    out
}

fn test_insert<B: Buffer<TestValue>>(b: &mut B, values: Vec<TestValue>) {
    let before = visit(b);
    for (i, v) in values.iter().enumerate() {
        b.insert(*v).unwrap();
        assert_eq!(b.len(), before.len() + i + 1);
        assert!(!b.is_empty());
    }
    let mut expected = before;
    expected.extend(values);
    assert_eq!(sorted(visit(b)), sorted(expected));
}

fn test_remove<B: Buffer<TestValue>>(b: &mut B) {
    let inside = visit(b);
    let mut removed = Vec::new();
    while b.len() > 0 {
        let n = b.len();
        let peeked = b.peek_first().unwrap();
        // Peeking does not remove.
        assert_eq!(b.len(), n);
        let first = b.remove_first().unwrap();
        assert_eq!(peeked, first);
        assert_eq!(b.len(), n - 1);
        removed.push(first);
    }
    assert!(b.is_empty());
    assert_eq!(sorted(removed), sorted(inside));
}

fn test_flush<B: Buffer<TestValue>>(b: &mut B, values: Vec<TestValue>) {
    b.clear().unwrap();
    b.insert_all(values.clone()).unwrap();
    assert_eq!(b.len(), values.len());
    let flushed = b.flush().unwrap();
    assert_eq!(sorted(flushed), sorted(values));
    assert!(b.is_empty());

    b.insert_all(rand_values(10, 100)).unwrap();
    b.clear().unwrap();
    assert_eq!(b.len(), 0);
}

/// Check buffer operations never called on an empty buffer.
pub fn test_buffer_nonempty<B: Buffer<TestValue>>(mut b: B) {
    b.clear().unwrap();
    assert!(b.is_empty());

    let n = rand(1, 200) as usize;
    test_insert(&mut b, rand_values(n, 1000));
    test_remove(&mut b);
    test_insert(&mut b, rand_values(n, 10));
    test_flush(&mut b, rand_values(n, 1000));
}

/// Check buffer operations, including removal from an empty buffer.
pub fn test_buffer<B: Buffer<TestValue>>(mut b: B) {
    b.clear().unwrap();
    assert_eq!(b.remove_first(), Err(Error::Underflow));
    assert_eq!(b.peek_first(), Err(Error::Underflow));
    test_buffer_nonempty(b);
}

/// Check that elements are removed in insertion order.
pub fn test_fifo<B: Buffer<TestValue>>(mut b: B) {
    b.clear().unwrap();
    let values = rand_values(100, 1000);
    b.insert_all(values.clone()).unwrap();
    for v in values.iter() {
        assert_eq!(b.remove_first().unwrap(), *v);
    }
    b.insert_all(values.clone()).unwrap();
    assert_eq!(b.flush().unwrap(), values);
}
