use bufbag::compose::{buffers, containers};
use bufbag::transformer::map;
use bufbag::{
    ArrayBuffer, Buffer, Concurrent, Container, Error, HashBag, KindSet,
    Kinded, SortedContainer, TreeBag,
};
use std::collections::BTreeSet;
use std::thread;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Item {
    Count(i64),
    Ratio(i64),
    Label(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ItemKind {
    Number,
    Ratio,
    Label,
}

impl Kinded for Item {
    type Kind = ItemKind;

    fn kind(&self) -> ItemKind {
        match self {
            Item::Count(_) => ItemKind::Number,
            Item::Ratio(_) => ItemKind::Ratio,
            Item::Label(_) => ItemKind::Label,
        }
    }
}

fn positive(item: &Item) -> bool {
    match item {
        Item::Count(n) | Item::Ratio(n) => *n > 0,
        Item::Label(s) => !s.is_empty(),
    }
}

#[test]
fn predicated_over_typed_buffer() {
    let kinds = KindSet::of(ItemKind::Number).with_subtype(ItemKind::Ratio);
    let typed = buffers::typed::<Item, _>(ArrayBuffer::new(), kinds).unwrap();
    let mut buffer = buffers::predicated(typed, positive).unwrap();

    buffer.insert(Item::Count(3)).unwrap();
    buffer.insert(Item::Ratio(2)).unwrap();
    // Right kind, fails the predicate.
    assert!(matches!(
        buffer.insert(Item::Count(-3)),
        Err(Error::InvalidArgument(_))
    ));
    // Passes the predicate, wrong kind.
    assert!(matches!(
        buffer.insert(Item::Label(String::from("x"))),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        buffer.insert(Item::Label(String::new())),
        Err(Error::InvalidArgument(_))
    ));

    assert_eq!(buffer.len(), 2);
    assert_eq!(
        buffer.flush().unwrap(),
        vec![Item::Count(3), Item::Ratio(2)]
    );
}

#[test]
fn predicated_over_typed_container() {
    let typed = containers::typed::<Item, _>(
        TreeBag::new(),
        KindSet::of(ItemKind::Label),
    )
    .unwrap();
    let mut bag = containers::predicated(typed, positive).unwrap();

    assert!(bag.add(Item::Label(String::from("a")), 2).unwrap());
    assert!(bag.add(Item::Label(String::new()), 1).is_err());
    assert!(bag.add(Item::Count(1), 1).is_err());
    assert!(bag
        .add_all(vec![Item::Label(String::from("b")), Item::Count(2)])
        .is_err());
    assert_eq!(bag.len(), 2);
    assert_eq!(bag.first().unwrap(), Item::Label(String::from("a")));
}

#[test]
fn predicated_rejects_invalid_backing_store() {
    let backing: ArrayBuffer<i64> = vec![4, -1, 2].into_iter().collect();
    assert!(matches!(
        buffers::predicated(backing, |x: &i64| *x > 0),
        Err(Error::InvalidArgument(_))
    ));

    let mut bag = HashBag::new();
    bag.add(-5i64, 1).unwrap();
    assert!(matches!(
        containers::predicated(bag, |x: &i64| *x > 0),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn predicated_failure_leaves_store_unchanged() {
    let backing: ArrayBuffer<i64> = vec![4, 2].into_iter().collect();
    let mut buffer = buffers::predicated(backing, |x: &i64| *x > 0).unwrap();
    let before = buffer.len();
    assert!(buffer.insert(0).is_err());
    assert!(buffer.insert_all(vec![7, -7]).is_err());
    assert_eq!(buffer.len(), before);
    assert_eq!(buffer.flush().unwrap(), vec![4, 2]);
}

#[test]
fn unmodifiable_mirrors_reads() {
    let backing: ArrayBuffer<u32> = vec![9, 8, 7].into_iter().collect();
    let mut buffer = buffers::unmodifiable(backing.clone());
    assert_eq!(buffer.len(), backing.len());
    assert_eq!(buffer.peek_first(), backing.peek_first());
    assert!(matches!(
        buffer.insert(1),
        Err(Error::UnsupportedOperation(_))
    ));
    assert!(matches!(
        buffer.remove_first(),
        Err(Error::UnsupportedOperation(_))
    ));
    assert_eq!(buffer.len(), 3);

    let mut backing = TreeBag::new();
    backing.add_all(vec![1u32, 1, 5]).unwrap();
    let mut bag = containers::unmodifiable(backing.clone());
    for value in [0, 1, 5] {
        assert_eq!(bag.count_of(&value), backing.count_of(&value));
    }
    assert_eq!(bag.first(), backing.first());
    assert_eq!(bag.last(), backing.last());
    assert!(matches!(
        bag.remove(&1, 1),
        Err(Error::UnsupportedOperation(_))
    ));
    assert!(matches!(bag.add(2, 1), Err(Error::UnsupportedOperation(_))));
    assert_eq!(bag.len(), 3);
}

#[test]
fn transformed_stores_transformed_values() {
    let mut buffer = buffers::transformed(
        ArrayBuffer::new(),
        map(|s: String| s.to_uppercase()),
    );
    buffer.insert(String::from("abc")).unwrap();
    buffer
        .insert_all(vec![String::from("de"), String::from("f")])
        .unwrap();
    let mut stored = Vec::new();
    buffer.for_each(&mut |s: &String| stored.push(s.clone()));
    assert_eq!(stored, vec!["ABC", "DE", "F"]);
    assert_eq!(buffer.remove_first().unwrap(), "ABC");

    let mut bag =
        containers::transformed(HashBag::new(), map(|x: u32| x % 10));
    bag.add(42, 2).unwrap();
    assert_eq!(bag.count_of(&2), 2);
    assert_eq!(bag.count_of(&42), 0);
}

#[test]
fn decorators_nest_in_any_order() {
    let inner = buffers::transformed(ArrayBuffer::new(), map(|x: u32| x + 1));
    let checked = buffers::predicated(inner, |x: &u32| *x < 100).unwrap();
    let mut buffer = buffers::synchronized(checked);
    buffer.insert(1).unwrap();
    assert!(buffer.insert(100).is_err());
    assert_eq!(buffer.remove_first().unwrap(), 2);
    assert_eq!(buffer.remove_first(), Err(Error::Underflow));
}

#[test]
fn synchronized_threads_never_fabricate() {
    let n_threads = 8u32;
    let per_thread = 500u32;
    let buffer = buffers::synchronized(ArrayBuffer::<u32>::new());

    let handles: Vec<_> = (0..n_threads)
        .map(|t| {
            let mut buffer = Concurrent::clone(&buffer);
            thread::spawn(move || {
                let mut removed = Vec::new();
                for i in 0..per_thread {
                    buffer.insert(t * per_thread + i).unwrap();
                    if i % 2 == 0 {
                        if let Ok(v) = buffer.remove_first() {
                            removed.push(v);
                        }
                    }
                }
                removed
            })
        })
        .collect();

    let mut removed: Vec<u32> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    let mut buffer = buffer;
    removed.extend(buffer.flush().unwrap());

    let unique: BTreeSet<u32> = removed.iter().copied().collect();
    assert_eq!(unique.len(), removed.len());
    assert_eq!(removed.len() as u32, n_threads * per_thread);
    assert!(unique.iter().all(|v| *v < n_threads * per_thread));
}

#[test]
fn synchronized_container_counts_every_copy() {
    let bag = containers::synchronized(HashBag::<u32>::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let mut bag = Concurrent::clone(&bag);
            thread::spawn(move || {
                for i in 0..100u32 {
                    bag.add(i % 10, 1).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(bag.len(), 400);
    assert_eq!(bag.unique_len(), 10);
    assert_eq!(bag.count_of(&3), 40);
}
