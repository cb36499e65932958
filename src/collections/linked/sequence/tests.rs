#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::sync::{Arc, Mutex};
use std::thread;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn collect<T: Clone>(seq: &OrderedSequence<T>) -> Vec<T> {
    seq.iter().cloned().collect()
}

#[test]
fn test_push_back_then_pop_front() {
    let mut seq = OrderedSequence::new();
    seq.push_back(7);
    assert_eq!(seq.pop_front(), Some(7), "A single pushed element should come straight back out.");
    assert!(seq.is_empty());
    seq.verify_links();
}

#[test]
fn test_push_back_order_and_len() {
    for n in 0..10 {
        let mut seq = OrderedSequence::new();
        for i in 0..n {
            seq.push_back(i);
        }
        assert_eq!(seq.len(), n);
        assert_eq!(
            collect(&seq),
            (0..n).collect::<Vec<_>>(),
            "Elements should be yielded in insertion order."
        );
        seq.verify_links();
    }
}

#[test]
fn test_pop_empty() {
    let mut seq = OrderedSequence::<u8>::new();
    assert_eq!(seq.pop_front(), None);
    assert_eq!(seq.len(), 0, "Popping an empty sequence shouldn't change its length.");
    assert_eq!(seq.pop_back(), None);
    assert!(seq.is_empty());
    assert_eq!(seq.front(), None);
    assert_eq!(seq.back(), None);
}

#[test]
fn test_push_pop_inverse() {
    let mut seq = OrderedSequence::from([1, 2, 3]);

    seq.push_back(4);
    assert_eq!(seq.pop_back(), Some(4));
    seq.push_front(0);
    assert_eq!(seq.pop_front(), Some(0));
    assert_eq!(collect(&seq), [1, 2, 3], "Push and pop at the same end should cancel out.");
    seq.verify_links();

    let mut seq = OrderedSequence::new();
    seq.push_front("only");
    assert_eq!(seq.pop_front(), Some("only"));
    assert!(seq.is_empty(), "Popping the only element should return to the empty state.");
    seq.push_back("again");
    assert_eq!(seq.pop_back(), Some("again"));
    assert!(seq.is_empty());
}

#[test]
fn test_contains() {
    let mut seq = OrderedSequence::new();
    seq.push_back("Sneaker: Jordan 1");
    seq.push_back("Sneaker: Jordan 2");
    seq.push_front("Sneaker: Jordan 0");

    assert!(seq.contains(&"Sneaker: Jordan 1"));
    assert!(seq.contains(&"Sneaker: Jordan 0"), "Values pushed to the front should be found.");
    assert!(!seq.contains(&"Sneaker: Jordan 3"));
    assert!(!OrderedSequence::<&str>::new().contains(&""));

    assert_eq!(seq.index_of(&"Sneaker: Jordan 2"), Some(2));
    assert_eq!(seq.index_of(&"Sneaker: Jordan 3"), None);
}

#[test]
fn test_absent_is_not_a_sentinel() {
    let mut seq = OrderedSequence::new();
    seq.push_back(String::new());
    seq.push_back(String::from("Hamilton"));
    assert_eq!(
        seq.pop_front(),
        Some(String::new()),
        "An empty string is a real value, distinct from popping nothing."
    );
    assert_eq!(seq.pop_front(), Some(String::from("Hamilton")));
    assert_eq!(seq.pop_front(), None);
}

#[test]
fn test_front_and_back_scenario() {
    let mut seq = OrderedSequence::new();
    for i in 1..=4 {
        seq.push_back(i);
    }
    assert_eq!(collect(&seq), [1, 2, 3, 4]);

    assert_eq!(seq.pop_front(), Some(1));
    assert_eq!(collect(&seq), [2, 3, 4]);

    assert_eq!(seq.pop_back(), Some(4));
    assert_eq!(collect(&seq), [2, 3]);
    assert_eq!(seq.back(), Some(&3), "The tail should move back after pop_back.");
    seq.verify_links();

    seq.push_back(5);
    assert_eq!(collect(&seq), [2, 3, 5], "Appending after pop_back should use the new tail.");
    seq.verify_links();
}

#[test]
fn test_stack_scenario() {
    let mut garage = OrderedSequence::new();
    garage.push_back("Ferrari");
    garage.push_back("Mercedes");
    garage.push_back("Red Bull");

    assert_eq!(garage.pop_back(), Some("Red Bull"));
    assert_eq!(garage.pop_back(), Some("Mercedes"));
    assert_eq!(garage.pop_back(), Some("Ferrari"));
    assert!(garage.is_empty());
    assert_eq!(garage.pop_back(), None);
}

#[test]
fn test_queue_scenario() {
    let mut pit_lane = OrderedSequence::new();
    pit_lane.push_back("Hamilton");
    pit_lane.push_back("Verstappen");
    pit_lane.push_back("Leclerc");

    assert_eq!(pit_lane.pop_front(), Some("Hamilton"));
    assert_eq!(pit_lane.pop_front(), Some("Verstappen"));
    assert_eq!(pit_lane.pop_front(), Some("Leclerc"));
    assert!(pit_lane.is_empty());
}

#[test]
fn test_iter_is_restartable() {
    let seq = OrderedSequence::from([1, 2, 3]);

    let first: Vec<_> = seq.iter().collect();
    let second: Vec<_> = seq.iter().collect();
    assert_eq!(first, second, "Each call to iter should start again from the front.");

    let mut iter = seq.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    let copy = iter.clone();
    assert_eq!(iter.collect::<Vec<_>>(), copy.collect::<Vec<_>>());

    let mut iter = seq.iter();
    iter.by_ref().count();
    assert_eq!(iter.next(), None, "Iter should stay exhausted.");
    assert_eq!(seq.len(), 3, "Iterating shouldn't modify the sequence.");
}

#[test]
fn test_iter_mut() {
    let mut seq = OrderedSequence::from([1, 2, 3]);
    for value in seq.iter_mut() {
        *value *= 10;
    }
    assert_eq!(collect(&seq), [10, 20, 30]);

    *seq.front_mut().unwrap() += 1;
    *seq.back_mut().unwrap() += 2;
    assert_eq!(collect(&seq), [11, 20, 32]);
}

#[test]
fn test_into_iter() {
    let seq = OrderedSequence::from(["a", "b", "c"]);
    let mut iter = seq.into_iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some("a"));
    assert_eq!(iter.collect::<Vec<_>>(), ["b", "c"]);
}

#[test]
fn test_get_and_index() {
    let mut seq = OrderedSequence::from([10, 20, 30]);
    assert_eq!(*seq.get(0), 10);
    assert_eq!(seq[1], 20);
    assert_eq!(seq[2], 30, "The last index should resolve to the tail.");

    seq[1] = 21;
    *seq.get_mut(2) += 1;
    assert_eq!(collect(&seq), [10, 21, 31]);

    assert_eq!(seq.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(
        OrderedSequence::<u8>::new().try_get(0),
        Err(IndexOutOfBounds { index: 0, len: 0 })
    );
    assert_eq!(
        seq.try_get(5).unwrap_err().to_string(),
        "Index 5 out of bounds for collection with 3 elements!"
    );

    assert_panics!({ seq.get(3); });
    assert_panics!({ seq[7] = 0; });
}

#[test]
fn test_insert() {
    let mut seq = OrderedSequence::new();
    seq.insert(0, 2);
    seq.insert(0, 0);
    seq.insert(2, 4);
    seq.insert(1, 1);
    seq.insert(3, 3);
    assert_eq!(collect(&seq), [0, 1, 2, 3, 4]);
    assert_eq!(seq.back(), Some(&4));
    seq.verify_links();

    assert_eq!(
        seq.try_insert(6, 6),
        Err(IndexOrCapOverflow::IndexOutOfBounds(IndexOutOfBounds { index: 6, len: 5 }))
    );
    assert!(seq.try_insert(9, 9).unwrap_err().is_index_out_of_bounds());
    assert_panics!({ seq.insert(10, 10); });
    assert_eq!(seq.len(), 5, "A failed insert shouldn't change the sequence.");
}

#[test]
fn test_remove_and_replace() {
    let mut seq = OrderedSequence::from([0, 1, 2, 3, 4]);
    assert_eq!(seq.remove(2), 2);
    seq.verify_links();
    assert_eq!(seq.remove(0), 0);
    seq.verify_links();
    assert_eq!(seq.remove(2), 4, "Removing the last index should move the tail.");
    seq.verify_links();
    assert_eq!(collect(&seq), [1, 3]);

    assert_eq!(seq.replace(1, 30), 3);
    assert_eq!(collect(&seq), [1, 30]);

    assert_eq!(seq.try_remove(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(seq.try_replace(2, 0), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_panics!({ seq.remove(5); });

    assert_eq!(seq.remove(0), 1);
    assert_eq!(seq.remove(0), 30);
    assert!(seq.is_empty());
}

#[test]
fn test_append() {
    let mut seq = OrderedSequence::from([1, 2]);
    seq.append(OrderedSequence::from([3, 4]));
    assert_eq!(collect(&seq), [1, 2, 3, 4]);
    assert_eq!(seq.len(), 4);
    seq.verify_links();

    seq.append(OrderedSequence::new());
    assert_eq!(seq.len(), 4, "Appending an empty sequence should do nothing.");

    let mut empty = OrderedSequence::new();
    empty.append(seq);
    assert_eq!(collect(&empty), [1, 2, 3, 4]);
    empty.push_back(5);
    assert_eq!(empty.back(), Some(&5), "The appended tail should become the tail.");
    empty.verify_links();
}

#[test]
fn test_nodes_dropped_once() {
    let drops = CountedDrop::counter();

    let mut seq: OrderedSequence<_> = (0..6).map(|i| CountedDrop::new(i, &drops)).collect();
    let popped = seq.pop_front();
    assert_eq!(drops.get(), 0, "Popping should hand the value back, not drop it.");
    drop(popped);
    assert_eq!(drops.get(), 1);

    drop(seq.pop_back());
    drop(seq.remove(1));
    assert_eq!(drops.get(), 3);

    drop(seq);
    assert_eq!(drops.get(), 6, "Dropping the sequence should drop every remaining element.");

    let drops = CountedDrop::counter();
    let mut seq: OrderedSequence<_> = (0..4).map(|i| CountedDrop::new(i, &drops)).collect();
    seq.clear();
    assert_eq!(drops.get(), 4);
    assert!(seq.is_empty());

    let drops = CountedDrop::counter();
    let seq: OrderedSequence<_> = (0..4).map(|i| CountedDrop::new(i, &drops)).collect();
    let mut iter = seq.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(drops.get(), 4, "A partially consumed IntoIter should drop what's left.");
}

#[test]
fn test_equality_and_hash() {
    let a = OrderedSequence::from([1, 2, 3]);
    let mut b = OrderedSequence::from([2, 3]);
    b.push_front(1);
    let c = OrderedSequence::from([1, 2, 4]);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, OrderedSequence::from([1, 2]));
    assert_eq!(OrderedSequence::<u8>::new(), OrderedSequence::new());

    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b), "Equal sequences should hash equally.");

    let clone = a.clone();
    assert_eq!(clone, a);
    drop(a);
    assert_eq!(collect(&clone), [1, 2, 3], "Clones shouldn't share nodes.");
}

#[test]
fn test_formatting() {
    let seq = OrderedSequence::from([1, 2, 3, 4]);
    assert_eq!(seq.to_string(), "1 -> 2 -> 3 -> 4 -> nil");
    assert_eq!(OrderedSequence::<u8>::new().to_string(), "nil");
    assert_eq!(
        format!("{seq:?}"),
        "OrderedSequence { contents: [1, 2, 3, 4], len: 4 }"
    );
}

#[test]
fn test_shared_behind_mutex() {
    let seq = Arc::new(Mutex::new(OrderedSequence::new()));

    let handles: Vec<_> = (0..4).map(|t| {
        let seq = Arc::clone(&seq);
        thread::spawn(move || {
            for i in 0..25 {
                seq.lock().unwrap().push_back(t * 100 + i);
            }
        })
    }).collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let seq = seq.lock().unwrap();
    assert_eq!(seq.len(), 100);
    seq.verify_links();
}

#[cfg(feature = "traits")]
mod disciplines {
    use super::*;
    use crate::collections::traits::{Queue, Stack};

    #[test]
    fn test_stack() {
        let mut garage = OrderedSequence::new();
        for car in ["Ferrari", "Mercedes", "Red Bull", "McLaren", "Aston Martin"] {
            Stack::push(&mut garage, car);
        }
        assert_eq!(Stack::peek(&garage), Some(&"Aston Martin"));
        assert_eq!(Stack::len(&garage), 5);

        assert_eq!(
            garage.drain_top().collect::<Vec<_>>(),
            ["Aston Martin", "McLaren", "Red Bull", "Mercedes", "Ferrari"]
        );
        assert!(Stack::is_empty(&garage));
        assert_eq!(Stack::pop(&mut garage), None);
    }

    #[test]
    fn test_queue() {
        let mut pit_lane = OrderedSequence::new();
        for driver in ["Hamilton", "Verstappen", "Leclerc"] {
            pit_lane.enqueue(driver);
        }
        assert_eq!(pit_lane.peek_front(), Some(&"Hamilton"));

        let mut drain = pit_lane.drain_front();
        assert_eq!(drain.len(), 3);
        assert_eq!(drain.next(), Some("Hamilton"));
        assert_eq!(drain.collect::<Vec<_>>(), ["Verstappen", "Leclerc"]);
        assert_eq!(pit_lane.dequeue(), None);
    }
}
