#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_add_and_order() {
    let mut list = SlotList::new();
    let a = list.add("a");
    let b = list.add("b");
    let c = list.add("c");

    list.verify_double_links();
    assert_eq!(list.len(), 3);
    assert_eq!(list.first(), Some(a));
    assert_eq!(list.last(), Some(c));
    assert_eq!(list.next(a), Some(b));
    assert_eq!(list.prev(c), Some(b));
    assert_eq!(list.next(c), None, "The tail should have no following position.");
    assert_eq!(list.iter().copied().collect::<Box<[_]>>(), ["a", "b", "c"].into());
}

#[test]
fn test_insert_before() {
    let mut list = SlotList::new();
    let b = list.add(2);
    let d = list.add(4);

    let a = list.insert(1, b);
    let c = list.insert(3, d);
    list.verify_double_links();

    assert_eq!(list.first(), Some(a), "Inserting before the head should move the head.");
    assert_eq!(list.next(b), Some(c));
    assert_eq!(list.prev(d), Some(c));
    assert_eq!(list.iter().copied().collect::<Box<[_]>>(), [1, 2, 3, 4].into());
}

#[test]
fn test_positions_survive_other_edits() {
    let mut list = SlotList::new();
    let positions = (0..10).map(|i| list.add(i)).collect::<Box<[_]>>();

    list.remove(positions[0]);
    list.remove(positions[5]);
    list.insert(100, positions[3]);
    list.add(200);

    for (i, position) in positions.iter().enumerate() {
        match i {
            0 | 5 => assert!(!list.contains(*position)),
            _ => assert_eq!(
                list.get(*position),
                Some(&i),
                "Positions of untouched slots should remain valid."
            ),
        }
    }
    list.verify_double_links();
}

#[test]
fn test_remove_returns_next() {
    let mut list = SlotList::new();
    let a = list.add('a');
    let b = list.add('b');
    let c = list.add('c');

    assert_eq!(list.remove(b), ('b', Some(c)));
    assert_eq!(list.remove(c), ('c', None), "Removing the tail should return the end marker.");
    assert_eq!(list.remove(a), ('a', None));
    assert!(list.is_empty());
    assert_eq!(list.first(), None);
    list.verify_double_links();
}

#[test]
fn test_stale_positions() {
    let mut list = SlotList::new();
    let a = list.add(1);
    list.remove(a);
    let b = list.add(2);

    assert!(!list.contains(a), "A removed position should not alias a reused slot.");
    assert!(list.contains(b));
    assert_eq!(list.get(a), None);
    assert_eq!(list.next(a), None);
    assert_eq!(list.try_remove(a), Err(InvalidPositionError));
    assert_eq!(list.try_insert(3, a), Err(InvalidPositionError));
    assert_eq!(list.len(), 1, "Failed operations should leave the list unchanged.");

    assert_panics!({
        let mut list = SlotList::new();
        let a = list.add(1);
        list.remove(a);
        list.remove(a);
    });
}

#[test]
fn test_reserve() {
    let mut list = SlotList::<u64>::with_cap(4);
    assert!(list.cap() >= 4);

    list.reserve(32);
    let cap = list.cap();
    assert!(cap >= 32);

    for i in 0..32 {
        list.add(i);
    }
    assert_eq!(list.cap(), cap, "Adding reserved slots shouldn't grow the arena.");
}

#[test]
fn test_iter_mut_in_list_order() {
    let mut list = SlotList::new();
    let b = list.add(String::from("b"));
    list.insert(String::from("a"), b);
    list.add(String::from("c"));

    for (i, value) in list.iter_mut().enumerate() {
        value.push_str(&i.to_string());
    }

    assert_eq!(
        list.into_iter().collect::<Box<[_]>>(),
        ["a0".to_string(), "b1".into(), "c2".into()].into()
    );
}

#[test]
fn test_drops() {
    let counter = Rc::new(Cell::new(0));
    let mut list = (0..5).map(|_| CountedDrop::new(&counter)).collect::<SlotList<_>>();

    let first = list.first().expect("list is not empty");
    drop(list.remove(first));
    assert_eq!(counter.get(), 1, "Removing a slot should destroy its value.");

    list.clear();
    assert_eq!(counter.get(), 5);
    assert!(list.is_empty());
}
