use std::fmt::{self, Debug, Formatter};

use derive_more::IsVariant;
use slotmap::{SlotMap, new_key_type};

use super::{InvalidPositionError, Iter, IterMut, Positions};
use crate::util::result::ResultExtension;

new_key_type! {
    /// The physical position of a slot inside a [`SlotList`].
    ///
    /// A position stays valid for as long as its slot is in the list, no matter how many other
    /// slots are inserted or removed around it. Once the slot is removed, the position is stale
    /// and every lookup with it fails rather than aliasing whatever slot reuses the storage.
    pub struct SlotPosition;
}

/// A doubly linked list where every node lives in one shared arena, and nodes are referred to by
/// [`SlotPosition`] instead of by index.
///
/// Positions make it possible for several independent owners to remember where "their" run of
/// slots starts inside one list. This is what [`HashMap`](crate::collections::hash::HashMap) uses
/// to keep all of its buckets in a single allocation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of slots in the SlotList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)`* |
/// | `insert` | `O(1)`* |
/// | `remove` | `O(1)` |
/// | `get` | `O(1)` |
/// | `next/prev` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
///
/// \* If the arena has no free storage left, it grows, which takes `O(n)`.
///
/// \** If the arena already has room for the requested slots, `reserve` is `O(1)`.
#[derive(Clone)]
pub struct SlotList<T> {
    pub(crate) slots: SlotMap<SlotPosition, Slot<T>>,
    pub(crate) state: ListState,
}

#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    pub value: T,
    pub prev: Option<SlotPosition>,
    pub next: Option<SlotPosition>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListEnds),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListEnds {
    pub head: SlotPosition,
    pub tail: SlotPosition,
}

use ListState::*;

impl<T> SlotList<T> {
    /// Creates a new SlotList with no slots and no allocated storage.
    pub fn new() -> SlotList<T> {
        SlotList {
            slots: SlotMap::with_key(),
            state: Empty,
        }
    }

    /// Creates a new SlotList with room for `cap` slots before the arena has to grow.
    pub fn with_cap(cap: usize) -> SlotList<T> {
        SlotList {
            slots: SlotMap::with_capacity_and_key(cap),
            state: Empty,
        }
    }

    /// Returns the number of slots in the SlotList.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the SlotList contains no slots.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the number of slots the SlotList can hold without growing its arena.
    pub fn cap(&self) -> usize {
        self.slots.capacity()
    }

    /// Ensures that `extra` more slots can be added without the arena growing. Positions of
    /// existing slots are unaffected.
    pub fn reserve(&mut self, extra: usize) {
        self.slots.reserve(extra);
    }

    /// Returns the position of the first slot, if the list isn't empty.
    pub const fn first(&self) -> Option<SlotPosition> {
        match self.state {
            Empty => None,
            Full(ListEnds { head, .. }) => Some(head),
        }
    }

    /// Returns the position of the last slot, if the list isn't empty.
    pub const fn last(&self) -> Option<SlotPosition> {
        match self.state {
            Empty => None,
            Full(ListEnds { tail, .. }) => Some(tail),
        }
    }

    /// Returns true if `position` names a slot that is currently in the list. Stale positions
    /// return false.
    pub fn contains(&self, position: SlotPosition) -> bool {
        self.slots.contains_key(position)
    }

    /// Returns a reference to the value at `position`, or None if the position is vacant.
    pub fn get(&self, position: SlotPosition) -> Option<&T> {
        self.slots.get(position).map(|slot| &slot.value)
    }

    /// Returns a mutable reference to the value at `position`, or None if the position is vacant.
    pub fn get_mut(&mut self, position: SlotPosition) -> Option<&mut T> {
        self.slots.get_mut(position).map(|slot| &mut slot.value)
    }

    /// Returns the position following `position`. None is returned both at the end of the list
    /// and for a vacant `position`.
    pub fn next(&self, position: SlotPosition) -> Option<SlotPosition> {
        self.slots.get(position).and_then(|slot| slot.next)
    }

    /// Returns the position preceding `position`. None is returned both at the start of the list
    /// and for a vacant `position`.
    pub fn prev(&self, position: SlotPosition) -> Option<SlotPosition> {
        self.slots.get(position).and_then(|slot| slot.prev)
    }

    /// Appends `value` to the end of the list and returns its new position.
    pub fn add(&mut self, value: T) -> SlotPosition {
        let position = self.slots.insert(Slot {
            value,
            prev: self.last(),
            next: None,
        });

        match &mut self.state {
            Empty => self.state = Full(ListEnds { head: position, tail: position }),
            Full(ends) => {
                self.slots[ends.tail].next = Some(position);
                ends.tail = position;
            },
        }

        position
    }

    /// Inserts `value` immediately before the slot at `before` and returns its new position.
    ///
    /// # Panics
    /// Panics if `before` is vacant.
    pub fn insert(&mut self, value: T, before: SlotPosition) -> SlotPosition {
        self.try_insert(value, before).throw()
    }

    /// Inserts `value` immediately before the slot at `before` and returns its new position, or
    /// an [`Err`] if `before` is vacant. The list is unchanged on failure.
    pub fn try_insert(
        &mut self,
        value: T,
        before: SlotPosition,
    ) -> Result<SlotPosition, InvalidPositionError> {
        let prev = self.slots.get(before).ok_or(InvalidPositionError)?.prev;

        let position = self.slots.insert(Slot {
            value,
            prev,
            next: Some(before),
        });

        self.slots[before].prev = Some(position);
        match prev {
            Some(prev) => self.slots[prev].next = Some(position),
            // Inserting before the head, so before must have been the head.
            None => if let Full(ends) = &mut self.state {
                ends.head = position;
            },
        }

        Ok(position)
    }

    /// Unlinks and destroys the slot at `position`, returning its value along with the position
    /// of the slot that followed it (None if it was the tail).
    ///
    /// # Panics
    /// Panics if `position` is vacant.
    pub fn remove(&mut self, position: SlotPosition) -> (T, Option<SlotPosition>) {
        self.try_remove(position).throw()
    }

    /// Unlinks and destroys the slot at `position`, returning its value along with the position
    /// of the slot that followed it (None if it was the tail), or an [`Err`] if `position` is
    /// vacant.
    pub fn try_remove(
        &mut self,
        position: SlotPosition,
    ) -> Result<(T, Option<SlotPosition>), InvalidPositionError> {
        let Slot { value, prev, next } = self.slots.remove(position).ok_or(InvalidPositionError)?;

        match prev {
            Some(prev) => self.slots[prev].next = next,
            None => if let Full(ends) = &mut self.state
                && let Some(next) = next
            {
                ends.head = next;
            },
        }

        match next {
            Some(next) => self.slots[next].prev = prev,
            None => if let Full(ends) = &mut self.state
                && let Some(prev) = prev
            {
                ends.tail = prev;
            },
        }

        if prev.is_none() && next.is_none() {
            self.state = Empty;
        }

        Ok((value, next))
    }

    /// Removes the first slot and returns its value, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.first()?;
        Some(self.remove(head).0)
    }

    /// Removes every slot, keeping the allocated storage. All positions become stale.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.state = Empty;
    }

    /// Returns an iterator over the positions of all slots, in list order.
    pub fn positions(&self) -> Positions<'_, T> {
        Positions {
            list: self,
            next: self.first(),
            len: self.len(),
        }
    }

    /// Returns an iterator over all values in list order, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all values in list order, as mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> SlotList<T> {
    #[allow(clippy::unwrap_used)]
    #[allow(unused)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => assert!(self.slots.is_empty()),
            Full(ListEnds { head, tail }) => {
                assert!(self.slots[head].prev.is_none());
                let mut count = 1;
                let mut curr = head;
                while let Some(next) = self.slots[curr].next {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(self.slots[next].prev.unwrap() == curr);
                    curr = next;
                    count += 1;
                }
                assert!(tail == curr);
                assert_eq!(count, self.slots.len());
            },
        }
    }
}

impl<T> Default for SlotList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SlotList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SlotList::new();
        for item in iter {
            list.add(item);
        }
        list
    }
}

impl<T: PartialEq> PartialEq for SlotList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SlotList<T> {}

impl<T: Debug> Debug for SlotList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotList")
            .field("contents", &self.iter().collect::<Box<[_]>>())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}
