use std::iter::FusedIterator;

use slotmap::SecondaryMap;

use super::{SlotList, SlotPosition};

impl<T> IntoIterator for SlotList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// A type for owned iteration over a [`SlotList`], in list order. Produces values of type `T`.
pub struct IntoIter<T> {
    // The list already knows how to unlink its head, there's no point repeating that here.
    pub(crate) list: SlotList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a SlotList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.positions(),
        }
    }
}

/// A type for borrowed iteration over a [`SlotList`], in list order. Produces values of type
/// `&T`.
pub struct Iter<'a, T> {
    pub(crate) inner: Positions<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.inner.list;
        self.inner.next().and_then(|position| list.get(position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, T> IntoIterator for &'a mut SlotList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let next = self.first();
        // The arena hands out disjoint mutable borrows in storage order only, so they're parked
        // by position and then released in list order.
        let mut parked = SecondaryMap::with_capacity(self.slots.len());
        for (position, slot) in self.slots.iter_mut() {
            parked.insert(position, (&mut slot.value, slot.next));
        }

        IterMut {
            parked,
            next,
        }
    }
}

/// A type for mutable iteration over a [`SlotList`], in list order. Produces values of type
/// `&mut T`.
pub struct IterMut<'a, T> {
    pub(crate) parked: SecondaryMap<SlotPosition, (&'a mut T, Option<SlotPosition>)>,
    pub(crate) next: Option<SlotPosition>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let (value, next) = self.parked.remove(self.next?)?;
        self.next = next;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.parked.len()
    }
}

/// A type for iterating over the [`SlotPosition`]s of a [`SlotList`], in list order.
///
/// See [`SlotList::positions`].
pub struct Positions<'a, T> {
    pub(crate) list: &'a SlotList<T>,
    pub(crate) next: Option<SlotPosition>,
    pub(crate) len: usize,
}

impl<T> Iterator for Positions<'_, T> {
    type Item = SlotPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.next?;
        self.next = self.list.next(position);
        self.len -= 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> FusedIterator for Positions<'_, T> {}

impl<T> ExactSizeIterator for Positions<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}
