use std::iter::FusedIterator;

use super::HashMap;
use crate::collections::KeyValuePair;
use crate::collections::linked::slot_list::{
    IntoIter as SlotIntoIter, Iter as SlotIter, IterMut as SlotIterMut,
};
use crate::collections::linked::{SlotList, SlotPosition};
use crate::util::option::OptionExtension;

impl<K, V, H, C> IntoIterator for HashMap<K, V, H, C> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.slots.into_iter())
    }
}

/// A type for owned iteration over a [`HashMap`]. Produces values of type `(K, V)`.
pub struct IntoIter<K, V>(pub(crate) SlotIntoIter<KeyValuePair<K, V>>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(KeyValuePair::into_tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<'a, K, V, H, C> IntoIterator for &'a HashMap<K, V, H, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.slots.iter())
    }
}

/// A type for borrowed iteration over a [`HashMap`]. Produces values of type `(&K, &V)`.
pub struct Iter<'a, K, V>(pub(crate) SlotIter<'a, KeyValuePair<K, V>>);

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(KeyValuePair::as_tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// A type for owned iteration over the keys of a [`HashMap`].
///
/// See [`HashMap::into_keys`].
pub struct IntoKeys<K, V>(pub(crate) IntoIter<K, V>);

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {}

/// A type for borrowed iteration over the keys of a [`HashMap`].
///
/// See [`HashMap::keys`].
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// A type for owned iteration over the values of a [`HashMap`].
///
/// See [`HashMap::into_values`].
pub struct IntoValues<K, V>(pub(crate) IntoIter<K, V>);

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> FusedIterator for IntoValues<K, V> {}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {}

/// A type for mutable iteration over the values of a [`HashMap`].
///
/// See [`HashMap::values_mut`].
pub struct ValuesMut<'a, K, V>(pub(crate) SlotIterMut<'a, KeyValuePair<K, V>>);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| &mut e.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

/// A type for borrowed iteration over the values of a [`HashMap`].
///
/// See [`HashMap::values`].
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// Walks the chain of a single bucket, yielding each slot with its position.
pub(crate) struct Chain<'a, K, V> {
    pub(crate) slots: &'a SlotList<KeyValuePair<K, V>>,
    pub(crate) next: Option<SlotPosition>,
    pub(crate) remaining: usize,
}

impl<'a, K, V> Iterator for Chain<'a, K, V> {
    type Item = (SlotPosition, &'a KeyValuePair<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;

        // UNREACHABLE: A bucket's recorded length never exceeds the slots linked after its head.
        let position = self.next.unreachable();
        let pair = self.slots.get(position).unreachable();
        self.next = self.slots.next(position);

        Some((position, pair))
    }
}
