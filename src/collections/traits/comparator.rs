use std::cmp::Ordering;

/// The capability of ordering two values of `T`.
///
/// [`HashMap`](crate::collections::hash::HashMap) only ever relies on [`equals`](Self::equals),
/// but implementations should still provide a consistent total order.
///
/// Closures of the form `Fn(&T, &T) -> Ordering` are comparators as well.
pub trait Comparator<T: ?Sized> {
    /// Compares `lhs` to `rhs`.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;

    /// Returns true if `lhs` and `rhs` compare equal.
    fn equals(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs).is_eq()
    }
}

/// A [`Comparator`] which uses the [`Ord`] implementation of `T`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }

    fn equals(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}
