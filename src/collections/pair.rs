use std::fmt::{self, Display, Formatter};

/// A key and its associated value, stored together. This is the payload of every slot in a
/// [`HashMap`](crate::collections::hash::HashMap).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyValuePair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValuePair<K, V> {
    /// Creates a new KeyValuePair from the provided `key` and `value`.
    pub const fn new(key: K, value: V) -> KeyValuePair<K, V> {
        KeyValuePair { key, value }
    }

    /// Returns references to the key and value as a tuple.
    pub const fn as_tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Consumes self and returns the key and value as a tuple.
    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KeyValuePair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        KeyValuePair::new(key, value)
    }
}

impl<K: Display, V: Display> Display for KeyValuePair<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
