use std::hash::{BuildHasher, Hash, RandomState};

/// The capability of mapping a key directly onto one of `bucket_count` buckets.
///
/// Implementations must be pure functions of `(key, bucket_count)`: a map never stores hashes, it
/// recomputes the bucket of a key on every access. The returned index must be less than
/// `bucket_count`, which is never 0.
///
/// Keys that compare equal (according to the map's
/// [`Comparator`](crate::collections::traits::Comparator)) must produce the same index, including
/// when one side is a borrowed form of the key.
pub trait HashProvider<K: ?Sized> {
    /// Returns the index of the bucket that `key` belongs to.
    fn bucket_index(&self, key: &K, bucket_count: usize) -> usize;
}

/// A [`HashProvider`] that defers to [`Hash`] and any [`BuildHasher`], reducing the 64-bit hash
/// modulo the bucket count.
///
/// The default hasher is [`RandomState`], which is seeded once per instance. A map's provider is
/// cloned along with the map, so a key still lands in the same bucket in the copy.
#[derive(Debug, Default, Clone)]
pub struct StdHash<B: BuildHasher = RandomState>(pub B);

impl<K: Hash + ?Sized, B: BuildHasher> HashProvider<K> for StdHash<B> {
    fn bucket_index(&self, key: &K, bucket_count: usize) -> usize {
        (self.0.hash_one(key) % bucket_count as u64) as usize
    }
}

/// A [`HashProvider`] for integer keys which uses the integer itself as the hash, so a key `k`
/// lands in bucket `k mod bucket_count` (taking the non-negative remainder for negative keys).
///
/// Collisions are entirely predictable with this provider: in a map with 10 buckets, the keys 1,
/// 11 and -9 all share a bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IdentityHash;

macro_rules! identity_hash {
    ($($int:ty),+) => {$(
        impl HashProvider<$int> for IdentityHash {
            fn bucket_index(&self, key: &$int, bucket_count: usize) -> usize {
                (*key as i128).rem_euclid(bucket_count as i128) as usize
            }
        }
    )+};
}

identity_hash!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
