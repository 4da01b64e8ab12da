use std::num::NonZeroUsize;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use crate::collections::linked::SlotPosition;
use crate::util::option::OptionExtension;

/// The head of one bucket's chain: where its first slot is in the shared
/// [`SlotList`](crate::collections::linked::SlotList), and how many slots follow from there.
///
/// The slots of a chain are always contiguous in the list, so walking `len` positions from `head`
/// visits exactly the bucket's entries. An empty bucket has no head at all, rather than a head
/// with a count of 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Bucket {
    #[default]
    Empty,
    Chain {
        head: SlotPosition,
        len: NonZeroUsize,
    },
}

use Bucket::*;

impl Bucket {
    /// Returns the position of the first slot in the chain, if there is one.
    pub const fn head(&self) -> Option<SlotPosition> {
        match self {
            Empty => None,
            Chain { head, .. } => Some(*head),
        }
    }

    /// Returns the number of slots in the chain.
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Chain { len, .. } => len.get(),
        }
    }

    /// Records a new slot that was placed directly before the current head (or anywhere, for an
    /// empty bucket) as the head of the chain.
    pub(crate) fn push_head(&mut self, position: SlotPosition) {
        *self = match *self {
            Empty => Chain { head: position, len: NonZeroUsize::MIN },
            Chain { len, .. } => Chain {
                head: position,
                // The slot list would overflow long before this does.
                len: len.checked_add(1).unwrap_or(len),
            },
        };
    }

    /// Accounts for the removal of the slot at `removed`, which belonged to this chain. `next` is
    /// the position that followed the removed slot in the list.
    ///
    /// When the head itself is removed from a chain of more than one slot, the slot after it
    /// becomes the new head. Without this, the bucket would keep pointing at a vacant position.
    pub(crate) fn unlink(&mut self, removed: SlotPosition, next: Option<SlotPosition>) {
        let Chain { head, len } = *self else {
            unreachable!("unlinking a slot from an empty bucket");
        };

        *self = match NonZeroUsize::new(len.get() - 1) {
            None => Empty,
            Some(len) if head == removed => Chain {
                // UNREACHABLE: The chain is contiguous and has more slots after its head.
                head: next.unreachable(),
                len,
            },
            Some(len) => Chain { head, len },
        };
    }
}

/// A fixed number of [`Bucket`]s, all empty to start with. The length never changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketArray(pub(crate) Box<[Bucket]>);

impl BucketArray {
    /// Creates a new BucketArray with `count` empty buckets.
    pub fn new(count: usize) -> BucketArray {
        BucketArray(vec![Bucket::Empty; count].into_boxed_slice())
    }

    /// Returns the number of buckets.
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no buckets at all.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resets every bucket to empty.
    pub fn clear(&mut self) {
        self.0.fill(Bucket::Empty);
    }

    /// Returns an iterator over all buckets, in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bucket> {
        self.0.iter()
    }
}

impl Index<usize> for BucketArray {
    type Output = Bucket;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for BucketArray {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use slotmap::KeyData;

    use super::*;

    fn position(index: u64) -> SlotPosition {
        // Version 1 in the upper half keeps these valid, distinct keys.
        SlotPosition::from(KeyData::from_ffi((1 << 32) | index))
    }

    #[test]
    fn test_new_buckets_are_empty() {
        let buckets = BucketArray::new(8);
        assert_eq!(buckets.len(), 8);
        assert!(buckets.iter().all(|bucket| bucket.is_empty() && bucket.head().is_none()));
    }

    #[test]
    fn test_unlink_head_moves_to_next() {
        let mut bucket = Bucket::Empty;
        bucket.push_head(position(1));
        bucket.push_head(position(2));
        bucket.push_head(position(3));
        assert_eq!(bucket.head(), Some(position(3)));
        assert_eq!(bucket.len(), 3);

        bucket.unlink(position(3), Some(position(2)));
        assert_eq!(bucket.head(), Some(position(2)), "Removing the head should advance it.");
        assert_eq!(bucket.len(), 2);

        bucket.unlink(position(1), None);
        assert_eq!(bucket.head(), Some(position(2)), "Removing a later slot keeps the head.");

        bucket.unlink(position(2), None);
        assert!(bucket.is_empty(), "A bucket with no slots has no head at all.");
    }
}
