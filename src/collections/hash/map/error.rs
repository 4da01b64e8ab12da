use derive_more::{Display, Error};

/// A HashMap was asked for zero buckets or zero slots per bucket.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("HashMap requires a non-zero bucket count and slots-per-bucket hint")]
pub struct ZeroCapacityError;

/// The key being added is already associated with a value.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("key already exists in HashMap")]
pub struct DuplicateKeyError;

/// The key being accessed isn't associated with a value.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("key not found in HashMap")]
pub struct KeyNotFoundError;
