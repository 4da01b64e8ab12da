//! A small foundation library: a separate-chaining hash table built on a shared slot list, and a
//! proleptic-Gregorian calendar engine with time-zone and DST support.
//!
//! # Collections
//! [`HashMap`](collections::hash::HashMap) doesn't own a list per bucket. Every entry lives in one
//! [`SlotList`](collections::linked::SlotList), a doubly linked list whose nodes are addressed by
//! stable [`SlotPosition`](collections::linked::SlotPosition)s, and each bucket only records the
//! position of its first slot and how many slots follow it. The bucket count is fixed when the map
//! is created; nothing is ever rehashed.
//!
//! Hashing and key equality are capabilities rather than hard-wired traits: a map is parameterised
//! by a [`HashProvider`](collections::hash::HashProvider), which maps a key straight to a bucket
//! index, and a [`Comparator`](collections::traits::Comparator).
//!
//! # Time
//! [`Instant`](time::Instant) is a raw `u64` count of 100ns ticks, biased so that `2^63` is the
//! first instant of year 1. Everything below that is a negative (BCE) year, so both directions get
//! roughly 29,000 years of range. [`DateTime`](time::DateTime) pairs an instant with an optional,
//! borrowed [`TimeZone`](time::zone::TimeZone).
//!
//! # Error Handling
//! Fallible operations come in pairs. `try_*` methods return a strongly typed [`Result`], where
//! the error is either a small struct implementing [`Error`](std::error::Error) or an enum of
//! them. The plain method panics with the error's message instead, for callers that have already
//! validated their input and don't want to handle an error on every access.
//!
//! Overflowing the representable range of the calendar is not an error. Those values saturate to
//! [`Instant::MIN`](time::Instant::MIN) or [`Instant::MAX`](time::Instant::MAX) and a `warn`
//! event is emitted through [`tracing`].
//!
//! # Dependencies
//! Slot storage is a [`slotmap`] arena so that positions are generational: a position that has
//! been removed is detected rather than silently reused. Errors use `derive_more` to avoid a lot
//! of repetitive `Display` implementations.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "time")]
pub mod time;

pub(crate) mod util;
