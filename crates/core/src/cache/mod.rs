//! In-memory cache of extracted job descriptions.
//!
//! Entries are keyed by the exact request URL and carry the instant they were
//! fetched. Freshness is checked on every read, and a [`CacheSweeper`] removes
//! entries older than the TTL on a fixed interval so one-off URLs do not
//! accumulate.
//!
//! There is no de-duplication of in-flight fetches: two concurrent misses for
//! the same URL both fetch and the later write wins.

pub mod store;
pub mod sweeper;

pub use store::{CacheEntry, DescriptionCache};
pub use sweeper::CacheSweeper;
