//! # hotcache
//!
//! Fixed-capacity in-memory LRU cache.
//!
//! ## Architecture
//! - **Index**: AHash-backed map from key to entry slot (O(1) lookup)
//! - **Recency list**: slab-backed doubly linked list from most- to
//!   least-recently-used entry (O(1) reordering and eviction)
//! - **Instrumentation**: [`HotCache`] wraps the core with hit/miss
//!   statistics
//!
//! Every `get` or `put` of a present key moves it to the front of the
//! recency list; inserting past capacity evicts the entry at the back.
//! Zero capacity is legal and stores nothing. Single-threaded by design:
//! all mutation goes through `&mut self`.

#![warn(missing_docs)]

mod cache;
mod lru;
mod stats;

pub use cache::HotCache;
pub use lru::{LruCache, PutStatus};
pub use stats::CacheStats;
