//! # hotset
//!
//! Fixed-capacity in-memory LRU cache.
//!
//! ## Architecture
//! - **Index**: AHash map from key to arena slot (O(1) lookup)
//! - **Recency list**: arena-backed doubly-linked list for promotion and
//!   eviction (O(1) splice)
//! - **Statistics**: hit/miss/eviction counters
//!
//! ## Goals
//! - LRU eviction under a fixed capacity
//! - O(1) amortized get/put
//! - Inspectable recency order for diagnostics

#![warn(missing_docs)]

mod error;
mod lru;
mod stats;

pub use error::{Error, Result};
pub use lru::{Iter, LruCache};
pub use stats::CacheStats;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
