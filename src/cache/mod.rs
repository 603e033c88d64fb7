// Cache module for local filesystem caching.
// Persists fetched API responses between runs.

#![allow(dead_code, unused_imports)]

pub mod paths;
pub mod store;

pub use paths::*;
pub use store::{CacheEntry, DiskStore, KeyValueStore};

#[cfg(test)]
pub use store::MemoryStore;
