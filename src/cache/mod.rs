//! Caching utilities.
//!
//! A time-based cache used for buyer list pages.

pub mod timed_cache;

pub use timed_cache::TimedCache;
