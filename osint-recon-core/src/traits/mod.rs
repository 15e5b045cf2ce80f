mod cache_store;

pub use cache_store::{CacheGate, CacheStore};
