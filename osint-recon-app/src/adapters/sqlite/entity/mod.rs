pub mod cache_entry;
