//! Storage abstractions for service layer
//!
//! Contains the reusable lock-guarded map that concrete stores wrap.

pub mod memory_map_store;
