//! Service layer holding the in-memory car inventory.
//! - `storage` provides the lock-guarded map every store is built on.
//! - `cars` exposes the record store and the repository trait handlers depend on.

pub mod errors;
pub mod storage;
pub mod cars;
