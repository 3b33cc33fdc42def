use async_trait::async_trait;
use models::CarRecord;

use crate::errors::ServiceError;

/// Trait abstraction for car inventory storage.
/// Request handlers only see this seam; the in-memory `CarStore` is the default backing.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Store a record under a freshly minted identifier and return it.
    async fn insert(&self, car: CarRecord) -> String;
    async fn get(&self, id: &str) -> Option<CarRecord>;
    async fn list(&self) -> Vec<CarRecord>;
    /// Replace the record at `id` wholesale. Never creates a missing entry.
    async fn update(&self, id: &str, car: CarRecord) -> Result<(), ServiceError>;
    /// Remove the record at `id`; returns whether it existed. Absent ids are not an error.
    async fn delete(&self, id: &str) -> bool;
    async fn len(&self) -> usize;
}
