use async_trait::async_trait;
use models::CarRecord;
use tracing::debug;
use uuid::Uuid;

use crate::cars::repository::CarRepository;
use crate::errors::ServiceError;
use crate::storage::memory_map_store::MemoryMapStore;

/// In-memory car inventory keyed by server-minted UUID strings.
#[derive(Default)]
pub struct CarStore {
    store: MemoryMapStore<String, CarRecord>,
}

impl CarStore {
    /// Empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory holding the single example listing.
    pub fn seeded() -> Self {
        Self {
            store: MemoryMapStore::with_entries([(Uuid::new_v4().to_string(), CarRecord::seed())]),
        }
    }

    pub async fn insert(&self, car: CarRecord) -> String {
        let id = Uuid::new_v4().to_string();
        self.store.insert(id.clone(), car).await;
        debug!(car_id = %id, "car inserted");
        id
    }

    pub async fn get(&self, id: &str) -> Option<CarRecord> {
        self.store.get(&id.to_string()).await
    }

    /// Snapshot of every listing; order is unspecified.
    pub async fn list(&self) -> Vec<CarRecord> {
        self.store
            .list()
            .await
            .into_iter()
            .map(|(_, v)| v)
            .collect()
    }

    pub async fn update(&self, id: &str, car: CarRecord) -> Result<(), ServiceError> {
        self.store
            .update_map(|map| {
                let existing = map.get_mut(id).ok_or_else(|| ServiceError::not_found("car"))?;
                *existing = car;
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> bool {
        self.store.remove(&id.to_string()).await
    }

    pub async fn len(&self) -> usize {
        self.store.len().await
    }
}

#[async_trait]
impl CarRepository for CarStore {
    async fn insert(&self, car: CarRecord) -> String { self.insert(car).await }
    async fn get(&self, id: &str) -> Option<CarRecord> { self.get(id).await }
    async fn list(&self) -> Vec<CarRecord> { self.list().await }
    async fn update(&self, id: &str, car: CarRecord) -> Result<(), ServiceError> { self.update(id, car).await }
    async fn delete(&self, id: &str) -> bool { self.delete(id).await }
    async fn len(&self) -> usize { self.len().await }
}
