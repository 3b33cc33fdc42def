use std::{collections::HashMap, hash::Hash};
use tokio::sync::Mutex;

use crate::errors::ServiceError;

/// Generic in-memory key-value map guarded by a single exclusive lock.
///
/// Every operation, reads included, holds the lock for its full duration, so
/// callers never observe a partially applied mutation.
pub struct MemoryMapStore<K, V> {
    inner: Mutex<HashMap<K, V>>,
}

impl<K, V> Default for MemoryMapStore<K, V> {
    fn default() -> Self {
        Self { inner: Mutex::new(HashMap::new()) }
    }
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given entries.
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self { inner: Mutex::new(entries.into_iter().collect()) }
    }

    /// Snapshot of all entries as `(key, value)` pairs. Order is unspecified.
    pub async fn list(&self) -> Vec<(K, V)> {
        let map = self.inner.lock().await;
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.lock().await;
        map.get(key).cloned()
    }

    /// Insert or overwrite a value by key.
    pub async fn insert(&self, key: K, value: V) {
        let mut map = self.inner.lock().await;
        map.insert(key, value);
    }

    /// Remove a key; returns whether it existed.
    pub async fn remove(&self, key: &K) -> bool {
        let mut map = self.inner.lock().await;
        map.remove(key).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Apply a mutation to the underlying map while holding the lock.
    pub async fn update_map<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut HashMap<K, V>) -> Result<T, ServiceError>,
    {
        let mut map = self.inner.lock().await;
        f(&mut map)
    }
}
