use super::{KEY_JOBS, KEY_PROFILE};
use crate::domain::job::Job;
use crate::domain::ports::SnapshotStore;
use crate::domain::profile::Profile;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory snapshot store.
///
/// Keeps the same string-keyed, JSON-valued contract as the durable
/// backends, so serialization is exercised even without touching disk.
/// `Clone` shares the underlying map, which lets tests inspect the store
/// after handing a boxed copy to the engine.
#[derive(Default, Clone)]
pub struct InMemorySnapshotStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySnapshotStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value under a storage key, bypassing serialization.
    pub async fn seed_raw(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    async fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn put_raw(&self, key: &str, value: String) {
        self.entries.write().await.insert(key.to_string(), value);
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load_profile(&self) -> Result<Option<Profile>> {
        match self.get_raw(KEY_PROFILE).await {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save_profile(&self, profile: &Profile) -> Result<()> {
        let raw = serde_json::to_string(profile)?;
        self.put_raw(KEY_PROFILE, raw).await;
        Ok(())
    }

    async fn load_jobs(&self) -> Result<Option<Vec<Job>>> {
        match self.get_raw(KEY_JOBS).await {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save_jobs(&self, jobs: &[Job]) -> Result<()> {
        let raw = serde_json::to_string(jobs)?;
        self.put_raw(KEY_JOBS, raw).await;
        Ok(())
    }
}
