use super::{KEY_JOBS, KEY_PROFILE};
use crate::domain::job::Job;
use crate::domain::ports::SnapshotStore;
use crate::domain::profile::Profile;
use crate::error::Result;
use async_trait::async_trait;
use rocksdb::{DB, Options};
use std::path::Path;
use std::sync::Arc;

/// A snapshot store backed by RocksDB.
///
/// Stores each snapshot under its fixed string key with a JSON-encoded
/// value, mirroring the layout of the JSON file backend.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbStore {
    db: Arc<DB>,
}

impl RocksDbStore {
    /// Opens or creates a RocksDB instance at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        let db = DB::open(&opts, path)?;
        Ok(Self { db: Arc::new(db) })
    }

    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.db.get(key.as_bytes())?)
    }

    fn put_raw(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.db.put(key.as_bytes(), value)?;
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for RocksDbStore {
    async fn load_profile(&self) -> Result<Option<Profile>> {
        match self.get_raw(KEY_PROFILE)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn save_profile(&self, profile: &Profile) -> Result<()> {
        self.put_raw(KEY_PROFILE, serde_json::to_vec(profile)?)
    }

    async fn load_jobs(&self) -> Result<Option<Vec<Job>>> {
        match self.get_raw(KEY_JOBS)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn save_jobs(&self, jobs: &[Job]) -> Result<()> {
        self.put_raw(KEY_JOBS, serde_json::to_vec(jobs)?)
    }
}
