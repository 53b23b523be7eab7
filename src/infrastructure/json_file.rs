use super::{KEY_JOBS, KEY_PROFILE};
use crate::domain::job::Job;
use crate::domain::ports::SnapshotStore;
use crate::domain::profile::Profile;
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// The default durable snapshot store: one JSON document per storage key.
///
/// Each key is stored as `<key>.json` inside the data directory, e.g.
/// `profile` -> `profile.json`. A missing file reads as `None`.
#[derive(Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
        })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    async fn read_key(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_key(&self, key: &str, raw: String) -> Result<()> {
        // Write-then-rename keeps the previous snapshot intact if the
        // write fails partway.
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, raw).await?;
        fs::rename(&tmp, self.key_path(key)).await?;
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load_profile(&self) -> Result<Option<Profile>> {
        match self.read_key(KEY_PROFILE).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save_profile(&self, profile: &Profile) -> Result<()> {
        let raw = serde_json::to_string(profile)?;
        self.write_key(KEY_PROFILE, raw).await
    }

    async fn load_jobs(&self) -> Result<Option<Vec<Job>>> {
        match self.read_key(KEY_JOBS).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save_jobs(&self, jobs: &[Job]) -> Result<()> {
        let raw = serde_json::to_string(jobs)?;
        self.write_key(KEY_JOBS, raw).await
    }
}
