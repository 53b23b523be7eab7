use super::job::Job;
use super::profile::Profile;
use crate::error::Result;
use async_trait::async_trait;

/// Durable persistence boundary for the calculator snapshot.
///
/// Backends store two fixed string keys with JSON-encoded values; see
/// `infrastructure::{KEY_PROFILE, KEY_JOBS}`. Writes always replace the full
/// snapshot for a key.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load_profile(&self) -> Result<Option<Profile>>;
    async fn save_profile(&self, profile: &Profile) -> Result<()>;
    async fn load_jobs(&self) -> Result<Option<Vec<Job>>>;
    async fn save_jobs(&self, jobs: &[Job]) -> Result<()>;
}

pub type SnapshotStoreBox = Box<dyn SnapshotStore>;
