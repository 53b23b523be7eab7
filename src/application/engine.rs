use crate::domain::job::{Job, JobDraft};
use crate::domain::ports::SnapshotStoreBox;
use crate::domain::profile::{Money, Profile};
use crate::domain::rate::{self, JobMetrics};
use crate::error::Result;
use tokio::sync::RwLock;

/// The state store: owns the profile and job list and keeps them mirrored
/// to the snapshot store.
///
/// An engine can only be obtained through [`CalculatorEngine::initialize`],
/// which applies the persisted snapshot first. No write-back path exists
/// before that initial load has completed.
pub struct CalculatorEngine {
    profile: RwLock<Profile>,
    jobs: RwLock<Vec<Job>>,
    store: SnapshotStoreBox,
}

impl CalculatorEngine {
    /// Loads the persisted snapshot and returns a ready engine.
    ///
    /// A missing value falls back to the default; a value that fails to
    /// parse is logged and discarded, keeping the default instead. Startup
    /// never fails on bad stored data.
    pub async fn initialize(store: SnapshotStoreBox) -> Self {
        let profile = match store.load_profile().await {
            Ok(Some(profile)) => profile,
            Ok(None) => Profile::default(),
            Err(e) => {
                log::warn!("discarding stored profile, using defaults: {e}");
                Profile::default()
            }
        };
        let jobs = match store.load_jobs().await {
            Ok(Some(jobs)) => jobs,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("discarding stored jobs, starting empty: {e}");
                Vec::new()
            }
        };
        Self {
            profile: RwLock::new(profile),
            jobs: RwLock::new(jobs),
            store,
        }
    }

    pub async fn profile(&self) -> Profile {
        self.profile.read().await.clone()
    }

    pub async fn jobs(&self) -> Vec<Job> {
        self.jobs.read().await.clone()
    }

    /// The implied hourly rate, recomputed from the profile on every call.
    pub async fn hourly_rate(&self) -> Option<Money> {
        rate::hourly_rate(&*self.profile.read().await)
    }

    /// Jobs paired with their derived metrics under the current rate.
    pub async fn job_overview(&self) -> Vec<(Job, JobMetrics)> {
        let hourly_rate = self.hourly_rate().await;
        self.jobs
            .read()
            .await
            .iter()
            .map(|job| (job.clone(), rate::job_metrics(job, hourly_rate)))
            .collect()
    }

    /// Replaces the profile wholesale and writes the snapshot back.
    pub async fn set_profile(&self, next: Profile) -> Result<()> {
        {
            let mut profile = self.profile.write().await;
            *profile = next.clone();
        }
        self.store.save_profile(&next).await
    }

    /// Restores the default profile; equivalent to a wholesale overwrite.
    pub async fn reset_profile(&self) -> Result<()> {
        self.set_profile(Profile::default()).await
    }

    /// Appends a job when the draft passes validation.
    ///
    /// Invalid drafts (empty name, non-positive hours) are dropped without
    /// touching the list or the store; nothing is surfaced to the caller.
    pub async fn add_job(&self, draft: JobDraft) -> Result<()> {
        let job = match draft.into_job() {
            Ok(job) => job,
            Err(e) => {
                log::debug!("rejected job draft: {e}");
                return Ok(());
            }
        };
        let snapshot = {
            let mut jobs = self.jobs.write().await;
            jobs.push(job);
            jobs.clone()
        };
        self.store.save_jobs(&snapshot).await
    }

    /// Removes the job at `index`; out-of-range indices are a no-op.
    pub async fn delete_job(&self, index: usize) -> Result<()> {
        let snapshot = {
            let mut jobs = self.jobs.write().await;
            if index >= jobs.len() {
                return Ok(());
            }
            jobs.remove(index);
            jobs.clone()
        };
        self.store.save_jobs(&snapshot).await
    }

    /// Flips completion for the job at `index`; out-of-range is a no-op.
    pub async fn toggle_job_completion(&self, index: usize) -> Result<()> {
        let snapshot = {
            let mut jobs = self.jobs.write().await;
            match jobs.get_mut(index) {
                Some(job) => job.toggle_completion(),
                None => return Ok(()),
            }
            jobs.clone()
        };
        self.store.save_jobs(&snapshot).await
    }
}
