use super::profile::Hours;
use crate::error::CalcError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single freelance engagement, tracked independently of the profile.
///
/// Jobs live in an ordered list; insertion order is display order. Field
/// names serialize in camelCase, the on-disk format of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub name: String,
    pub hours_per_day: Hours,
    pub total_hours: Hours,
    pub is_completed: bool,
}

impl Job {
    pub fn toggle_completion(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

/// Unvalidated job input as it arrives from the creation form or a CSV row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub name: String,
    pub hours_per_day: Decimal,
    pub total_hours: Decimal,
}

impl JobDraft {
    /// Validates the draft into a job.
    ///
    /// Rejects empty names and non-positive hour fields. New jobs always
    /// start not completed.
    pub fn into_job(self) -> Result<Job, CalcError> {
        if self.name.is_empty() {
            return Err(CalcError::ValidationError(
                "Job name cannot be empty".to_string(),
            ));
        }
        Ok(Job {
            name: self.name,
            hours_per_day: Hours::new(self.hours_per_day)?,
            total_hours: Hours::new(self.total_hours)?,
            is_completed: false,
        })
    }
}
