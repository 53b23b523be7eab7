use crate::domain::job::Job;
use crate::domain::rate::JobMetrics;
use crate::error::Result;
use std::io::Write;

/// Writes the job list with its derived metrics as CSV.
///
/// Derived columns use the same rendering as the list view: one decimal for
/// days, two for money, `undefined` for degenerate inputs.
pub struct JobWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> JobWriter<W> {
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(target),
        }
    }

    pub fn write_jobs(mut self, rows: Vec<(Job, JobMetrics)>) -> Result<()> {
        self.writer.write_record([
            "name",
            "hoursPerDay",
            "totalHours",
            "completed",
            "daysToComplete",
            "value",
        ])?;
        for (job, metrics) in rows {
            self.writer.write_record([
                job.name.clone(),
                job.hours_per_day.value().to_string(),
                job.total_hours.value().to_string(),
                job.is_completed.to_string(),
                metrics.days_label(),
                metrics.value_label(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
