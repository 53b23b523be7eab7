//! The rate engine: pure derivations over profile and jobs.
//!
//! Nothing here is ever persisted; callers recompute on every read so stored
//! state and presentation cannot diverge.

use super::job::Job;
use super::profile::{Money, Profile};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const WEEKS_PER_YEAR: Decimal = dec!(52);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Derived workload figures for a single job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobMetrics {
    /// `total_hours / hours_per_day`; `None` when the divisor is zero.
    pub days_to_complete: Option<Decimal>,
    /// `total_hours * hourly_rate`; `None` when the rate is undefined.
    pub value: Option<Money>,
}

impl JobMetrics {
    /// Days rendered with one decimal place, or `undefined`.
    pub fn days_label(&self) -> String {
        match self.days_to_complete {
            Some(days) => format!("{days:.1}"),
            None => "undefined".to_string(),
        }
    }

    /// Money value rendered with two decimal places, or `undefined`.
    pub fn value_label(&self) -> String {
        match self.value {
            Some(value) => value.to_string(),
            None => "undefined".to_string(),
        }
    }
}

/// Derives the implied hourly rate from an income/availability profile.
///
/// `yearly_income / (hours_per_day * days_per_week * (52 - vacation_weeks))`.
/// Returns `None` when the profile leaves zero working hours per year, e.g.
/// 52 vacation weeks or zero days per week; the rate is undefined then.
pub fn hourly_rate(profile: &Profile) -> Option<Money> {
    let weeks_per_year = WEEKS_PER_YEAR - profile.vacation_weeks;
    let hours_per_year = profile.hours_per_day.value() * profile.days_per_week * weeks_per_year;
    let yearly_income = profile.monthly_income.value() * MONTHS_PER_YEAR;
    yearly_income.checked_div(hours_per_year).map(Money::new)
}

/// Derives the schedule and price figures for one job under a given rate.
///
/// A zero `hours_per_day` is unreachable through the creation gate but can
/// arrive via directly-edited stored data; it yields an undefined duration
/// rather than an error.
pub fn job_metrics(job: &Job, hourly_rate: Option<Money>) -> JobMetrics {
    let days_to_complete = job
        .total_hours
        .value()
        .checked_div(job.hours_per_day.value());
    let value = hourly_rate.map(|rate| Money::new(job.total_hours.value() * rate.value()));
    JobMetrics {
        days_to_complete,
        value,
    }
}
