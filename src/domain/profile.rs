use crate::error::CalcError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a monetary value in the user's local currency.
///
/// This is a wrapper around `rust_decimal::Decimal` to provide type safety
/// for money calculations. Displayed with two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Represents a positive quantity of working hours.
///
/// Ensures that hour fields are always positive at the creation boundary.
/// Deserialization bypasses the check: values loaded from storage are taken
/// as-is, and degenerate ones surface as undefined derived values downstream.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Hours(Decimal);

impl Hours {
    pub fn new(value: Decimal) -> Result<Self, CalcError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CalcError::ValidationError(
                "Hours must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Hours {
    type Error = CalcError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hours> for Decimal {
    fn from(hours: Hours) -> Self {
        hours.0
    }
}

/// The user's income and work-availability parameters.
///
/// Singleton state: one profile per user, overwritten wholesale on every edit.
/// Field names serialize in camelCase, the on-disk format of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Desired monthly income.
    pub monthly_income: Money,
    /// Working hours per day.
    pub hours_per_day: Hours,
    /// Working days per week, in `[0, 7]`.
    pub days_per_week: Decimal,
    /// Vacation weeks per year, in `[0, 52]`.
    pub vacation_weeks: Decimal,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            monthly_income: Money::new(dec!(5000)),
            hours_per_day: Hours(dec!(8)),
            days_per_week: dec!(5),
            vacation_weeks: dec!(4),
        }
    }
}

impl Profile {
    /// Builds a profile, rejecting out-of-range fields.
    ///
    /// A profile with `vacation_weeks = 52` is representable; it leaves zero
    /// working weeks and the derived hourly rate is undefined.
    pub fn new(
        monthly_income: Decimal,
        hours_per_day: Decimal,
        days_per_week: Decimal,
        vacation_weeks: Decimal,
    ) -> Result<Self, CalcError> {
        if monthly_income < Decimal::ZERO {
            return Err(CalcError::ValidationError(
                "Monthly income cannot be negative".to_string(),
            ));
        }
        if !(Decimal::ZERO..=dec!(7)).contains(&days_per_week) {
            return Err(CalcError::ValidationError(
                "Days per week must be between 0 and 7".to_string(),
            ));
        }
        if !(Decimal::ZERO..=dec!(52)).contains(&vacation_weeks) {
            return Err(CalcError::ValidationError(
                "Vacation weeks must be between 0 and 52".to_string(),
            ));
        }
        Ok(Self {
            monthly_income: Money::new(monthly_income),
            hours_per_day: Hours::new(hours_per_day)?,
            days_per_week,
            vacation_weeks,
        })
    }
}
