//! Model time
//!
//! The model steps through a fixed number of periods, each `interval` years
//! apart starting at `start_year`. Every per-period series held by the
//! accounting entities is sized to [`Modeltime::periods`] and indexed by period.

use crate::errors::{GhgError, GhgResult};
use serde::{Deserialize, Serialize};

/// Floating point type used for all quantities, prices and coefficients.
pub type FloatValue = f64;

/// Zero-based index of a model period.
pub type Period = usize;

/// Mapping between model periods and calendar years.
///
/// Deserialisation goes through [`Modeltime::validate`], so a loaded scheme
/// always has at least one period and a positive interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ModeltimeParameters")]
pub struct Modeltime {
    /// Calendar year of period 0.
    pub start_year: i32,
    /// Years between consecutive periods.
    pub interval: i32,
    /// Total number of periods.
    pub periods: usize,
}

impl Default for Modeltime {
    fn default() -> Self {
        Self {
            start_year: 1975,
            interval: 15,
            periods: 9,
        }
    }
}

/// Unvalidated model time as written in configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ModeltimeParameters {
    start_year: i32,
    interval: i32,
    periods: usize,
}

impl Default for ModeltimeParameters {
    fn default() -> Self {
        let Modeltime {
            start_year,
            interval,
            periods,
        } = Modeltime::default();
        Self {
            start_year,
            interval,
            periods,
        }
    }
}

impl TryFrom<ModeltimeParameters> for Modeltime {
    type Error = GhgError;

    fn try_from(parameters: ModeltimeParameters) -> GhgResult<Self> {
        Modeltime::new(
            parameters.start_year,
            parameters.interval,
            parameters.periods,
        )
    }
}

impl Modeltime {
    pub fn new(start_year: i32, interval: i32, periods: usize) -> GhgResult<Self> {
        let modeltime = Self {
            start_year,
            interval,
            periods,
        };
        modeltime.validate()?;
        Ok(modeltime)
    }

    /// Checks that the period scheme is usable for sizing series.
    pub fn validate(&self) -> GhgResult<()> {
        if self.periods == 0 {
            return Err(GhgError::InvalidParameter {
                entity: "modeltime".to_string(),
                name: self.start_year.to_string(),
                parameter: "periods".to_string(),
                reason: "at least one period is required".to_string(),
            });
        }
        if self.interval <= 0 {
            return Err(GhgError::InvalidParameter {
                entity: "modeltime".to_string(),
                name: self.start_year.to_string(),
                parameter: "interval".to_string(),
                reason: format!("expected a positive interval, got {}", self.interval),
            });
        }
        Ok(())
    }

    /// Number of periods in the model.
    pub fn max_period(&self) -> usize {
        self.periods
    }

    /// Calendar year of a period.
    pub fn period_to_year(&self, period: Period) -> i32 {
        self.start_year + self.interval * period as i32
    }

    /// Period starting in `year`, if the year falls exactly on a period boundary.
    pub fn year_to_period(&self, year: i32) -> Option<Period> {
        let offset = year - self.start_year;
        if offset < 0 || offset % self.interval != 0 {
            return None;
        }
        let period = (offset / self.interval) as usize;
        (period < self.periods).then_some(period)
    }

    pub fn iter_periods(&self) -> impl Iterator<Item = Period> {
        0..self.periods
    }

    /// Calendar year of the last period.
    pub fn final_year(&self) -> i32 {
        self.period_to_year(self.periods - 1)
    }
}
