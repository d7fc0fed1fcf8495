// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Boundary constants that drive bucketing.
//!
//! Every value here changes observable output, so built-in styles pin them
//! as `const` records and loaded styles are validated before use.

use crate::error::StyleError;
use serde::{Deserialize, Serialize};

/// How the minute band turns fractional minutes into a count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinutePolicy {
    /// Round up. Below the singular cutoff the count is one; a ceiling of
    /// 60 carries into the hour band.
    #[default]
    Ceiling,
    /// Round down and clamp zero up to one. 59 minutes and above roll into
    /// the hour band.
    FloorClamp,
}

/// First floored minute count that leaves the minute band under
/// [`MinutePolicy::FloorClamp`].
pub const FLOOR_ROLLOVER_MINUTES: f64 = 59.0;

/// Inclusive remainder range in which a half marker is shown.
///
/// Remainders above `high` round the count up by one; remainders below
/// `low` are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HalfWindow {
    pub low: f64,
    pub high: f64,
}

/// Whole units and half flag from splitting a quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    pub count: f64,
    pub half: bool,
}

impl HalfWindow {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Floor-divide `total` by `per_unit` and classify the remainder.
    pub fn split(&self, total: f64, per_unit: f64) -> Split {
        let rem = total.rem_euclid(per_unit);
        let mut count = ((total - rem) / per_unit).round();
        let half = self.low <= rem && rem <= self.high;
        if !half && rem > self.high {
            count += 1.0;
        }
        Split { count, half }
    }
}

/// Below these values the band shows its singular phrase instead of
/// splitting. Each is expressed in the unit of the quantity being split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SingularCutoffs {
    /// Minutes, under [`MinutePolicy::Ceiling`].
    pub minute: f64,
    /// Minutes.
    pub hour: f64,
    /// Hours.
    pub day: f64,
    /// Days.
    pub week: f64,
    /// Days.
    pub month: f64,
    /// Months.
    pub year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Thresholds {
    /// Deltas strictly below this many seconds read as "just now".
    pub just_now_below: f64,
    #[serde(default)]
    pub minute_policy: MinutePolicy,
    /// Average month length in days.
    pub month_days: f64,
    pub singular: SingularCutoffs,
    pub hour_window: HalfWindow,
    pub day_window: HalfWindow,
    pub week_window: HalfWindow,
    pub month_window: HalfWindow,
    pub year_window: HalfWindow,
}

impl Thresholds {
    /// Constants shared by the English styles.
    pub const ENGLISH: Thresholds = Thresholds {
        just_now_below: 0.5,
        minute_policy: MinutePolicy::Ceiling,
        month_days: 30.0,
        singular: SingularCutoffs {
            minute: 1.5,
            hour: 75.0,
            day: 30.0,
            week: 9.0,
            month: 40.0,
            year: 16.0,
        },
        hour_window: HalfWindow::new(15.0, 45.0),
        day_window: HalfWindow::new(6.0, 18.0),
        week_window: HalfWindow::new(2.0, 4.0),
        month_window: HalfWindow::new(10.0, 20.0),
        year_window: HalfWindow::new(4.0, 8.0),
    };

    /// French reads anything under half a minute as "à l'instant".
    pub const FRENCH: Thresholds = Thresholds {
        just_now_below: 30.0,
        ..Thresholds::ENGLISH
    };

    /// Reject records that would let a band emit a count at or above its
    /// upper bound, or feed NaN into the arithmetic.
    pub fn validate(&self) -> Result<(), StyleError> {
        non_negative("just_now_below", self.just_now_below)?;
        if !(self.month_days.is_finite() && self.month_days > 0.0) {
            return Err(StyleError::invalid(
                "month_days",
                format!("must be a positive number, got {}", self.month_days),
            ));
        }

        let cutoffs = [
            ("singular.minute", self.singular.minute),
            ("singular.hour", self.singular.hour),
            ("singular.day", self.singular.day),
            ("singular.week", self.singular.week),
            ("singular.month", self.singular.month),
            ("singular.year", self.singular.year),
        ];
        for (field, value) in cutoffs {
            non_negative(field, value)?;
        }
        // Lower cutoffs would let a split of the carried quantity yield zero
        let floors = [
            ("singular.minute", self.singular.minute, f64::MIN_POSITIVE),
            ("singular.hour", self.singular.hour, 60.0),
            ("singular.month", self.singular.month, self.month_days),
        ];
        for (field, value, floor) in floors {
            if value < floor {
                return Err(StyleError::invalid(
                    field,
                    format!("must be at least {}, got {}", floor, value),
                ));
            }
        }
        if self.singular.minute >= 60.0 {
            return Err(StyleError::invalid(
                "singular.minute",
                format!("must be below 60, got {}", self.singular.minute),
            ));
        }

        let windows = [
            ("hour_window", self.hour_window, 60.0),
            ("day_window", self.day_window, 24.0),
            ("week_window", self.week_window, 7.0),
            ("month_window", self.month_window, self.month_days),
            ("year_window", self.year_window, 12.0),
        ];
        for (field, window, per_unit) in windows {
            non_negative(field, window.low)?;
            non_negative(field, window.high)?;
            if window.low > window.high {
                return Err(StyleError::invalid(
                    field,
                    format!("low {} exceeds high {}", window.low, window.high),
                ));
            }
            if window.high >= per_unit {
                return Err(StyleError::invalid(
                    field,
                    format!("high {} must be below the unit size {}", window.high, per_unit),
                ));
            }
        }
        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), StyleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StyleError::invalid(
            field,
            format!("must be a non-negative number, got {}", value),
        ))
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
