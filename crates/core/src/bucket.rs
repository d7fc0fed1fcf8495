// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classify an elapsed delta into a [`Bucket`].
//!
//! Bands are tried smallest first. Each band either answers or hands its
//! rounded count to the next one, so a round-up that reaches a band's upper
//! bound (60 minutes, 24 hours, 4 weeks, ...) falls through naturally.

use crate::band::{Band, Bucket};
use crate::error::FormatError;
use crate::threshold::{MinutePolicy, Split, Thresholds, FLOOR_ROLLOVER_MINUTES};

/// Bucket `delta` seconds under `t`.
///
/// Negative and non-finite deltas are rejected rather than clamped.
pub fn bucket(delta: f64, t: &Thresholds) -> Result<Bucket, FormatError> {
    if delta.is_nan() || delta.is_infinite() {
        return Err(FormatError::NotFinite(delta));
    }
    if delta < 0.0 {
        return Err(FormatError::Negative(delta));
    }
    let bucket = classify(delta, t);
    tracing::trace!(delta, %bucket, "bucketed delta");
    Ok(bucket)
}

fn classify(delta: f64, t: &Thresholds) -> Bucket {
    if delta < t.just_now_below {
        return Bucket::JUST_NOW;
    }

    // < 1 hour
    let raw = delta / 60.0;
    let minutes = match t.minute_policy {
        MinutePolicy::Ceiling => {
            if raw < t.singular.minute {
                return Bucket::one(Band::Minute);
            }
            let count = raw.ceil();
            if count < 60.0 {
                return counted(Band::Minute, count, false);
            }
            raw
        }
        MinutePolicy::FloorClamp => {
            let count = raw.floor().max(1.0);
            if count < FLOOR_ROLLOVER_MINUTES {
                return counted(Band::Minute, count, false);
            }
            count
        }
    };

    // < 1 day
    if minutes < t.singular.hour {
        return Bucket::one(Band::Hour);
    }
    let hours = t.hour_window.split(minutes, 60.0);
    if hours.count < 24.0 {
        return from_split(Band::Hour, hours);
    }

    // < 1 week
    if hours.count < t.singular.day {
        return Bucket::one(Band::Day);
    }
    let days = t.day_window.split(hours.count, 24.0);
    if days.count < 7.0 {
        return from_split(Band::Day, days);
    }

    // < 4 weeks
    if days.count < t.singular.week {
        return Bucket::one(Band::Week);
    }
    let weeks = t.week_window.split(days.count, 7.0);
    if weeks.count < 4.0 {
        return from_split(Band::Week, weeks);
    }

    // < 1 year
    if days.count < t.singular.month {
        return Bucket::one(Band::Month);
    }
    let months = t.month_window.split(days.count, t.month_days);
    if months.count < 12.0 {
        return from_split(Band::Month, months);
    }

    // Years are terminal
    if months.count < t.singular.year {
        return Bucket::one(Band::Year);
    }
    let years = t.year_window.split(months.count, 12.0);
    from_split(Band::Year, years)
}

fn from_split(band: Band, split: Split) -> Bucket {
    counted(band, split.count, split.half)
}

fn counted(band: Band, count: f64, half: bool) -> Bucket {
    // Saturated counts drop the half; the remainder of a huge f64 is noise
    if count >= u64::MAX as f64 {
        return Bucket::new(band, u64::MAX, false);
    }
    Bucket::new(band, count as u64, half)
}

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;
