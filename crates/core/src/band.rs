// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Magnitude bands and the bucket a delta falls into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered magnitude category of an elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    JustNow,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Band {
    /// Every band, smallest first.
    pub const ALL: [Band; 7] = [
        Band::JustNow,
        Band::Minute,
        Band::Hour,
        Band::Day,
        Band::Week,
        Band::Month,
        Band::Year,
    ];

    /// Exclusive upper bound on the count this band may display.
    ///
    /// `None` for the just-now band (no count) and the terminal year band.
    pub fn upper_bound(self) -> Option<u64> {
        match self {
            Band::Minute => Some(60),
            Band::Hour => Some(24),
            Band::Day => Some(7),
            Band::Week => Some(4),
            Band::Month => Some(12),
            Band::JustNow | Band::Year => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Band::JustNow => "just_now",
            Band::Minute => "minute",
            Band::Hour => "hour",
            Band::Day => "day",
            Band::Week => "week",
            Band::Month => "month",
            Band::Year => "year",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wording-independent result of bucketing a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bucket {
    pub band: Band,
    /// Whole units shown. Always zero for [`Band::JustNow`].
    pub count: u64,
    /// Whether a "half" marker follows the count.
    pub half: bool,
}

impl Bucket {
    pub const JUST_NOW: Bucket = Bucket {
        band: Band::JustNow,
        count: 0,
        half: false,
    };

    pub fn new(band: Band, count: u64, half: bool) -> Self {
        Self { band, count, half }
    }

    /// A count of exactly one, no half.
    pub fn one(band: Band) -> Self {
        Self::new(band, 1, false)
    }

    /// True for a plain count of one, the case that takes singular or
    /// irregular wording.
    pub fn is_exactly_one(&self) -> bool {
        self.count == 1 && !self.half
    }
}

/// Compact form for logs and assertion messages: `12½×hour`, `just_now`.
/// Not a user-facing phrase; see [`crate::Phrases::render`].
impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.band == Band::JustNow {
            return f.write_str(self.band.as_str());
        }
        let half = if self.half { "½" } else { "" };
        write!(f, "{}{}×{}", self.count, half, self.band)
    }
}

#[cfg(test)]
#[path = "band_tests.rs"]
mod tests;
