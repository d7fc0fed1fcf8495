// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A style pairs bucketing thresholds with phrase tables.
//!
//! Built-in styles live in [`crate::locale`]. Custom styles can be loaded
//! from TOML or JSON; every field is spelled out and unknown keys are
//! rejected.

use crate::band::Bucket;
use crate::bucket::bucket;
use crate::error::{FormatError, StyleError};
use crate::phrase::Phrases;
use crate::threshold::Thresholds;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Style {
    pub name: Cow<'static, str>,
    pub thresholds: Thresholds,
    pub phrases: Phrases,
}

/// Format `delta` seconds with `style`.
pub fn format(delta: f64, style: &Style) -> Result<String, FormatError> {
    style.format(delta)
}

impl Style {
    pub fn bucket(&self, delta: f64) -> Result<Bucket, FormatError> {
        bucket(delta, &self.thresholds)
    }

    /// Phrase for `delta` elapsed seconds.
    ///
    /// Negative and non-finite deltas are errors in every style.
    pub fn format(&self, delta: f64) -> Result<String, FormatError> {
        let bucket = self.bucket(delta)?;
        Ok(self.phrases.render(&bucket))
    }

    /// Phrase for an elapsed [`Duration`], which is never negative.
    pub fn format_duration(&self, elapsed: Duration) -> String {
        let secs = elapsed.as_secs_f64();
        match self.format(secs) {
            Ok(phrase) => phrase,
            // as_secs_f64 is always finite and non-negative
            Err(_) => self.phrases.now.to_string(),
        }
    }

    /// Phrase for elapsed milliseconds.
    ///
    /// Convenience wrapper around [`Style::format_duration`].
    pub fn format_millis(&self, ms: u64) -> String {
        self.format_duration(Duration::from_millis(ms))
    }

    /// Phrase for the time between `then` and `now`.
    ///
    /// `then` later than `now` is [`FormatError::InFuture`]; future tense is
    /// not supported.
    pub fn format_since(&self, then: SystemTime, now: SystemTime) -> Result<String, FormatError> {
        let elapsed = now
            .duration_since(then)
            .map_err(|e| FormatError::InFuture(e.duration()))?;
        Ok(self.format_duration(elapsed))
    }

    /// Parse a style from TOML and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, StyleError> {
        let style: Style = toml::from_str(content)?;
        style.checked()
    }

    /// Parse a style from JSON and validate it.
    pub fn from_json_str(content: &str) -> Result<Self, StyleError> {
        let style: Style = serde_json::from_str(content)?;
        style.checked()
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Check that thresholds keep every band within bounds and that no
    /// phrase can render empty.
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.name.trim().is_empty() {
            return Err(StyleError::invalid("name", "must not be empty"));
        }
        self.thresholds.validate()?;
        if self.phrases.now.is_empty() {
            return Err(StyleError::invalid("phrases.now", "must not be empty"));
        }
        for band in crate::band::Band::ALL {
            let Some(unit) = self.phrases.units.get(band) else {
                continue;
            };
            let words = [
                ("one", Some(&unit.one)),
                ("singular", Some(&unit.singular)),
                ("plural", Some(&unit.plural)),
                ("exact_one", unit.exact_one.as_ref()),
            ];
            for (field, word) in words {
                if word.is_some_and(|w| w.trim().is_empty()) {
                    return Err(StyleError::invalid(
                        format!("phrases.units.{}.{}", band, field),
                        "must not be empty",
                    ));
                }
            }
        }
        Ok(())
    }

    fn checked(self) -> Result<Self, StyleError> {
        match self.validate() {
            Ok(()) => {
                tracing::debug!(style = %self.name, "loaded style");
                Ok(self)
            }
            Err(e) => {
                tracing::warn!(style = %self.name, error = %e, "rejecting invalid style");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
