//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for asserting the phrases a locale produces.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use ago_core::test_support::{days, hours, minutes, months, weeks, years};
pub use ago_core::{FormatError, Locale, Style};

/// Start a chain of phrase assertions for `locale`.
pub fn locale(locale: Locale) -> LocaleAssert<'static> {
    LocaleAssert {
        style: locale.style(),
    }
}

/// Start a chain of phrase assertions for a loaded style.
pub fn style(style: &Style) -> LocaleAssert<'_> {
    LocaleAssert { style }
}

pub struct LocaleAssert<'a> {
    style: &'a Style,
}

impl LocaleAssert<'_> {
    /// Assert `delta` seconds renders exactly as `expected` (with diff on failure).
    pub fn says(&self, delta: f64, expected: &str) -> &Self {
        let actual = self
            .style
            .format(delta)
            .unwrap_or_else(|e| panic!("{} failed on {}s: {}", self.style.name, delta, e));
        similar_asserts::assert_eq!(actual, expected, "{} at {}s", self.style.name, delta);
        self
    }

    /// Assert `delta` seconds is rejected, returning the error.
    pub fn rejects(&self, delta: f64) -> FormatError {
        match self.style.format(delta) {
            Ok(phrase) => panic!(
                "{} accepted {}s as {:?}, expected an error",
                self.style.name, delta, phrase
            ),
            Err(e) => e,
        }
    }
}
