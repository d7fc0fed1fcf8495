// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

// ── Delta builders, in seconds ──────────────────────────────────────────────
//
// Months are 30 days and years 365 days, independent of any style's
// `month_days`.

pub fn minutes(m: u64) -> f64 {
    hours(0, m)
}

pub fn hours(h: u64, m: u64) -> f64 {
    ((h * 60 + m) * 60) as f64
}

pub fn days(d: u64) -> f64 {
    d as f64 * hours(24, 0)
}

pub fn weeks(w: u64) -> f64 {
    w as f64 * days(7)
}

pub fn months(m: u64) -> f64 {
    m as f64 * days(30)
}

pub fn years(y: u64) -> f64 {
    y as f64 * days(365)
}
