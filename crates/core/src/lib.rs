// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ago-core: turn elapsed seconds into "5 minutes ago" style phrases

pub mod band;
pub mod bucket;
pub mod error;
pub mod locale;
pub mod phrase;
pub mod style;
pub mod threshold;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use band::{Band, Bucket};
pub use bucket::bucket;
pub use error::{FormatError, LocaleError, StyleError};
pub use locale::{english, english_short, french, Locale, ENGLISH, ENGLISH_SHORT, FRENCH};
pub use phrase::{HalfMarker, HalfPlacement, OneAndAHalf, Phrases, Unit, Units};
pub use style::{format, Style};
pub use threshold::{HalfWindow, MinutePolicy, SingularCutoffs, Thresholds};
