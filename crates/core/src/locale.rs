// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in styles and the registry that selects between them.

use crate::error::{FormatError, LocaleError};
use crate::phrase::{HalfMarker, HalfPlacement, OneAndAHalf, Phrases, Unit, Units};
use crate::style::Style;
use crate::threshold::Thresholds;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

const HALF: HalfMarker = HalfMarker {
    text: Cow::Borrowed("½"),
    placement: HalfPlacement::Infix,
};

/// "5 minutes ago", "12½ hours ago", "a day ago"
pub static ENGLISH: Style = Style {
    name: Cow::Borrowed("english"),
    thresholds: Thresholds::ENGLISH,
    phrases: Phrases {
        now: Cow::Borrowed("just now"),
        prefix: Cow::Borrowed(""),
        suffix: Cow::Borrowed(" ago"),
        half: HALF,
        one_and_a_half: OneAndAHalf::Numeral,
        units: Units {
            minute: Unit::new("a", "minute", "minutes"),
            hour: Unit::new("an", "hour", "hours"),
            day: Unit::new("a", "day", "days"),
            week: Unit::new("a", "week", "weeks"),
            month: Unit::new("a", "month", "months"),
            year: Unit::new("a", "year", "years"),
        },
    },
};

/// "5 mn", "12½ h", "1 d"
pub static ENGLISH_SHORT: Style = Style {
    name: Cow::Borrowed("english_short"),
    thresholds: Thresholds::ENGLISH,
    phrases: Phrases {
        now: Cow::Borrowed("now"),
        prefix: Cow::Borrowed(""),
        suffix: Cow::Borrowed(""),
        half: HALF,
        one_and_a_half: OneAndAHalf::Numeral,
        units: Units {
            minute: Unit::new("1", "mn", "mn"),
            hour: Unit::new("1", "h", "h"),
            day: Unit::new("1", "d", "d"),
            week: Unit::new("1", "w", "w"),
            month: Unit::new("1", "mo", "mo"),
            year: Unit::new("1", "y", "y"),
        },
    },
};

/// "il y a 5 minutes", "il y a 12 heures et demi", "hier"
pub static FRENCH: Style = Style {
    name: Cow::Borrowed("french"),
    thresholds: Thresholds::FRENCH,
    phrases: Phrases {
        now: Cow::Borrowed("à l'instant"),
        prefix: Cow::Borrowed("il y a "),
        suffix: Cow::Borrowed(""),
        half: HalfMarker {
            text: Cow::Borrowed(" et demi"),
            placement: HalfPlacement::Suffix,
        },
        one_and_a_half: OneAndAHalf::Article,
        units: Units {
            minute: Unit::new("une", "minute", "minutes"),
            hour: Unit::new("une", "heure", "heures"),
            day: Unit::irregular("un", "jour", "jours", "hier"),
            week: Unit::new("une", "semaine", "semaines"),
            month: Unit::new("un", "mois", "mois"),
            year: Unit::new("1", "an", "ans"),
        },
    },
};

/// Long English phrase for `delta` seconds.
pub fn english(delta: f64) -> Result<String, FormatError> {
    ENGLISH.format(delta)
}

/// Abbreviated English phrase for `delta` seconds.
pub fn english_short(delta: f64) -> Result<String, FormatError> {
    ENGLISH_SHORT.format(delta)
}

/// French phrase for `delta` seconds.
pub fn french(delta: f64) -> Result<String, FormatError> {
    FRENCH.format(delta)
}

/// Built-in locale and style pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    English,
    EnglishShort,
    French,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::English, Locale::EnglishShort, Locale::French];

    pub fn style(self) -> &'static Style {
        match self {
            Locale::English => &ENGLISH,
            Locale::EnglishShort => &ENGLISH_SHORT,
            Locale::French => &FRENCH,
        }
    }

    pub fn format(self, delta: f64) -> Result<String, FormatError> {
        self.style().format(delta)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::English => "english",
            Locale::EnglishShort => "english_short",
            Locale::French => "french",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "english" | "en" => Ok(Locale::English),
            "english_short" | "en_short" => Ok(Locale::EnglishShort),
            "french" | "fr" => Ok(Locale::French),
            _ => Err(LocaleError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "locale_tests.rs"]
mod tests;
