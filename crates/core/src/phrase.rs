// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word forms and the rules that turn a [`Bucket`] into text.

use crate::band::{Band, Bucket};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

type Text = Cow<'static, str>;

/// Where the half marker goes relative to the unit noun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfPlacement {
    /// Directly after the count: `12½ hours`.
    #[default]
    Infix,
    /// After the noun: `12 heures et demi`.
    Suffix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HalfMarker {
    pub text: Text,
    #[serde(default)]
    pub placement: HalfPlacement,
}

/// How a count of one with a half marker is worded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OneAndAHalf {
    /// Numeral and plural noun: `1½ hours`.
    #[default]
    Numeral,
    /// The unit's `one` word and singular noun: `un mois et demi`.
    Article,
}

/// Word forms for one counted band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Unit {
    /// Stands in for the count when it is one: "a", "an", "1", "une".
    pub one: Text,
    pub singular: Text,
    pub plural: Text,
    /// Replaces the whole phrase for a plain count of one ("hier").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact_one: Option<Text>,
}

impl Unit {
    pub const fn new(one: &'static str, singular: &'static str, plural: &'static str) -> Self {
        Self {
            one: Cow::Borrowed(one),
            singular: Cow::Borrowed(singular),
            plural: Cow::Borrowed(plural),
            exact_one: None,
        }
    }

    /// Word forms whose plain count of one reads as `exact_one`.
    pub const fn irregular(
        one: &'static str,
        singular: &'static str,
        plural: &'static str,
        exact_one: &'static str,
    ) -> Self {
        Self {
            one: Cow::Borrowed(one),
            singular: Cow::Borrowed(singular),
            plural: Cow::Borrowed(plural),
            exact_one: Some(Cow::Borrowed(exact_one)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Units {
    pub minute: Unit,
    pub hour: Unit,
    pub day: Unit,
    pub week: Unit,
    pub month: Unit,
    pub year: Unit,
}

impl Units {
    /// Word forms for `band`, or `None` for the just-now band.
    pub fn get(&self, band: Band) -> Option<&Unit> {
        match band {
            Band::JustNow => None,
            Band::Minute => Some(&self.minute),
            Band::Hour => Some(&self.hour),
            Band::Day => Some(&self.day),
            Band::Week => Some(&self.week),
            Band::Month => Some(&self.month),
            Band::Year => Some(&self.year),
        }
    }
}

/// Everything a style says, as opposed to how it counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Phrases {
    pub now: Text,
    /// Text before the counted phrase ("il y a ").
    #[serde(default)]
    pub prefix: Text,
    /// Text after the counted phrase (" ago").
    #[serde(default)]
    pub suffix: Text,
    pub half: HalfMarker,
    #[serde(default)]
    pub one_and_a_half: OneAndAHalf,
    pub units: Units,
}

impl Phrases {
    pub fn render(&self, bucket: &Bucket) -> String {
        let Some(unit) = self.units.get(bucket.band) else {
            return self.now.to_string();
        };
        if bucket.is_exactly_one() {
            if let Some(phrase) = &unit.exact_one {
                return phrase.to_string();
            }
        }

        let use_one_word = bucket.count == 1
            && (!bucket.half || self.one_and_a_half == OneAndAHalf::Article);
        let count: Cow<'_, str> = if use_one_word {
            Cow::Borrowed(unit.one.as_ref())
        } else {
            Cow::Owned(bucket.count.to_string())
        };
        let noun = if bucket.count > 1 || (bucket.half && !use_one_word) {
            &unit.plural
        } else {
            &unit.singular
        };
        let half = if bucket.half { &*self.half.text } else { "" };

        match self.half.placement {
            HalfPlacement::Infix => {
                format!("{}{}{} {}{}", self.prefix, count, half, noun, self.suffix)
            }
            HalfPlacement::Suffix => {
                format!("{}{} {}{}{}", self.prefix, count, noun, half, self.suffix)
            }
        }
    }
}

#[cfg(test)]
#[path = "phrase_tests.rs"]
mod tests;
