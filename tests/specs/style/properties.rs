//! Properties every style upholds
//!
//! Totality, no count at or beyond its band's bound, and a single error
//! policy for invalid input.

use crate::prelude::*;
use ago_core::Band;
use proptest::prelude::*;

fn any_locale() -> impl Strategy<Value = Locale> {
    prop_oneof![
        Just(Locale::English),
        Just(Locale::EnglishShort),
        Just(Locale::French),
    ]
}

proptest! {
    #[test]
    fn every_delta_has_a_phrase(locale in any_locale(), delta in 0.0f64..1e11) {
        let phrase = locale.format(delta).unwrap();
        prop_assert!(!phrase.is_empty());
        prop_assert!(!phrase.contains("NaN"));
        prop_assert!(!phrase.contains('-'));
    }

    #[test]
    fn no_band_reaches_its_bound(locale in any_locale(), delta in 0.0f64..1e11) {
        let bucket = locale.style().bucket(delta).unwrap();
        if let Some(bound) = bucket.band.upper_bound() {
            prop_assert!(bucket.count < bound);
        }
    }

    #[test]
    fn invalid_input_is_rejected_everywhere(locale in any_locale(), delta in -1e11f64..-1e-9) {
        prop_assert_eq!(locale.format(delta), Err(FormatError::Negative(delta)));
    }
}

#[test]
fn four_weeks_is_never_said() {
    for day in 22..=31 {
        let bucket = Locale::English.style().bucket(days(day)).unwrap();
        assert!(
            bucket.band != Band::Week || bucket.count < 4,
            "{} days bucketed as {}",
            day,
            bucket
        );
    }
    locale(Locale::English).says(days(27), "a month ago");
    locale(Locale::EnglishShort).says(days(27), "1 mo");
    locale(Locale::French).says(days(27), "il y a un mois");
}

#[test]
fn half_marker_appears_mid_window_and_rounds_above() {
    locale(Locale::English)
        .says(hours(12, 25), "12½ hours ago")
        .says(hours(12, 46), "13 hours ago")
        .says(hours(12, 14), "12 hours ago");
}
