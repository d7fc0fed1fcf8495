//! Custom style specs
//!
//! Styles loaded from configuration text use the same bucketing skeleton as
//! the built-in locales.

use crate::prelude::*;

const GERMAN: &str = r#"
name = "german"

[thresholds]
just_now_below = 30.0
month_days = 30.0
singular = { minute = 1.5, hour = 75.0, day = 30.0, week = 9.0, month = 40.0, year = 16.0 }
hour_window = { low = 15.0, high = 45.0 }
day_window = { low = 6.0, high = 18.0 }
week_window = { low = 2.0, high = 4.0 }
month_window = { low = 10.0, high = 20.0 }
year_window = { low = 4.0, high = 8.0 }

[phrases]
now = "gerade eben"
prefix = "vor "
half = { text = "½" }

[phrases.units]
minute = { one = "einer", singular = "Minute", plural = "Minuten" }
hour = { one = "einer", singular = "Stunde", plural = "Stunden" }
day = { one = "einem", singular = "Tag", plural = "Tagen", exact_one = "gestern" }
week = { one = "einer", singular = "Woche", plural = "Wochen" }
month = { one = "einem", singular = "Monat", plural = "Monaten" }
year = { one = "einem", singular = "Jahr", plural = "Jahren" }
"#;

#[test]
fn toml_style_formats_like_builtins() {
    let german = Style::from_toml_str(GERMAN).unwrap();
    style(&german)
        .says(10.0, "gerade eben")
        .says(60.0, "vor einer Minute")
        .says(300.0, "vor 5 Minuten")
        .says(44_700.0, "vor 12½ Stunden")
        .says(86_400.0, "gestern")
        .says(days(17), "vor 2½ Wochen")
        .says(months(12), "vor einem Jahr");
}

#[test]
fn loaded_style_shares_error_policy() {
    let german = Style::from_toml_str(GERMAN).unwrap();
    assert_eq!(style(&german).rejects(-1.0), FormatError::Negative(-1.0));
}

#[test]
fn invalid_config_is_reported_with_field() {
    let broken = GERMAN.replace("high = 45.0", "high = 60.0");
    let err = Style::from_toml_str(&broken).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid style field hour_window: high 60 must be below the unit size 60"
    );
}

#[test]
fn builtin_styles_can_be_tuned() {
    let mut strict = Locale::English.style().clone();
    strict.thresholds.just_now_below = 30.0;
    strict.validate().unwrap();
    style(&strict)
        .says(20.0, "just now")
        .says(30.0, "a minute ago");
}
