//! Abbreviated English phrases
//!
//! "now", "5 mn", "12½ h", "1 d".

use crate::prelude::*;

fn short() -> LocaleAssert<'static> {
    locale(Locale::EnglishShort)
}

#[test]
fn now_below_half_a_second() {
    short().says(0.0, "now").says(0.4, "now");
}

#[test]
fn minute_counts() {
    short()
        .says(20.0, "1 mn")
        .says(minutes(5), "5 mn")
        .says(minutes(59), "59 mn");
}

#[test]
fn hour_counts() {
    short()
        .says(10_800.0, "3 h")
        .says(18_000.0, "5 h")
        .says(44_700.0, "12½ h");
}

#[test]
fn days_use_numeric_one() {
    short()
        .says(86_400.0, "1 d")
        .says(days(4) + hours(11, 0), "4½ d")
        .says(days(6), "6 d");
}

#[test]
fn week_counts() {
    short()
        .says(604_800.0, "1 w")
        .says(days(8), "1 w")
        .says(days(13), "2 w")
        .says(days(17), "2½ w")
        .says(weeks(3), "3 w");
}

#[test]
fn months_and_years() {
    short()
        .says(weeks(4), "1 mo")
        .says(days(40), "1½ mo")
        .says(months(11), "11 mo")
        .says(months(12), "1 y")
        .says(months(18), "1½ y")
        .says(63_072_000.0, "2 y");
}
