//! Date-of-birth parsing and age arithmetic.

#[cfg(test)]
#[path = "age_test.rs"]
mod age_test;

use chrono::{Datelike, NaiveDate};

/// Format produced by `<input type="date">`.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse a date input value.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

/// Completed years between `birth` and `today`.
///
/// The year difference is reduced by one until the birthday has been reached
/// in `today`'s year. Birth dates in the future yield zero.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    if birth > today {
        return 0;
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
