use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn parse_date_input_accepts_iso_dates() {
    assert_eq!(parse_date_input("2008-10-15"), Some(date(2008, 10, 15)));
    assert_eq!(parse_date_input(" 2000-01-01 "), Some(date(2000, 1, 1)));
}

#[test]
fn parse_date_input_rejects_other_shapes() {
    assert_eq!(parse_date_input("15/10/2008"), None);
    assert_eq!(parse_date_input("2008-13-01"), None);
    assert_eq!(parse_date_input(""), None);
}

#[test]
fn age_counts_birthday_on_the_day() {
    assert_eq!(age_on(date(2008, 10, 15), date(2026, 10, 15)), 18);
}

#[test]
fn age_is_one_less_the_day_before_birthday() {
    assert_eq!(age_on(date(2008, 10, 16), date(2026, 10, 15)), 17);
}

#[test]
fn age_handles_year_boundaries() {
    assert_eq!(age_on(date(2000, 12, 31), date(2001, 1, 1)), 0);
    assert_eq!(age_on(date(2000, 1, 1), date(2000, 12, 31)), 0);
    assert_eq!(age_on(date(1990, 6, 1), date(2026, 5, 31)), 35);
}

#[test]
fn leap_day_birthday_waits_for_march_in_common_years() {
    assert_eq!(age_on(date(2004, 2, 29), date(2022, 2, 28)), 17);
    assert_eq!(age_on(date(2004, 2, 29), date(2022, 3, 1)), 18);
}

#[test]
fn future_birth_date_is_age_zero() {
    assert_eq!(age_on(date(2030, 1, 1), date(2026, 10, 15)), 0);
}
