use chrono::{
    Datelike,
    Days,
    NaiveDate
};

use crate::time::calendarerror::CalendarError;

/// Calendar dates are plain `NaiveDate` values: no time of day, no zone.
pub type CalendarDate = NaiveDate;

pub const ONE_DAY: Days = Days::new(1);

pub fn make_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Compares month and day only; the years may differ.
#[inline]
pub fn same_day_and_month(d1: NaiveDate, d2: NaiveDate) -> bool {
    d1.month() == d2.month() && d1.day() == d2.day()
}

pub fn next_day(d: NaiveDate) -> Result<NaiveDate, CalendarError> {
    d.checked_add_days(ONE_DAY).ok_or(CalendarError::DateOutOfRange(d))
}

pub fn previous_day(d: NaiveDate) -> Result<NaiveDate, CalendarError> {
    d.checked_sub_days(ONE_DAY).ok_or(CalendarError::DateOutOfRange(d))
}

pub fn shift_days(d: NaiveDate, n: i64) -> Result<NaiveDate, CalendarError> {
    let days = Days::new(n.unsigned_abs());
    let shifted = if n >= 0 {
        d.checked_add_days(days)
    } else {
        d.checked_sub_days(days)
    };
    shifted.ok_or(CalendarError::DateOutOfRange(d))
}
