use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use log::{trace, warn};

use crate::time::calendarerror::CalendarError;
use crate::time::date::{
    next_day,
    previous_day,
    same_day_and_month
};

/// A holiday instantiated for one year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String
}

/// Working-day arithmetic on top of a holiday set.
///
/// Implementors only have to list the holidays of a year; every other method
/// has a default built on `holidays_for_year`. `Send + Sync` lets calendars be
/// shared through `Arc` across threads.
pub trait HolidayCalendar: Send + Sync {

    /// Every holiday of `year`, in rule order. Holidays falling on the same
    /// day are all listed.
    fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>, CalendarError>;

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holiday_name(d).is_some()
    }

    /// Name of the first holiday matching `d` on month and day.
    fn holiday_name(&self, d: NaiveDate) -> Option<String> {
        match self.holidays_for_year(d.year()) {
            Ok(holidays) => holidays
                .into_iter()
                .find(|h| same_day_and_month(d, h.date))
                .map(|h| h.name),
            Err(error) => {
                warn!("no holiday list for {}: {}", d.year(), error);
                None
            }
        }
    }

    fn is_weekend(&self, d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_weekend_or_holiday(&self, d: NaiveDate) -> bool {
        self.is_weekend(d) || self.is_holiday(d)
    }

    fn is_working_day(&self, d: NaiveDate) -> bool {
        !self.is_weekend_or_holiday(d)
    }

    /// Steps one calendar day at a time (backwards when `n` is negative) and
    /// counts only the working days landed on. The starting date is never
    /// checked, so `n == 0` returns `date` as is.
    fn add_working_days(&self, date: NaiveDate, n: i32) -> Result<NaiveDate, CalendarError> {
        let step_one_day: fn(NaiveDate) -> Result<NaiveDate, CalendarError> = if n >= 0 {
            next_day
        } else {
            previous_day
        };

        let mut m = n.unsigned_abs();
        let mut d = date;
        while m > 0 {
            d = step_one_day(d)?;
            m -= self.is_working_day(d) as u32;
        }
        trace!("{} {:+} working days -> {}", date, n, d);
        Ok(d)
    }

    fn subtract_working_days(&self, date: NaiveDate, n: i32) -> Result<NaiveDate, CalendarError> {
        self.add_working_days(date, n.saturating_neg())
    }

    fn next_working_day(&self, d: NaiveDate) -> Result<NaiveDate, CalendarError> {
        self.add_working_days(d, 1)
    }

    fn previous_working_day(&self, d: NaiveDate) -> Result<NaiveDate, CalendarError> {
        self.add_working_days(d, -1)
    }

    /// Working days in `(start, end]`, negated when `end` precedes `start`.
    fn working_days_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let (from, to, sign) = if start <= end {
            (start, end, 1)
        } else {
            (end, start, -1)
        };
        let count = from
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= to)
            .filter(|d| self.is_working_day(*d))
            .count() as i64;
        sign * count
    }
}
