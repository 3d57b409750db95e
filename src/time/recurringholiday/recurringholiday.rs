use chrono::{Datelike, NaiveDate};
use log::warn;

use crate::time::calendarerror::CalendarError;
use crate::time::date::same_day_and_month;


pub trait RecurringHoliday: Send + Sync {

    fn name(&self) -> &str;

    fn get_holiday(&self, year: i32) -> Result<NaiveDate, CalendarError>;

    /// Matches on month and day of the rule instantiated for `d`'s own year.
    fn is_holiday(&self, d: NaiveDate) -> bool {
        match self.get_holiday(d.year()) {
            Ok(holiday) => same_day_and_month(d, holiday),
            Err(error) => {
                warn!("holiday '{}' has no date in {}: {}", self.name(), d.year(), error);
                false
            }
        }
    }
}
