use chrono::NaiveDate;

use crate::time::calendarerror::CalendarError;
use crate::time::date::make_date;
use super::recurringholiday::RecurringHoliday;

/// Fixed Italian holidays as (month, day, name). Easter and Pasquetta move
/// every year and are computed separately.
pub const ITALIAN_FIXED_HOLIDAYS: [(u32, u32, &str); 10] = [
    (1, 1, "New Year's Day (Capodanno)"),
    (1, 6, "Epiphany (Epifania)"),
    (4, 25, "Liberation Day (Festa della Liberazione)"),
    (5, 1, "International Workers' Day (Festa del Lavoro)"),
    (6, 2, "Republic Day (Festa della Repubblica)"),
    (8, 15, "Assumption Day (Ferragosto)"),
    (11, 1, "All Saints' Day (Ognissanti)"),
    (12, 8, "Immaculate Conception (Immacolata)"),
    (12, 25, "Christmas Day (Natale)"),
    (12, 26, "St. Stephen's Day (Santo Stefano)")
];

// Any (month, day) that exists in some year exists in a leap year.
const LEAP_YEAR: i32 = 2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedDateHoliday {
    name: String,
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub fn new(name: &str, month: u32, day: u32) -> Result<FixedDateHoliday, CalendarError> {
        make_date(LEAP_YEAR, month, day)?;
        Ok(FixedDateHoliday {
            name: name.to_owned(),
            month,
            day
        })
    }

    pub fn italian() -> Vec<FixedDateHoliday> {
        ITALIAN_FIXED_HOLIDAYS
            .iter()
            .map(|&(month, day, name)| FixedDateHoliday { name: name.to_owned(), month, day })
            .collect()
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        make_date(year, self.month, self.day)
    }
}
