use chrono::{Datelike, NaiveDate};
use log::warn;

use crate::time::calendar::holidaycalendar::{Holiday, HolidayCalendar};
use crate::time::calendarerror::CalendarError;
use crate::time::date::{make_date, same_day_and_month};
use crate::time::recurringholiday::easterrelatedholiday::{
    easter_for_year,
    monday_after_easter
};
use crate::time::recurringholiday::fixeddateholiday::ITALIAN_FIXED_HOLIDAYS;

const EASTER_NAME: &str = "Easter (Pasqua)";
const PASQUETTA_NAME: &str = "Easter Monday (Pasquetta)";

/// Italian public holidays with Saturday and Sunday as weekend.
///
/// | Date                  | Holiday                                   |
/// |-----------------------|-------------------------------------------|
/// | 1 January             | New Year's Day (Capodanno)                |
/// | 6 January             | Epiphany (Epifania)                       |
/// | Variable              | Easter (Pasqua)                           |
/// | Monday after Easter   | Easter Monday (Pasquetta)                 |
/// | 25 April              | Liberation Day (Festa della Liberazione)  |
/// | 1 May                 | International Workers' Day                |
/// | 2 June                | Republic Day (Festa della Repubblica)     |
/// | 15 August             | Ferragosto / Assumption Day               |
/// | 1 November            | All Saints' Day (Ognissanti)              |
/// | 8 December            | Immaculate Conception (Immacolata)        |
/// | 25 December           | Christmas Day (Natale)                    |
/// | 26 December           | St. Stephen's Day (Santo Stefano)         |
///
/// Holds no state; every query rebuilds what it needs from the year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItalianCalendar;

impl ItalianCalendar {
    pub fn new() -> ItalianCalendar {
        ItalianCalendar
    }

    pub fn fixed_holidays(&self, year: i32) -> Result<Vec<NaiveDate>, CalendarError> {
        ITALIAN_FIXED_HOLIDAYS
            .iter()
            .map(|&(month, day, _)| make_date(year, month, day))
            .collect()
    }

    pub fn is_fixed_holiday(&self, d: NaiveDate) -> bool {
        ITALIAN_FIXED_HOLIDAYS
            .iter()
            .any(|&(month, day, _)| month == d.month() && day == d.day())
    }

    pub fn is_easter_or_pasquetta(&self, d: NaiveDate) -> bool {
        let easter = match easter_for_year(d.year()) {
            Ok(easter) => easter,
            Err(error) => {
                warn!("no Easter for {}: {}", d.year(), error);
                return false;
            }
        };
        same_day_and_month(d, easter)
            || monday_after_easter(easter).is_ok_and(|pasquetta| same_day_and_month(d, pasquetta))
    }
}

impl HolidayCalendar for ItalianCalendar {
    fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        let mut holidays = Vec::with_capacity(ITALIAN_FIXED_HOLIDAYS.len() + 2);
        for &(month, day, name) in ITALIAN_FIXED_HOLIDAYS.iter() {
            holidays.push(Holiday { date: make_date(year, month, day)?, name: name.to_owned() });
        }
        let easter = easter_for_year(year)?;
        holidays.push(Holiday { date: easter, name: EASTER_NAME.to_owned() });
        holidays.push(Holiday { date: monday_after_easter(easter)?, name: PASQUETTA_NAME.to_owned() });
        Ok(holidays)
    }

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.is_fixed_holiday(d) || self.is_easter_or_pasquetta(d)
    }
}
