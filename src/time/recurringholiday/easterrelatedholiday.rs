use chrono::NaiveDate;

use crate::time::calendarerror::CalendarError;
use crate::time::date::{next_day, shift_days};
use super::recurringholiday::RecurringHoliday;

/// Easter Sunday of `year` in the Gregorian calendar, by Gauss's algorithm.
///
/// Every division is a floor division; the arithmetic runs in `i64` so that
/// years outside chrono's range fail in date construction rather than
/// overflowing.
pub fn easter_for_year(year: i32) -> Result<NaiveDate, CalendarError> {
    let y = year as i64;
    // Golden Number - 1
    let g = y.rem_euclid(19);
    let c = y.div_euclid(100);
    // related to the epact
    let h = (c - c.div_euclid(4) - (8 * c + 13).div_euclid(25) + 19 * g + 15).rem_euclid(30);
    // days from 21 March to the Paschal full moon
    let i = h - h.div_euclid(28) * (1 - 29_i64.div_euclid(h + 1) * (21 - g).div_euclid(11));
    // weekday of the Paschal full moon
    let j = (y + y.div_euclid(4) + i + 2 - c + c.div_euclid(4)).rem_euclid(7);
    // days from 21 March to the Sunday on or before the Paschal full moon
    let l = i - j;

    let month = 3 + (l + 40).div_euclid(44);
    let day = l + 28 - 31 * month.div_euclid(4);

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or(CalendarError::InvalidDate { year, month: month as u32, day: day as u32 })
}

/// The day after `easter`. Returns a new value; `easter` is untouched.
pub fn monday_after_easter(easter: NaiveDate) -> Result<NaiveDate, CalendarError> {
    next_day(easter)
}

pub fn monday_after_easter_for_year(year: i32) -> Result<NaiveDate, CalendarError> {
    monday_after_easter(easter_for_year(year)?)
}

/// Alias for [`monday_after_easter_for_year`].
pub fn pasquetta_for_year(year: i32) -> Result<NaiveDate, CalendarError> {
    monday_after_easter_for_year(year)
}

/// Alias for [`monday_after_easter`].
pub fn pasquetta_from_pasqua(pasqua: NaiveDate) -> Result<NaiveDate, CalendarError> {
    monday_after_easter(pasqua)
}

/// A holiday a fixed number of days away from Easter Sunday.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EasterRelatedHoliday {
    name: String,
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub fn new(name: &str, shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            name: name.to_owned(),
            shift_days
        }
    }

    pub fn easter() -> EasterRelatedHoliday {
        EasterRelatedHoliday::new("Easter (Pasqua)", 0)
    }

    pub fn pasquetta() -> EasterRelatedHoliday {
        EasterRelatedHoliday::new("Easter Monday (Pasquetta)", 1)
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        let easter = easter_for_year(year)?;
        shift_days(easter, self.shift_days as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        let expected = [
            (1818, 3, 22),
            (1943, 4, 25),
            (1961, 4, 2),
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2019, 4, 21),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (2038, 4, 25),
            (2285, 3, 22)
        ];
        for (y, m, d) in expected {
            assert_eq!(easter_for_year(y).unwrap(), date(y, m, d), "Easter {}", y);
        }
    }

    #[test]
    fn monday_after_easter_2024_crosses_into_april() {
        let easter = easter_for_year(2024).unwrap();
        let pasquetta = monday_after_easter(easter).unwrap();
        assert_eq!(pasquetta, date(2024, 4, 1));
        assert_eq!(easter, date(2024, 3, 31));
        assert_eq!(pasquetta_for_year(2024).unwrap(), pasquetta);
        assert_eq!(pasquetta_from_pasqua(easter).unwrap(), pasquetta);
    }

    #[test]
    fn easter_is_always_a_sunday() {
        use chrono::{Datelike, Weekday};
        for year in 1583..=2500 {
            assert_eq!(easter_for_year(year).unwrap().weekday(), Weekday::Sun, "Easter {}", year);
        }
    }

    #[test]
    fn years_outside_chrono_range_are_invalid() {
        assert!(matches!(easter_for_year(i32::MAX), Err(CalendarError::InvalidDate { .. })));
        assert!(matches!(easter_for_year(i32::MIN), Err(CalendarError::InvalidDate { .. })));
    }

    #[test]
    fn easter_related_holiday_shifts_from_easter() {
        assert_eq!(EasterRelatedHoliday::pasquetta().get_holiday(2025).unwrap(), date(2025, 4, 21));
        let good_friday = EasterRelatedHoliday::new("Good Friday", -2);
        assert_eq!(good_friday.get_holiday(2024).unwrap(), date(2024, 3, 29));
        assert!(EasterRelatedHoliday::easter().is_holiday(date(2023, 4, 9)));
    }
}
