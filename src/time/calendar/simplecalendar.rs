use std::collections::HashSet;
use std::sync::Arc;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::time::calendar::holidaycalendar::{Holiday, HolidayCalendar};
use crate::time::calendarerror::CalendarError;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// Weekend days as a bitmask: Mon(0), Tue(1), ..., Sun(6)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WeekendMask(u8);

impl WeekendMask {
    fn new(weekends: &HashSet<Weekday>) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    #[inline]
    fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    fn to_hashset(&self) -> HashSet<Weekday> {
        let mut set = HashSet::new();
        for day in 0..7u8 {
            if (self.0 & (1u8 << day)) != 0 {
                if let Ok(weekday) = Weekday::try_from(day) {
                    set.insert(weekday);
                }
            }
        }
        set
    }
}

/// Calendar assembled from a weekend set and a list of recurring holidays,
/// typically read from configuration.
pub struct SimpleCalendar {
    weekends: WeekendMask,
    recurring_holidays: Vec<Arc<dyn RecurringHoliday>>
}

impl SimpleCalendar {
    pub fn new(
        weekends: HashSet<Weekday>,
        recurring_holidays: Vec<Arc<dyn RecurringHoliday>>
    ) -> SimpleCalendar {
        SimpleCalendar {
            weekends: WeekendMask::new(&weekends),
            recurring_holidays
        }
    }

    /// Rule-based equivalent of `ItalianCalendar`.
    pub fn italy() -> SimpleCalendar {
        let mut recurring_holidays: Vec<Arc<dyn RecurringHoliday>> = FixedDateHoliday::italian()
            .into_iter()
            .map(|h| Arc::new(h) as Arc<dyn RecurringHoliday>)
            .collect();
        recurring_holidays.push(Arc::new(EasterRelatedHoliday::easter()));
        recurring_holidays.push(Arc::new(EasterRelatedHoliday::pasquetta()));

        SimpleCalendar::new(
            HashSet::from([Weekday::Sat, Weekday::Sun]),
            recurring_holidays
        )
    }

    pub fn weekends(&self) -> HashSet<Weekday> {
        self.weekends.to_hashset()
    }

    pub fn recurring_holidays(&self) -> &[Arc<dyn RecurringHoliday>] {
        &self.recurring_holidays
    }
}

impl HolidayCalendar for SimpleCalendar {
    fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        self.recurring_holidays
            .iter()
            .map(|r| r.get_holiday(year).map(|date| Holiday { date, name: r.name().to_owned() }))
            .collect()
    }

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.recurring_holidays.iter().any(|r| r.is_holiday(d))
    }

    fn holiday_name(&self, d: NaiveDate) -> Option<String> {
        self.recurring_holidays
            .iter()
            .find(|r| r.is_holiday(d))
            .map(|r| r.name().to_owned())
    }

    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }
}
