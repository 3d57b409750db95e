use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid date: year {year}, month {month}, day {day}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32
    },

    /// Stepping away from the given date leaves the range chrono can represent.
    #[error("date out of range when shifting from {0}")]
    DateOutOfRange(NaiveDate),

    #[error("cannot parse '{0}' as a dd/MM/yyyy date")]
    Parse(String)
}
