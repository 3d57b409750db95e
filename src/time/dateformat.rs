use chrono::NaiveDate;

use crate::time::calendarerror::CalendarError;

/// "dd/MM/yyyy" (UNI EN 28601).
pub const ITALIAN_FORMAT: &str = "%d/%m/%Y";

/// "dd/MM/yy".
pub const ITALIAN_SHORT_FORMAT: &str = "%d/%m/%y";

pub fn format_italian(d: NaiveDate) -> String {
    d.format(ITALIAN_FORMAT).to_string()
}

pub fn format_italian_short(d: NaiveDate) -> String {
    d.format(ITALIAN_SHORT_FORMAT).to_string()
}

pub fn parse_italian(s: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(s.trim(), ITALIAN_FORMAT)
        .map_err(|_| CalendarError::Parse(s.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_zero_padding() {
        let d = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(format_italian(d), "01/04/2024");
        assert_eq!(format_italian_short(d), "01/04/24");
    }

    #[test]
    fn parses_day_first() {
        assert_eq!(parse_italian("25/12/2024").unwrap(), NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert_eq!(parse_italian(" 06/01/2025 ").unwrap(), NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
    }

    #[test]
    fn rejects_month_first_and_garbage() {
        assert_eq!(parse_italian("12/25/2024"), Err(CalendarError::Parse("12/25/2024".to_owned())));
        assert!(parse_italian("2024-12-25").is_err());
        assert!(parse_italian("").is_err());
    }
}
