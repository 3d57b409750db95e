use std::collections::HashSet;
use std::sync::Arc;

use chrono::Weekday;
use log::debug;
use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::italiancalendar::ItalianCalendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    name: String,
    shift_days: i32
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(EasterRelatedHoliday::new(&json_prop.name, json_prop.shift_days)))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    name: String,
    month: u32,
    day: u32
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(&json_prop.name, json_prop.month, json_prop.day)?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let holiday_type_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    match holiday_type_obj.holiday_type {
        HolidayType::EasterRelated => easter_related_holiday_from_json(json),
        HolidayType::FixedDate     => fixed_date_holiday_from_json(json)
    }
}

#[derive(Deserialize)]
enum CalendarType {
    Italian,
    SimpleCalendar
}

#[derive(Deserialize)]
struct CalendarTypedObject {
    calendar_type: CalendarType
}

fn default_weekends() -> HashSet<Weekday> {
    HashSet::from([Weekday::Sat, Weekday::Sun])
}

#[derive(Deserialize)]
struct SimpleCalendarJsonProp {
    #[serde(default = "default_weekends")]
    weekends: HashSet<Weekday>,
    recurring_holidays: Vec<serde_json::Value>
}

fn get_simple_calendar_from_json(json_value: serde_json::Value) -> Result<SimpleCalendar, ManagerError> {
    let calendar_json: SimpleCalendarJsonProp = parse_json_value(json_value)?;
    let recurring_holidays = calendar_json.recurring_holidays
        .into_iter()
        .map(get_recurring_holiday_from_json)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("simple calendar with {} recurring holidays", recurring_holidays.len());
    Ok(SimpleCalendar::new(calendar_json.weekends, recurring_holidays))
}

pub fn get_holiday_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let calendar_typed_object: CalendarTypedObject = parse_json_value(json_value.clone())?;
    match calendar_typed_object.calendar_type {
        CalendarType::Italian => Ok(Arc::new(ItalianCalendar)),
        CalendarType::SimpleCalendar => Ok(Arc::new(get_simple_calendar_from_json(json_value)?))
    }
}


pub struct HolidayCalendarManager;


impl HolidayCalendarManager {
    pub fn new() -> Manager<Arc<dyn HolidayCalendar>> {
        Manager::new(get_holiday_calendar_from_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    use crate::manager::manager::IManager;
    use crate::time::calendarerror::CalendarError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn builds_both_calendar_types() {
        let manager = HolidayCalendarManager::new();
        manager.insert_obj_from_json_vec(&[
            json!({"name": "Italy", "calendar_type": "Italian"}),
            json!({
                "name": "Rome",
                "calendar_type": "SimpleCalendar",
                "weekends": ["Sat", "Sun"],
                "recurring_holidays": [
                    {"holiday_type": "FixedDate", "name": "Santi Pietro e Paolo", "month": 6, "day": 29},
                    {"holiday_type": "EasterRelated", "name": "Pasquetta", "shift_days": 1}
                ]
            })
        ]).unwrap();

        let italy = manager.get("Italy").unwrap();
        assert!(italy.is_holiday(date(2024, 4, 25)));

        let rome = manager.get("Rome").unwrap();
        assert!(rome.is_holiday(date(2024, 6, 29)));
        assert!(rome.is_holiday(date(2024, 4, 1)));
        assert!(!rome.is_holiday(date(2024, 4, 25)));
        assert_eq!(rome.holiday_name(date(2025, 4, 21)).as_deref(), Some("Pasquetta"));
    }

    #[test]
    fn weekends_default_to_saturday_and_sunday() {
        let calendar = get_holiday_calendar_from_json(json!({
            "calendar_type": "SimpleCalendar",
            "recurring_holidays": []
        })).unwrap();
        assert!(calendar.is_weekend(date(2024, 1, 6)));
        assert!(calendar.is_weekend(date(2024, 1, 7)));
        assert!(calendar.is_working_day(date(2024, 1, 1)));
    }

    #[test]
    fn impossible_fixed_date_is_a_calendar_error() {
        let result = get_holiday_calendar_from_json(json!({
            "calendar_type": "SimpleCalendar",
            "recurring_holidays": [{"holiday_type": "FixedDate", "name": "x", "month": 4, "day": 31}]
        }));
        assert!(matches!(
            result,
            Err(ManagerError::CalendarError(CalendarError::InvalidDate { month: 4, day: 31, .. }))
        ));
    }

    #[test]
    fn unknown_calendar_type_is_a_parse_error() {
        let result = get_holiday_calendar_from_json(json!({"calendar_type": "Lunar"}));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
