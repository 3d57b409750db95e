use std::env;
use std::process::ExitCode;

use italianholidays::configuration::{Configuration, DEFAULT_CALENDAR_NAME};
use italianholidays::time::calendar::holidaycalendar::HolidayCalendar;
use italianholidays::time::dateformat::{format_italian, parse_italian};

const USAGE: &str = "usage: italianholidays <dd/MM/yyyy> [working-days] [config.json] [calendar-name]";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(date_arg) = args.first() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    let date = match parse_italian(date_arg) {
        Ok(date) => date,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };
    let working_days = match args.get(1).map(|s| s.parse::<i32>()).transpose() {
        Ok(n) => n.unwrap_or(0),
        Err(error) => {
            eprintln!("invalid number of working days: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let config = Configuration::default();
    if let Some(config_path) = args.get(2) {
        if let Err(error) = config.from_reader(config_path) {
            eprintln!("cannot load {}: {}", config_path, error);
            return ExitCode::FAILURE;
        }
    }
    let calendar_name = args.get(3).map(String::as_str).unwrap_or(DEFAULT_CALENDAR_NAME);
    let calendar = match config.calendar(calendar_name) {
        Ok(calendar) => calendar,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    println!("{}: weekend {}, holiday {}, working day {}",
             format_italian(date),
             calendar.is_weekend(date),
             calendar.is_holiday(date),
             calendar.is_working_day(date));
    if let Some(name) = calendar.holiday_name(date) {
        println!("{}", name);
    }
    match calendar.add_working_days(date, working_days) {
        Ok(shifted) => {
            println!("{} {:+} working days = {}", format_italian(date), working_days, format_italian(shifted));
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
