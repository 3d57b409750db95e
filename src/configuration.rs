use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarmanager::HolidayCalendarManager;
use crate::time::calendar::italiancalendar::ItalianCalendar;

pub const DEFAULT_CALENDAR_NAME: &str = "Italy";

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_calendar: Vec<serde_json::Value>
}

/// Named holiday calendars loaded from a JSON document of the form
/// `{ "holiday_calendar": [ { "name": ..., "calendar_type": ... }, ... ] }`.
pub struct Configuration {
    holiday_calendar_manager_cell: RefCell<Manager<Arc<dyn HolidayCalendar>>>
}


impl Configuration {
    /// An empty configuration.
    pub fn new() -> Configuration {
        Configuration {
            holiday_calendar_manager_cell: RefCell::new(HolidayCalendarManager::new())
        }
    }

    pub fn holiday_calendar_manager(&self) -> RefMut<'_, Manager<Arc<dyn HolidayCalendar>>> {
        self.holiday_calendar_manager_cell.borrow_mut()
    }

    pub fn calendar(&self, name: &str) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
        self.holiday_calendar_manager().get(name)
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file_path = file_path.as_ref();
        debug!("loading configuration from {}", file_path.display());
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.load(json_prop)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        let manager = self.holiday_calendar_manager();
        manager.insert_obj_from_json_vec(&json_prop.holiday_calendar)?;
        debug!("{} holiday calendars configured", manager.names().len());
        Ok(())
    }
}

impl Default for Configuration {
    /// A configuration holding the Italian calendar under [`DEFAULT_CALENDAR_NAME`].
    fn default() -> Configuration {
        let config = Configuration::new();
        config.holiday_calendar_manager().insert(DEFAULT_CALENDAR_NAME, Arc::new(ItalianCalendar));
        config
    }
}
