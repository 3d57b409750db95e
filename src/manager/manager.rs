use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use super::managererror::{ManagerError, parse_json_value};
use super::namedobject::NamedJsonObject;


pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn insert(&self, name: &str, v: V) {
        debug!("registering '{}'", name);
        self.map().insert(name.to_owned(), v);
    }

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }
}


/// Named objects built from JSON by `get_obj_from_json`.
pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        self.insert(named_object.name(), v);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Clone, Deserialize)]
    struct Offset {
        days: i32
    }

    fn offset_from_json(json: serde_json::Value) -> Result<i32, ManagerError> {
        let offset: Offset = parse_json_value(json)?;
        Ok(offset.days)
    }

    #[test]
    fn inserts_named_objects_and_reports_missing_names() {
        let manager = Manager::new(offset_from_json);
        manager.insert_obj_from_json_vec(&[
            json!({"name": "one", "days": 1}),
            json!({"name": "two", "days": 2})
        ]).unwrap();

        assert_eq!(manager.get("two").unwrap(), 2);
        assert!(manager.contains("one"));
        assert_eq!(manager.names(), vec!["one".to_owned(), "two".to_owned()]);
        assert!(matches!(manager.get("three"), Err(ManagerError::NameNotFoundError(name)) if name == "three"));
    }

    #[test]
    fn objects_without_name_are_rejected() {
        let manager = Manager::new(offset_from_json);
        assert!(matches!(
            manager.insert_obj_from_json(json!({"days": 1})),
            Err(ManagerError::JsonParseError(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let manager = Manager::new(offset_from_json);
        assert!(matches!(
            manager.from_reader("/definitely/not/here.json"),
            Err(ManagerError::IOError(_))
        ));
    }
}
