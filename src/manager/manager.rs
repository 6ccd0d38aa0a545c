use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;

use super::managererror::{ManagerError, parse_json_value};
use super::namedobject::NamedJsonObject;


/// Name-keyed registry of objects built from JSON.
///
/// `S` is the support data needed to build an object (e.g. the time encoding
/// shared by every holiday effect).
pub trait IManager<V, S> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    /// Registered names in sorted order.
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone(), supports)?;
        }
        Ok(())
    }
}


pub struct Manager<V, S> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(&str, serde_json::Value, &S) -> Result<V, ManagerError>
}


impl <V, S> Manager<V, S> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(&str, serde_json::Value, &S) -> Result<V, ManagerError>) -> Manager<V, S> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }
}

impl <V, S> IManager<V, S> for Manager<V, S> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        if self.map().contains_key(named_object.name()) {
            return Err(ManagerError::invalid_definition(named_object.name(), "duplicate name"));
        }
        let v = (self.get_obj_from_json)(named_object.name(), json_value, supports)?;
        log::debug!("registered '{}'", named_object.name());
        self.map().insert(named_object.name().to_owned(), v);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Scaled {
        value: f64
    }

    fn scaled_from_json(_name: &str, json: serde_json::Value, factor: &f64) -> Result<f64, ManagerError> {
        let scaled: Scaled = parse_json_value(json)?;
        Ok(scaled.value * factor)
    }

    #[test]
    fn test_manager_inserts_and_gets_by_name() {
        let manager: Manager<f64, f64> = Manager::new(scaled_from_json);
        let json = serde_json::json!([
            {"name": "b", "value": 2.0},
            {"name": "a", "value": 1.5}
        ]);
        let values: Vec<serde_json::Value> = parse_json_value(json).unwrap();
        manager.insert_obj_from_json_vec(&values, &2.0).unwrap();
        assert_eq!(manager.get("a").unwrap(), 3.0);
        assert_eq!(manager.names(), vec!["a".to_owned(), "b".to_owned()]);
        assert!(manager.contains("b"));
    }

    #[test]
    fn test_manager_missing_name() {
        let manager: Manager<f64, f64> = Manager::new(scaled_from_json);
        match manager.get("missing") {
            Err(ManagerError::NameNotFoundError(name)) => assert_eq!(name, "missing"),
            _ => panic!("expected NameNotFoundError")
        }
    }

    #[test]
    fn test_manager_requires_name_field() {
        let manager: Manager<f64, f64> = Manager::new(scaled_from_json);
        let result = manager.insert_obj_from_json(serde_json::json!({"value": 1.0}), &1.0);
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }

    #[test]
    fn test_manager_rejects_duplicate_name() {
        let manager: Manager<f64, f64> = Manager::new(scaled_from_json);
        manager.insert_obj_from_json(serde_json::json!({"name": "a", "value": 1.0}), &1.0).unwrap();
        let result = manager.insert_obj_from_json(serde_json::json!({"name": "a", "value": 4.0}), &1.0);
        match result {
            Err(ManagerError::InvalidDefinitionError { name, .. }) => assert_eq!(name, "a"),
            _ => panic!("expected InvalidDefinitionError")
        }
        assert_eq!(manager.get("a").unwrap(), 1.0);
    }
}
