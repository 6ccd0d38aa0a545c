use std::cell::{
    Ref,
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::effect::anyholidayeffect::AnyHolidayEffect;
use crate::effect::holidayeffectmanager::HolidayEffectManager;
use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::model::holidayeffects::{CombinationMode, HolidayEffects};
use crate::time::timeencoding::TimeEncoding;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    time_encoding: TimeEncoding,
    #[serde(default)]
    combination_mode: CombinationMode,
    holiday_effect: Vec<serde_json::Value>
}

pub struct Configuration {
    time_encoding_cell: RefCell<TimeEncoding>,
    combination_mode_cell: RefCell<CombinationMode>,
    holiday_effect_manager_cell: RefCell<Manager<AnyHolidayEffect, TimeEncoding>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            time_encoding_cell: RefCell::new(TimeEncoding::default()),
            combination_mode_cell: RefCell::new(CombinationMode::default()),
            holiday_effect_manager_cell: RefCell::new(HolidayEffectManager::new())
        }
    }

    pub fn time_encoding(&self) -> TimeEncoding {
        *self.time_encoding_cell.borrow()
    }

    pub fn combination_mode(&self) -> CombinationMode {
        *self.combination_mode_cell.borrow()
    }

    pub fn holiday_effect_manager(&self) -> RefMut<'_, Manager<AnyHolidayEffect, TimeEncoding>> {
        self.holiday_effect_manager_cell.borrow_mut()
    }

    fn holiday_effect_manager_ref(&self) -> Ref<'_, Manager<AnyHolidayEffect, TimeEncoding>> {
        self.holiday_effect_manager_cell.borrow()
    }

    /// All configured effects, sorted by name, combined in the configured mode.
    pub fn holiday_effects(&self) -> Result<HolidayEffects, ManagerError> {
        let manager = self.holiday_effect_manager_ref();
        let mut effects = HolidayEffects::new(self.combination_mode());
        for name in manager.names() {
            effects.push(manager.get(&name)?);
        }
        Ok(effects)
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let path = file_path.as_ref();
        log::info!("loading holiday effect configuration from {}", path.display());
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json_value(json_value)
    }

    pub fn from_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        let encoding = json_prop.time_encoding;
        if !(encoding.scale().is_finite() && encoding.scale() > 0.0) || !encoding.mean().is_finite() {
            return Err(ManagerError::invalid_definition(
                "time_encoding",
                "scale must be finite and positive and mean must be finite"
            ));
        }
        // Build into a fresh registry so a failing entry leaves the current state untouched.
        let holiday_effect_manager = HolidayEffectManager::new();
        holiday_effect_manager.insert_obj_from_json_vec(&json_prop.holiday_effect, &encoding)?;
        log::info!("{} holiday effects configured", holiday_effect_manager.names().len());
        *self.time_encoding_cell.borrow_mut() = encoding;
        *self.combination_mode_cell.borrow_mut() = json_prop.combination_mode;
        *self.holiday_effect_manager_cell.borrow_mut() = holiday_effect_manager;
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::holidayeffect::HolidayEffect;

    #[test]
    fn test_configuration_from_json_value() {
        let config = Configuration::new();
        let json = serde_json::json!({
            "time_encoding": {"origin": "2020-01-01", "mean": 0.0, "scale": 1.0},
            "combination_mode": "Multiplicative",
            "holiday_effect": [
                {"name": "NewYear", "effect_type": "SingleDay", "holiday": "2020-01-01"},
                {"name": "Easter", "effect_type": "Range", "ranges": [["2020-04-10", "2020-04-13"]]}
            ]
        });
        config.from_json_value(json).unwrap();
        assert_eq!(config.combination_mode(), CombinationMode::Multiplicative);
        let effects = config.holiday_effects().unwrap();
        let names: Vec<&str> = effects.effects().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Easter", "NewYear"]);
        assert_eq!(effects.effects()[1].value(0.0), 0.05);
        assert_eq!(effects.effects()[1].value(366.0), 0.0);
        assert_eq!(effects.effects()[0].value(100.0), 0.05);
    }

    #[test]
    fn test_configuration_rejects_non_positive_scale() {
        let config = Configuration::new();
        let json = serde_json::json!({
            "time_encoding": {"scale": 0.0},
            "holiday_effect": []
        });
        let result = config.from_json_value(json);
        assert!(matches!(result, Err(ManagerError::InvalidDefinitionError { .. })));
    }

    #[test]
    fn test_configuration_failed_load_keeps_previous_state() {
        let config = Configuration::new();
        let valid = serde_json::json!({
            "holiday_effect": [
                {"name": "Christmas", "effect_type": "SingleDay", "holiday": "2020-12-25"}
            ]
        });
        config.from_json_value(valid).unwrap();

        let broken = serde_json::json!({
            "time_encoding": {"origin": "2020-01-01", "mean": 0.0, "scale": 1.0},
            "combination_mode": "Multiplicative",
            "holiday_effect": [
                {"name": "NewYear", "effect_type": "SingleDay", "holiday": "2020-01-01"},
                {"name": "Broken", "effect_type": "SingleDay", "holiday": "2020-02-01", "repeat_every": 0}
            ]
        });
        let result = config.from_json_value(broken);
        assert!(matches!(result, Err(ManagerError::InvalidDefinitionError { .. })));
        assert_eq!(config.combination_mode(), CombinationMode::default());
        assert_eq!(config.time_encoding(), TimeEncoding::default());
        let manager = config.holiday_effect_manager();
        assert!(!manager.contains("NewYear"));
        assert!(!manager.contains("Broken"));
        assert_eq!(manager.names(), vec!["Christmas".to_owned()]);
    }

    #[test]
    fn test_configuration_rejects_duplicate_names() {
        let config = Configuration::new();
        let json = serde_json::json!({
            "holiday_effect": [
                {"name": "X", "effect_type": "SingleDay", "holiday": "2020-12-25"},
                {"name": "X", "effect_type": "Range", "ranges": [["2020-04-10", "2020-04-13"]]}
            ]
        });
        match config.from_json_value(json) {
            Err(ManagerError::InvalidDefinitionError { name, .. }) => assert_eq!(name, "X"),
            _ => panic!("expected InvalidDefinitionError")
        }
        assert!(config.holiday_effect_manager().names().is_empty());
    }

    #[test]
    fn test_configuration_missing_file() {
        let config = Configuration::new();
        let result = config.from_reader("does/not/exist.json");
        assert!(matches!(result, Err(ManagerError::IOError(_))));
    }
}
