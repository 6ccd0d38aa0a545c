use chrono::NaiveDate;
use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::rangeofdates::RangeOfDates;
use crate::time::timeencoding::TimeEncoding;

use super::anyholidayeffect::AnyHolidayEffect;
use super::parameter::DEFAULT_INITIAL_WEIGHT;
use super::rangeeffect::RangeEffect;
use super::singledayeffect::{DEFAULT_REPEAT_EVERY, SingleDayEffect};

fn default_repeat_every() -> f64 {
    DEFAULT_REPEAT_EVERY
}

fn default_initial_weight() -> f64 {
    DEFAULT_INITIAL_WEIGHT
}

#[derive(Deserialize)]
struct SingleDayEffectJsonProp {
    holiday: NaiveDate,
    #[serde(default = "default_repeat_every")]
    repeat_every: f64,
    #[serde(default = "default_initial_weight")]
    initial_weight: f64
}

fn single_day_effect_from_json(name: &str,
                               json: serde_json::Value,
                               encoding: &TimeEncoding) -> Result<AnyHolidayEffect, ManagerError> {
    let json_prop: SingleDayEffectJsonProp = parse_json_value(json)?;
    if json_prop.repeat_every == 0.0 || !json_prop.repeat_every.is_finite() {
        return Err(ManagerError::invalid_definition(name, "repeat_every must be finite and nonzero"));
    }
    let effect = SingleDayEffect::from_date(json_prop.holiday, json_prop.repeat_every, encoding)
        .named(name)
        .with_initial_weight(json_prop.initial_weight);
    Ok(effect.into())
}

#[derive(Deserialize)]
struct RangeEffectJsonProp {
    ranges: Vec<RangeOfDates>,
    #[serde(default = "default_initial_weight")]
    initial_weight: f64
}

fn range_effect_from_json(name: &str,
                          json: serde_json::Value,
                          encoding: &TimeEncoding) -> Result<AnyHolidayEffect, ManagerError> {
    let json_prop: RangeEffectJsonProp = parse_json_value(json)?;
    if json_prop.ranges.is_empty() {
        log::warn!("range effect '{}' has no ranges and will always be zero", name);
    }
    let effect = RangeEffect::from_ranges(&json_prop.ranges, encoding)
        .named(name)
        .with_initial_weight(json_prop.initial_weight);
    Ok(effect.into())
}

#[derive(Deserialize)]
enum EffectType {
    SingleDay,
    Range
}

#[derive(Deserialize)]
struct EffectTypedObject {
    effect_type: EffectType
}

fn holiday_effect_from_json(name: &str,
                            json: serde_json::Value,
                            encoding: &TimeEncoding) -> Result<AnyHolidayEffect, ManagerError> {
    let typed_obj: EffectTypedObject = parse_json_value(json.clone())?;
    match typed_obj.effect_type {
        EffectType::SingleDay => single_day_effect_from_json(name, json, encoding),
        EffectType::Range     => range_effect_from_json(name, json, encoding)
    }
}

pub struct HolidayEffectManager;

impl HolidayEffectManager {
    pub fn new() -> Manager<AnyHolidayEffect, TimeEncoding> {
        Manager::new(holiday_effect_from_json)
    }
}
