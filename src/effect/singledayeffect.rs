use chrono::NaiveDate;

use crate::math::remainder::remainder;
use crate::time::timeencoding::TimeEncoding;

use super::holidayeffect::HolidayEffect;
use super::parameter::{DEFAULT_INITIAL_WEIGHT, Parameter};

pub const DEFAULT_REPEAT_EVERY: f64 = 365.0;

/// A recurring single-day holiday such as Christmas.
///
/// A timestamp matches when `(t - anchor) mod period` is exactly zero. No
/// tolerance is applied: timestamps are expected to be whole-day offsets so
/// that matches land exactly on period boundaries.
#[derive(Clone, Debug)]
pub struct SingleDayEffect {
    anchor: f64,
    period: f64,
    weight: Parameter
}

impl SingleDayEffect {
    pub fn new(holiday: f64, repeat_every: f64, mean: f64, scale: f64) -> SingleDayEffect {
        SingleDayEffect {
            anchor: (holiday - mean) / scale,
            period: repeat_every / scale,
            weight: Parameter::new("single_day".to_owned(), DEFAULT_INITIAL_WEIGHT)
        }
    }

    /// Yearly recurrence on an unnormalized axis.
    pub fn with_defaults(holiday: f64) -> SingleDayEffect {
        SingleDayEffect::new(holiday, DEFAULT_REPEAT_EVERY, 0.0, 1.0)
    }

    pub fn from_date(holiday: NaiveDate, repeat_every: f64, encoding: &TimeEncoding) -> SingleDayEffect {
        SingleDayEffect::new(
            encoding.day_index(holiday),
            repeat_every,
            encoding.mean(),
            encoding.scale()
        )
    }

    pub fn named(mut self, name: &str) -> SingleDayEffect {
        self.weight = Parameter::new(name.to_owned(), self.weight.value());
        self
    }

    pub fn with_initial_weight(mut self, w: f64) -> SingleDayEffect {
        self.weight.set_value(w);
        self
    }

    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn is_match(&self, t: f64) -> bool {
        remainder(t - self.anchor, self.period) == 0.0
    }
}

impl HolidayEffect for SingleDayEffect {
    fn name(&self) -> &str {
        self.weight.name()
    }

    fn activation(&self, t: f64) -> f64 {
        if self.is_match(t) { 1.0 } else { 0.0 }
    }

    fn weight(&self) -> &Parameter {
        &self.weight
    }

    fn weight_mut(&mut self) -> &mut Parameter {
        &mut self.weight
    }
}
