use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maps calendar dates onto the normalized day axis effects operate on.
///
/// A date is first turned into a whole-day offset from `origin`, then shifted
/// by `mean` and divided by `scale`. Effects built from dates and the
/// timestamps later fed to them must share one encoding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeEncoding {
    #[serde(default = "TimeEncoding::default_origin")]
    origin: NaiveDate,
    #[serde(default)]
    mean: f64,
    #[serde(default = "TimeEncoding::default_scale")]
    scale: f64
}

impl TimeEncoding {
    pub fn new(origin: NaiveDate, mean: f64, scale: f64) -> TimeEncoding {
        TimeEncoding { origin, mean, scale }
    }

    fn default_origin() -> NaiveDate {
        NaiveDate::default()
    }

    fn default_scale() -> f64 {
        1.0
    }

    pub fn origin(&self) -> NaiveDate {
        self.origin
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn day_index(&self, d: NaiveDate) -> f64 {
        (d - self.origin).num_days() as f64
    }

    pub fn normalize(&self, raw: f64) -> f64 {
        (raw - self.mean) / self.scale
    }

    pub fn encode(&self, d: NaiveDate) -> f64 {
        self.normalize(self.day_index(d))
    }

    pub fn encode_all(&self, dates: &[NaiveDate]) -> Vec<f64> {
        dates.iter().map(|d| self.encode(*d)).collect()
    }
}

impl Default for TimeEncoding {
    fn default() -> TimeEncoding {
        TimeEncoding::new(TimeEncoding::default_origin(), 0.0, TimeEncoding::default_scale())
    }
}
