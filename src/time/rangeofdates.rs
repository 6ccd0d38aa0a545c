use chrono::NaiveDate;
use serde::Deserialize;

use super::timeencoding::TimeEncoding;

/// A closed span of calendar days, e.g. a holiday weekend.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "(NaiveDate, NaiveDate)")]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates {start_date: d2, end_date: d1}
        } else {
            RangeOfDates {start_date: d1, end_date: d2}
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    /// Bounds of the range on the encoded time axis.
    pub fn encode(&self, encoding: &TimeEncoding) -> (f64, f64) {
        (encoding.encode(self.start_date), encoding.encode(self.end_date))
    }
}

impl From<(NaiveDate, NaiveDate)> for RangeOfDates {
    fn from(bounds: (NaiveDate, NaiveDate)) -> RangeOfDates {
        RangeOfDates::new(bounds.0, bounds.1)
    }
}
