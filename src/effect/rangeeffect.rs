use nalgebra::allocator::Allocator;
use nalgebra::storage::RawStorage;
use nalgebra::{DefaultAllocator, Dim, Matrix, OMatrix};

use crate::time::rangeofdates::RangeOfDates;
use crate::time::timeencoding::TimeEncoding;

use super::holidayeffect::HolidayEffect;
use super::parameter::{DEFAULT_INITIAL_WEIGHT, Parameter};

/// One kind of multi-day event (e.g. every Black Friday weekend) made of
/// closed intervals sharing a single weight.
///
/// Overlapping intervals stack: a timestamp inside `k` intervals contributes
/// `k * weight`. Intervals whose lower bound exceeds the upper bound never
/// match.
#[derive(Clone, Debug)]
pub struct RangeEffect {
    intervals: Vec<(f64, f64)>,
    weight: Parameter
}

impl RangeEffect {
    pub fn new(intervals: Vec<(f64, f64)>) -> RangeEffect {
        RangeEffect {
            intervals,
            weight: Parameter::new("range".to_owned(), DEFAULT_INITIAL_WEIGHT)
        }
    }

    pub fn from_ranges(ranges: &[RangeOfDates], encoding: &TimeEncoding) -> RangeEffect {
        RangeEffect::new(ranges.iter().map(|r| r.encode(encoding)).collect())
    }

    pub fn named(mut self, name: &str) -> RangeEffect {
        self.weight = Parameter::new(name.to_owned(), self.weight.value());
        self
    }

    pub fn with_initial_weight(mut self, w: f64) -> RangeEffect {
        self.weight.set_value(w);
        self
    }

    pub fn intervals(&self) -> &[(f64, f64)] {
        &self.intervals
    }
}

#[inline]
fn within(lower: f64, upper: f64, t: f64) -> bool {
    (lower <= t) && (t <= upper)
}

impl HolidayEffect for RangeEffect {
    fn name(&self) -> &str {
        self.weight.name()
    }

    fn activation(&self, t: f64) -> f64 {
        let mut count = 0.0;
        for &(lower, upper) in self.intervals.iter() {
            if within(lower, upper, t) {
                count += 1.0;
            }
        }
        count
    }

    fn weight(&self) -> &Parameter {
        &self.weight
    }

    fn weight_mut(&mut self) -> &mut Parameter {
        &mut self.weight
    }

    /// Interval counts, accumulated interval by interval into a zero array
    /// shaped like `t`.
    fn activations<R, C, S>(&self, t: &Matrix<f64, R, C, S>) -> OMatrix<f64, R, C>
    where
        R: Dim,
        C: Dim,
        S: RawStorage<f64, R, C>,
        DefaultAllocator: Allocator<R, C> {
        let (nrows, ncols) = t.shape_generic();
        let mut counts = OMatrix::<f64, R, C>::zeros_generic(nrows, ncols);
        for &(lower, upper) in self.intervals.iter() {
            for (count, &x) in counts.iter_mut().zip(t.iter()) {
                if within(lower, upper, x) {
                    *count += 1.0;
                }
            }
        }
        counts
    }
}
