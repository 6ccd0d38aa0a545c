use nalgebra::allocator::Allocator;
use nalgebra::storage::RawStorage;
use nalgebra::{DefaultAllocator, Dim, Matrix, OMatrix};

use super::holidayeffect::HolidayEffect;
use super::parameter::Parameter;
use super::rangeeffect::RangeEffect;
use super::singledayeffect::SingleDayEffect;

/// Closed set of effect kinds, so registries and compositions can hold both
/// without boxing.
#[derive(Clone, Debug)]
pub enum AnyHolidayEffect {
    SingleDay(SingleDayEffect),
    Range(RangeEffect)
}

impl From<SingleDayEffect> for AnyHolidayEffect {
    fn from(effect: SingleDayEffect) -> AnyHolidayEffect {
        AnyHolidayEffect::SingleDay(effect)
    }
}

impl From<RangeEffect> for AnyHolidayEffect {
    fn from(effect: RangeEffect) -> AnyHolidayEffect {
        AnyHolidayEffect::Range(effect)
    }
}

impl HolidayEffect for AnyHolidayEffect {
    fn name(&self) -> &str {
        match self {
            AnyHolidayEffect::SingleDay(e) => e.name(),
            AnyHolidayEffect::Range(e) => e.name()
        }
    }

    fn activation(&self, t: f64) -> f64 {
        match self {
            AnyHolidayEffect::SingleDay(e) => e.activation(t),
            AnyHolidayEffect::Range(e) => e.activation(t)
        }
    }

    fn weight(&self) -> &Parameter {
        match self {
            AnyHolidayEffect::SingleDay(e) => e.weight(),
            AnyHolidayEffect::Range(e) => e.weight()
        }
    }

    fn weight_mut(&mut self) -> &mut Parameter {
        match self {
            AnyHolidayEffect::SingleDay(e) => e.weight_mut(),
            AnyHolidayEffect::Range(e) => e.weight_mut()
        }
    }

    fn activations<R, C, S>(&self, t: &Matrix<f64, R, C, S>) -> OMatrix<f64, R, C>
    where
        R: Dim,
        C: Dim,
        S: RawStorage<f64, R, C>,
        DefaultAllocator: Allocator<R, C> {
        match self {
            AnyHolidayEffect::SingleDay(e) => e.activations(t),
            AnyHolidayEffect::Range(e) => e.activations(t)
        }
    }
}
