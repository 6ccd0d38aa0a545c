use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::effect::anyholidayeffect::AnyHolidayEffect;
use crate::effect::holidayeffect::{EffectError, HolidayEffect};
use crate::effect::parameter::Parameter;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum CombinationMode {
    #[default]
    Additive,
    Multiplicative
}

/// The holiday part of a decomposition model.
///
/// With `base` standing for the remaining terms (trend, seasonality):
/// - additive: `base + sum(effects)`
/// - multiplicative: `base * (1 + sum(effects))`
#[derive(Clone, Debug, Default)]
pub struct HolidayEffects {
    mode: CombinationMode,
    effects: Vec<AnyHolidayEffect>
}

impl HolidayEffects {
    pub fn new(mode: CombinationMode) -> HolidayEffects {
        HolidayEffects { mode, effects: Vec::new() }
    }

    pub fn with_effects(mode: CombinationMode, effects: Vec<AnyHolidayEffect>) -> HolidayEffects {
        HolidayEffects { mode, effects }
    }

    pub fn push<E: Into<AnyHolidayEffect>>(&mut self, effect: E) {
        self.effects.push(effect.into());
    }

    pub fn mode(&self) -> CombinationMode {
        self.mode
    }

    pub fn effects(&self) -> &[AnyHolidayEffect] {
        &self.effects
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Sum of every effect's forward output.
    pub fn total(&self, t: &DVector<f64>) -> DVector<f64> {
        let mut total = DVector::zeros(t.len());
        for effect in self.effects.iter() {
            total += effect.forward(t);
        }
        total
    }

    pub fn predict(&self, t: &DVector<f64>, base: &DVector<f64>) -> Result<DVector<f64>, EffectError> {
        EffectError::check_shape(t.shape(), base.shape())?;
        let total = self.total(t);
        let prediction = match self.mode {
            CombinationMode::Additive => base + total,
            CombinationMode::Multiplicative => base.component_mul(&total.add_scalar(1.0))
        };
        Ok(prediction)
    }

    /// Propagates `upstream = dLoss/dPrediction` into every effect weight.
    pub fn backward(&mut self,
                    t: &DVector<f64>,
                    base: &DVector<f64>,
                    upstream: &DVector<f64>) -> Result<(), EffectError> {
        EffectError::check_shape(t.shape(), base.shape())?;
        EffectError::check_shape(t.shape(), upstream.shape())?;
        let effect_upstream = match self.mode {
            CombinationMode::Additive => upstream.clone(),
            CombinationMode::Multiplicative => upstream.component_mul(base)
        };
        for effect in self.effects.iter_mut() {
            effect.backward(t, &effect_upstream)?;
        }
        Ok(())
    }

    pub fn parameters(&self) -> Vec<&Parameter> {
        self.effects.iter().flat_map(|e| e.parameters()).collect()
    }

    pub fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        self.effects.iter_mut().flat_map(|e| e.parameters_mut()).collect()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.parameters().iter().map(|p| p.value()).collect()
    }

    pub fn gradients(&self) -> Vec<f64> {
        self.parameters().iter().map(|p| p.grad()).collect()
    }

    pub fn set_weights(&mut self, weights: &[f64]) -> Result<(), EffectError> {
        let mut parameters = self.parameters_mut();
        if parameters.len() != weights.len() {
            return Err(EffectError::ParameterCountMismatch {
                expected: parameters.len(),
                found: weights.len()
            });
        }
        for (p, &w) in parameters.iter_mut().zip(weights.iter()) {
            p.set_value(w);
        }
        Ok(())
    }

    pub fn zero_grad(&mut self) {
        for effect in self.effects.iter_mut() {
            effect.zero_grad();
        }
    }
}
