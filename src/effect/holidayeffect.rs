use nalgebra::allocator::Allocator;
use nalgebra::storage::RawStorage;
use nalgebra::{DefaultAllocator, Dim, Matrix, OMatrix};
use thiserror::Error;

use super::parameter::Parameter;

#[derive(Debug, Error, PartialEq)]
pub enum EffectError {
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize)
    },
    #[error("expected {expected} parameter values, found {found}")]
    ParameterCountMismatch {
        expected: usize,
        found: usize
    }
}

impl EffectError {
    pub fn check_shape(expected: (usize, usize), found: (usize, usize)) -> Result<(), EffectError> {
        if expected == found {
            Ok(())
        } else {
            Err(EffectError::ShapeMismatch { expected, found })
        }
    }
}

/// A holiday term of a decomposition model carrying one learnable weight.
///
/// The output for a timestamp is `activation(t) * weight`, where the
/// activation is the number of holiday matches at `t` (0 or 1 for a single
/// day, the interval count for a range). Since the output is linear in the
/// weight, the activation is also the derivative of the output with respect
/// to it.
pub trait HolidayEffect: Send + Sync {
    fn name(&self) -> &str;

    fn activation(&self, t: f64) -> f64;

    fn weight(&self) -> &Parameter;

    fn weight_mut(&mut self) -> &mut Parameter;

    fn value(&self, t: f64) -> f64 {
        self.activation(t) * self.weight().value()
    }

    /// Activations for every element of `t`, preserving its shape.
    fn activations<R, C, S>(&self, t: &Matrix<f64, R, C, S>) -> OMatrix<f64, R, C>
    where
        Self: Sized,
        R: Dim,
        C: Dim,
        S: RawStorage<f64, R, C>,
        DefaultAllocator: Allocator<R, C> {
        t.map(|x| self.activation(x))
    }

    fn forward<R, C, S>(&self, t: &Matrix<f64, R, C, S>) -> OMatrix<f64, R, C>
    where
        Self: Sized,
        R: Dim,
        C: Dim,
        S: RawStorage<f64, R, C>,
        DefaultAllocator: Allocator<R, C> {
        self.activations(t) * self.weight().value()
    }

    /// Accumulates `sum(upstream * d forward(t) / d weight)` into the weight
    /// gradient. `upstream` is the loss gradient with respect to the output
    /// of `forward(t)` and must have the same shape as `t`.
    fn backward<R, C, S1, S2>(&mut self,
                              t: &Matrix<f64, R, C, S1>,
                              upstream: &Matrix<f64, R, C, S2>) -> Result<(), EffectError>
    where
        Self: Sized,
        R: Dim,
        C: Dim,
        S1: RawStorage<f64, R, C>,
        S2: RawStorage<f64, R, C>,
        DefaultAllocator: Allocator<R, C> {
        EffectError::check_shape(t.shape(), upstream.shape())?;
        let activations = self.activations(t);
        let g: f64 = activations
            .iter()
            .zip(upstream.iter())
            .map(|(a, u)| a * u)
            .sum();
        self.weight_mut().accumulate_grad(g);
        Ok(())
    }

    fn parameters(&self) -> Vec<&Parameter> {
        vec![self.weight()]
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        vec![self.weight_mut()]
    }

    fn zero_grad(&mut self) {
        self.weight_mut().zero_grad();
    }
}
