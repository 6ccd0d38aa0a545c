use argmin::core::{CostFunction, Error, Executor, Gradient, State};
use argmin::solver::gradientdescent::SteepestDescent;
use argmin::solver::linesearch::BacktrackingLineSearch;
use argmin::solver::linesearch::condition::ArmijoCondition;
use nalgebra::DVector;

use super::holidayeffects::HolidayEffects;

/// Least-squares fit of holiday weights on top of a fixed base series.
///
/// The cost is the mean squared error between `effects.predict(t, base)` and
/// `observed`; its gradient is obtained by driving `HolidayEffects::backward`
/// with `2 / n * (prediction - observed)`.
#[derive(Clone)]
pub struct WeightFit {
    effects: HolidayEffects,
    t: DVector<f64>,
    base: DVector<f64>,
    observed: DVector<f64>
}

const ARMIJO_C: f64 = 1e-4;
const RELATIVE_TARGET_COST: f64 = 1e-16;

#[derive(Clone, Debug)]
pub struct FitReport {
    pub weights: Vec<f64>,
    pub cost: f64,
    pub iterations: u64
}

impl WeightFit {
    pub fn new(effects: HolidayEffects,
               t: DVector<f64>,
               base: DVector<f64>,
               observed: DVector<f64>) -> Result<WeightFit, Error> {
        if t.len() != base.len() || t.len() != observed.len() {
            return Err(Error::msg(format!(
                "series lengths differ: t={}, base={}, observed={}",
                t.len(), base.len(), observed.len()
            )));
        }
        Ok(WeightFit { effects, t, base, observed })
    }

    pub fn effects(&self) -> &HolidayEffects {
        &self.effects
    }

    pub fn into_effects(self) -> HolidayEffects {
        self.effects
    }

    fn effects_at(&self, weights: &[f64]) -> Result<HolidayEffects, Error> {
        let mut effects = self.effects.clone();
        effects.set_weights(weights)?;
        effects.zero_grad();
        Ok(effects)
    }

    fn residual(&self, effects: &HolidayEffects) -> Result<DVector<f64>, Error> {
        Ok(effects.predict(&self.t, &self.base)? - &self.observed)
    }

    /// Runs steepest descent with an Armijo backtracking line search from the
    /// current weights and stores the best weights found back into the
    /// effects. Stops after `max_iters` or once the cost has shrunk by
    /// `RELATIVE_TARGET_COST`.
    pub fn fit(&mut self, max_iters: u64) -> Result<FitReport, Error> {
        let init = self.effects.weights();
        let init_cost = self.cost(&init)?;
        if init.is_empty() || init_cost == 0.0 {
            return Ok(FitReport { weights: init, cost: init_cost, iterations: 0 });
        }

        let linesearch = BacktrackingLineSearch::new(ArmijoCondition::new(ARMIJO_C)?).rho(0.5)?;
        let solver = SteepestDescent::new(linesearch);
        let result = Executor::new(self.clone(), solver)
            .configure(|state| state
                .param(init)
                .max_iters(max_iters)
                .target_cost(init_cost * RELATIVE_TARGET_COST))
            .run()?;

        let state = result.state();
        let weights = match state.get_best_param() {
            Some(w) => w.clone(),
            None => self.effects.weights()
        };
        let cost = state.get_best_cost();
        let iterations = state.get_iter();
        log::info!("holiday weight fit finished after {} iterations, mse = {}", iterations, cost);

        self.effects.set_weights(&weights)?;
        Ok(FitReport { weights, cost, iterations })
    }
}

impl CostFunction for WeightFit {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, weights: &Self::Param) -> Result<Self::Output, Error> {
        let effects = self.effects_at(weights)?;
        let residual = self.residual(&effects)?;
        Ok(residual.norm_squared() / residual.len().max(1) as f64)
    }
}

impl Gradient for WeightFit {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;

    fn gradient(&self, weights: &Self::Param) -> Result<Self::Gradient, Error> {
        let mut effects = self.effects_at(weights)?;
        let residual = self.residual(&effects)?;
        let upstream = residual * (2.0 / self.t.len().max(1) as f64);
        effects.backward(&self.t, &self.base, &upstream)?;
        log::debug!("weights {:?} -> gradient {:?}", weights, effects.gradients());
        Ok(effects.gradients())
    }
}
