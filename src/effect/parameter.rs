use uuid::Uuid;

use crate::objectwithuuid::ObjectWithUUID;

pub const DEFAULT_INITIAL_WEIGHT: f64 = 0.05;

/// A learnable scalar exposed to an external optimizer.
///
/// `value` is only written by the optimizer between forward passes, while
/// `grad` accumulates contributions from every `backward` call until
/// `zero_grad` is invoked.
#[derive(Clone, Debug)]
pub struct Parameter {
    id: Uuid,
    name: String,
    value: f64,
    grad: f64
}

impl Parameter {
    pub fn new(name: String, value: f64) -> Parameter {
        Parameter {
            id: Uuid::new_v4(),
            name,
            value,
            grad: 0.0
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn accumulate_grad(&mut self, g: f64) {
        self.grad += g;
    }

    pub fn zero_grad(&mut self) {
        self.grad = 0.0;
    }
}

impl ObjectWithUUID for Parameter {
    fn uuid(&self) -> &Uuid {
        &self.id
    }
}
