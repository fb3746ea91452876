// src/scalar/mod.rs

use crate::autograd::VariableId;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod autograd;
pub mod scalar_data;
mod traits;

pub use scalar_data::{ScalarData, ScalarHistory};

/// A differentiable `f64` value with recorded provenance.
///
/// `Scalar` is a handle around `Arc<RwLock<ScalarData>>`: clones share the same node,
/// and gradient bookkeeping is mutated through `&self`.
pub struct Scalar {
    pub(crate) data: Arc<RwLock<ScalarData>>,
}

impl Scalar {
    /// Creates a leaf that requires grad.
    pub fn new(value: f64) -> Self {
        Self::from_data(ScalarData::new(value, true, None))
    }

    /// Creates a constant: excluded from differentiation.
    pub fn constant(value: f64) -> Self {
        Self::from_data(ScalarData::new(value, false, None))
    }

    /// Wraps the result of a function application. A value with history requires grad,
    /// a value without one is a constant.
    pub(crate) fn from_history(value: f64, history: Option<ScalarHistory>) -> Self {
        let requires_grad = history.is_some();
        Self::from_data(ScalarData::new(value, requires_grad, history))
    }

    fn from_data(data: ScalarData) -> Self {
        Scalar {
            data: Arc::new(RwLock::new(data)),
        }
    }

    pub(crate) fn read_data(&self) -> RwLockReadGuard<'_, ScalarData> {
        self.data.read().unwrap_or_else(|poisoned| {
            log::warn!("RwLock for scalar data was poisoned on read. Recovering.");
            PoisonError::into_inner(poisoned)
        })
    }

    pub(crate) fn write_data(&self) -> RwLockWriteGuard<'_, ScalarData> {
        self.data.write().unwrap_or_else(|poisoned| {
            log::warn!("RwLock for scalar data was poisoned on write. Recovering.");
            PoisonError::into_inner(poisoned)
        })
    }

    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    pub fn id(&self) -> VariableId {
        self.read_data().id
    }

    /// Name of the function that produced this value, if it has history.
    pub fn history_name(&self) -> Option<&'static str> {
        self.read_data()
            .history
            .as_ref()
            .map(|history| history.function.name())
    }

    /// Applies the natural logarithm.
    pub fn ln(&self) -> Scalar {
        crate::ops::math_elem::ln::ln_op(self)
    }

    pub fn exp(&self) -> Scalar {
        crate::ops::math_elem::exp::exp_op(self)
    }

    /// Multiplicative inverse, `1 / self`.
    pub fn inv(&self) -> Scalar {
        crate::ops::arithmetic::inv::inv_op(self)
    }

    pub fn sigmoid(&self) -> Scalar {
        crate::ops::activation::sigmoid::sigmoid_op(self)
    }

    pub fn relu(&self) -> Scalar {
        crate::ops::activation::relu::relu_op(self)
    }
}
