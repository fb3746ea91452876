// src/scalar/scalar_data.rs

use crate::autograd::{Context, VariableId};
use crate::ops::ScalarFunction;
use crate::scalar::Scalar;
use std::fmt;
use std::sync::{Arc, PoisonError};

/// Record of how a non-leaf `Scalar` was produced.
///
/// Only built when at least one input requires grad.
pub struct ScalarHistory {
    /// The function applied in the forward pass.
    pub(crate) function: Arc<dyn ScalarFunction>,
    /// Values the forward pass saved for `function`'s backward.
    pub(crate) ctx: Context<f64>,
    /// Inputs, in the order they were passed to `function`.
    pub(crate) inputs: Vec<Scalar>,
}

impl fmt::Debug for ScalarHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input_ids: Vec<VariableId> = self.inputs.iter().map(Scalar::id).collect();
        f.debug_struct("ScalarHistory")
            .field("function", &self.function.name())
            .field("inputs", &input_ids)
            .finish()
    }
}

/// Internal state of a `Scalar`, shared by all of its handles.
#[derive(Debug)]
pub struct ScalarData {
    pub(crate) value: f64,
    pub(crate) id: VariableId,
    /// Whether gradients flow through this value. False means constant.
    pub(crate) requires_grad: bool,
    /// Derivative deposited by backward passes, summed across passes.
    pub(crate) grad: Option<f64>,
    /// `None` for leaves and constants.
    pub(crate) history: Option<ScalarHistory>,
}

impl ScalarData {
    pub(crate) fn new(value: f64, requires_grad: bool, history: Option<ScalarHistory>) -> Self {
        ScalarData {
            value,
            id: VariableId::fresh(),
            requires_grad,
            grad: None,
            history,
        }
    }
}

// Long chains would otherwise be freed recursively, one stack frame per node.
impl Drop for ScalarData {
    fn drop(&mut self) {
        let mut pending: Vec<Scalar> = match self.history.take() {
            Some(history) => history.inputs,
            None => return,
        };
        while let Some(scalar) = pending.pop() {
            // Only the last handle to a node detaches its inputs.
            if let Ok(lock) = Arc::try_unwrap(scalar.data) {
                let mut data = lock.into_inner().unwrap_or_else(PoisonError::into_inner);
                if let Some(history) = data.history.take() {
                    pending.extend(history.inputs);
                }
            }
        }
    }
}
