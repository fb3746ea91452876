// src/scalar/autograd.rs

use crate::autograd::{backpropagate, Variable, VariableId};
use crate::error::AutodiffError;
use crate::scalar::Scalar;

impl Scalar {
    /// Checks if this value takes part in differentiation.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Returns the derivative deposited by previous backward passes, if any.
    pub fn grad(&self) -> Option<f64> {
        self.read_data().grad
    }

    /// Resets the stored derivative to `None`.
    pub fn zero_grad(&self) {
        self.write_data().grad = None;
    }

    /// Creates a constant with the same value, detached from the graph.
    pub fn detach(&self) -> Scalar {
        Scalar::constant(self.value())
    }

    /// Computes the derivative of this value w.r.t. every leaf, seeding it with `1.0`.
    pub fn backward(&self) -> Result<(), AutodiffError> {
        self.backward_with(1.0)
    }

    /// Computes the derivative of this value w.r.t. every leaf, seeding it with `seed`.
    ///
    /// Derivatives are added to what the leaves already hold; call
    /// [`zero_grad`](Scalar::zero_grad) between passes to start from scratch.
    pub fn backward_with(&self, seed: f64) -> Result<(), AutodiffError> {
        if !self.requires_grad() {
            return Err(AutodiffError::RequiresGradNotMet);
        }
        if self.read_data().history.is_none() {
            log::debug!("backward() called on a leaf scalar. Depositing the seed directly.");
        }
        backpropagate(self, seed)
    }
}

impl Variable for Scalar {
    type Grad = f64;

    fn unique_id(&self) -> VariableId {
        self.id()
    }

    fn is_leaf(&self) -> bool {
        let guard = self.read_data();
        guard.requires_grad && guard.history.is_none()
    }

    fn is_constant(&self) -> bool {
        !self.requires_grad()
    }

    fn parents(&self) -> Vec<Scalar> {
        self.read_data()
            .history
            .as_ref()
            .map(|history| history.inputs.clone())
            .unwrap_or_default()
    }

    fn chain_rule(&self, d_output: &f64) -> Result<Vec<(Scalar, f64)>, AutodiffError> {
        let guard = self.read_data();
        let history = guard.history.as_ref().ok_or_else(|| {
            AutodiffError::InternalError(format!(
                "chain_rule called on scalar {} without history",
                guard.id
            ))
        })?;

        let input_grads = history.function.backward(&history.ctx, *d_output)?;
        if input_grads.len() != history.inputs.len() {
            return Err(AutodiffError::GradientCountMismatch {
                operation: history.function.name().to_string(),
                expected: history.inputs.len(),
                actual: input_grads.len(),
            });
        }

        Ok(history.inputs.iter().cloned().zip(input_grads).collect())
    }

    fn accumulate_derivative(&self, value: f64) -> Result<(), AutodiffError> {
        let mut guard = self.write_data();
        if guard.history.is_some() {
            return Err(AutodiffError::InternalError(format!(
                "accumulate_derivative called on non-leaf scalar {}",
                guard.id
            )));
        }
        guard.grad = Some(guard.grad.map_or(value, |existing| existing + value));
        Ok(())
    }
}
