use crate::autograd::Context;
use crate::error::AutodiffError;
use crate::ops::function::{apply, ScalarFunction};
use crate::scalar::Scalar;

/// `a * b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mul;

impl ScalarFunction for Mul {
    fn name(&self) -> &'static str {
        "mul"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let (a, b) = (inputs[0], inputs[1]);
        ctx.save_for_backward(vec![a, b]);
        a * b
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, AutodiffError> {
        // grad_a = grad_output * b, grad_b = grad_output * a
        let [a, b] = ctx.saved::<2>(self.name())?;
        Ok(vec![d_output * b, d_output * a])
    }
}

pub fn mul_op(a: &Scalar, b: &Scalar) -> Scalar {
    apply(Mul, &[a, b])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
