use crate::autograd::Context;
use crate::error::AutodiffError;
use crate::ops::function::{apply, ScalarFunction};
use crate::scalar::Scalar;

/// Natural logarithm. Non-positive inputs yield NaN or `-inf`, as `f64::ln` does.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ln;

impl ScalarFunction for Ln {
    fn name(&self) -> &'static str {
        "ln"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let a = inputs[0];
        ctx.save_for_backward(vec![a]);
        a.ln()
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, AutodiffError> {
        let [a] = ctx.saved::<1>(self.name())?;
        Ok(vec![d_output / a])
    }
}

pub fn ln_op(a: &Scalar) -> Scalar {
    apply(Ln, &[a])
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
