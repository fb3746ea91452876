use crate::autograd::Context;
use crate::error::AutodiffError;
use crate::ops::function::{apply, ScalarFunction};
use crate::scalar::Scalar;

/// Logistic sigmoid, `1 / (1 + e^-x)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;

impl ScalarFunction for Sigmoid {
    fn name(&self) -> &'static str {
        "sigmoid"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let x = inputs[0];
        // Split on the sign so e^x never overflows.
        let out = if x >= 0.0 {
            1.0 / (1.0 + (-x).exp())
        } else {
            let e = x.exp();
            e / (1.0 + e)
        };
        ctx.save_for_backward(vec![out]);
        out
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, AutodiffError> {
        let [out] = ctx.saved::<1>(self.name())?;
        Ok(vec![d_output * out * (1.0 - out)])
    }
}

pub fn sigmoid_op(a: &Scalar) -> Scalar {
    apply(Sigmoid, &[a])
}
