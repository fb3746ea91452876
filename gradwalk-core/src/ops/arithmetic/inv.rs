use crate::autograd::Context;
use crate::error::AutodiffError;
use crate::ops::function::{apply, ScalarFunction};
use crate::scalar::Scalar;

/// `1 / a`. Follows IEEE semantics at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inv;

impl ScalarFunction for Inv {
    fn name(&self) -> &'static str {
        "inv"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let a = inputs[0];
        ctx.save_for_backward(vec![a]);
        1.0 / a
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, AutodiffError> {
        let [a] = ctx.saved::<1>(self.name())?;
        Ok(vec![-d_output / (a * a)])
    }
}

pub fn inv_op(a: &Scalar) -> Scalar {
    apply(Inv, &[a])
}
