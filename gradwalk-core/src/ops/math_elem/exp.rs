use crate::autograd::Context;
use crate::error::AutodiffError;
use crate::ops::function::{apply, ScalarFunction};
use crate::scalar::Scalar;

#[derive(Debug, Clone, Copy, Default)]
pub struct Exp;

impl ScalarFunction for Exp {
    fn name(&self) -> &'static str {
        "exp"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let out = inputs[0].exp();
        // d/dx e^x is the output itself
        ctx.save_for_backward(vec![out]);
        out
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, AutodiffError> {
        let [out] = ctx.saved::<1>(self.name())?;
        Ok(vec![d_output * out])
    }
}

pub fn exp_op(a: &Scalar) -> Scalar {
    apply(Exp, &[a])
}
