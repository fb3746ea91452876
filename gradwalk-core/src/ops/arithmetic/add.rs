use crate::autograd::Context;
use crate::error::AutodiffError;
use crate::ops::function::{apply, ScalarFunction};
use crate::scalar::Scalar;

/// `a + b`. Both inputs receive the incoming derivative unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

impl ScalarFunction for Add {
    fn name(&self) -> &'static str {
        "add"
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        inputs[0] + inputs[1]
    }

    fn backward(&self, _ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, AutodiffError> {
        Ok(vec![d_output, d_output])
    }
}

pub fn add_op(a: &Scalar, b: &Scalar) -> Scalar {
    apply(Add, &[a, b])
}
