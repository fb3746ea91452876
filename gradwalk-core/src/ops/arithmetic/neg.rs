use crate::autograd::Context;
use crate::error::AutodiffError;
use crate::ops::function::{apply, ScalarFunction};
use crate::scalar::Scalar;

/// `-a`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neg;

impl ScalarFunction for Neg {
    fn name(&self) -> &'static str {
        "neg"
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        -inputs[0]
    }

    fn backward(&self, _ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, AutodiffError> {
        Ok(vec![-d_output])
    }
}

pub fn neg_op(a: &Scalar) -> Scalar {
    apply(Neg, &[a])
}
