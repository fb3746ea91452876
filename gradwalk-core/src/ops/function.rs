use crate::autograd::Context;
use crate::error::AutodiffError;
use crate::scalar::{Scalar, ScalarHistory};
use std::fmt::Debug;
use std::sync::Arc;

/// Forward and backward rules of a differentiable scalar function.
///
/// The trait requires `Debug + Send + Sync` because the function is stored behind an
/// `Arc` in the history of every value it produces.
pub trait ScalarFunction: Debug + Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Computes the output from the input values, saving into `ctx` whatever
    /// [`backward`](ScalarFunction::backward) will need.
    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64;

    /// Returns the derivative contribution for each input, in input order, given the
    /// derivative `d_output` flowing into the output.
    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, AutodiffError>;
}

/// Applies `function` to `inputs`.
///
/// The result carries history only if at least one input requires grad; otherwise the
/// forward runs with a `no_grad` context and the result is a constant.
pub fn apply<F>(function: F, inputs: &[&Scalar]) -> Scalar
where
    F: ScalarFunction + 'static,
{
    let values: Vec<f64> = inputs.iter().map(|input| input.value()).collect();
    let need_grad = inputs.iter().any(|input| input.requires_grad());

    let mut ctx = Context::new(!need_grad);
    let value = function.forward(&mut ctx, &values);

    let history = need_grad.then(|| ScalarHistory {
        function: Arc::new(function),
        ctx,
        inputs: inputs.iter().map(|input| (*input).clone()).collect(),
    });
    Scalar::from_history(value, history)
}
