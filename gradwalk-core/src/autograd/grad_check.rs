use crate::error::AutodiffError;
use crate::scalar::Scalar;
use num_traits::Float;
use thiserror::Error;

/// Default step for [`central_difference`].
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(AutodiffError),
    #[error("Argument index {arg} is out of range for {len} values")]
    ArgOutOfRange { arg: usize, len: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    NumericalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<AutodiffError> for GradCheckError {
    fn from(err: AutodiffError) -> Self {
        GradCheckError::BackwardPassError(err)
    }
}

/// Tolerances used by [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckOptions {
    /// Finite-difference step.
    pub epsilon: f64,
    /// Accepted relative (and, near zero, absolute) difference.
    pub tolerance: f64,
}

impl Default for GradCheckOptions {
    fn default() -> Self {
        GradCheckOptions {
            epsilon: DEFAULT_EPSILON,
            tolerance: 1e-4,
        }
    }
}

/// Approximates the derivative of `f` w.r.t. argument `arg` at `vals`:
///
/// \\[ \\frac{f(\\ldots, x_{arg} + \\epsilon, \\ldots) - f(\\ldots, x_{arg} - \\epsilon, \\ldots)}{2\\epsilon} \\]
pub fn central_difference<T, F>(f: F, vals: &[T], arg: usize, epsilon: T) -> Result<T, GradCheckError>
where
    T: Float,
    F: Fn(&[T]) -> T,
{
    if arg >= vals.len() {
        return Err(GradCheckError::ArgOutOfRange {
            arg,
            len: vals.len(),
        });
    }
    let mut vals_plus = vals.to_vec();
    let mut vals_minus = vals.to_vec();
    vals_plus[arg] = vals_plus[arg] + epsilon;
    vals_minus[arg] = vals_minus[arg] - epsilon;

    let two = T::one() + T::one();
    Ok((f(&vals_plus) - f(&vals_minus)) / (two * epsilon))
}

/// Checks the back-propagated derivatives of `build` against [`central_difference`].
///
/// `build` receives one fresh leaf per entry of `vals` and must return the output.
/// It is also re-evaluated on constants to produce the numerical estimates. A leaf that
/// received no derivative counts as having derivative zero.
pub fn check_grad<F>(build: F, vals: &[f64], options: &GradCheckOptions) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar]) -> Scalar,
{
    let inputs: Vec<Scalar> = vals.iter().map(|&v| Scalar::new(v)).collect();
    let output = build(&inputs);
    if output.requires_grad() {
        output.backward()?;
    } else {
        log::warn!("check_grad: output does not depend on any input, expecting zero gradients");
    }

    let forward = |xs: &[f64]| {
        let constants: Vec<Scalar> = xs.iter().map(|&v| Scalar::constant(v)).collect();
        build(&constants).value()
    };

    for (input_index, input) in inputs.iter().enumerate() {
        let analytical_grad = input.grad().unwrap_or(0.0);
        let numerical_grad = central_difference(&forward, vals, input_index, options.epsilon)?;

        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                value: numerical_grad,
            });
        }

        let matches = approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = options.tolerance,
            max_relative = options.tolerance
        );
        log::debug!(
            "check_grad: input {} analytical={} numerical={}",
            input_index,
            analytical_grad,
            numerical_grad
        );
        if !matches {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
