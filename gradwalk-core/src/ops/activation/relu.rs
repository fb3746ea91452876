use crate::autograd::Context;
use crate::error::AutodiffError;
use crate::ops::function::{apply, ScalarFunction};
use crate::scalar::Scalar;

/// `max(x, 0)`. The derivative at exactly zero is taken as 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Relu;

impl ScalarFunction for Relu {
    fn name(&self) -> &'static str {
        "relu"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let x = inputs[0];
        ctx.save_for_backward(vec![x]);
        if x > 0.0 {
            x
        } else {
            0.0
        }
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, AutodiffError> {
        let [x] = ctx.saved::<1>(self.name())?;
        Ok(vec![if x > 0.0 { d_output } else { 0.0 }])
    }
}

pub fn relu_op(a: &Scalar) -> Scalar {
    apply(Relu, &[a])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_relu_forward() {
        assert_relative_eq!(relu_op(&Scalar::new(2.5)).value(), 2.5);
        assert_relative_eq!(relu_op(&Scalar::new(-2.5)).value(), 0.0);
    }

    #[test]
    fn test_relu_backward_masks_negative_inputs() {
        let pos = Scalar::new(1.5);
        let neg = Scalar::new(-1.5);
        let y = &relu_op(&pos) + &relu_op(&neg);
        y.backward().unwrap();
        assert_relative_eq!(pos.grad().unwrap(), 1.0);
        assert_relative_eq!(neg.grad().unwrap(), 0.0);
    }
}
