use crate::ops::arithmetic::{inv::inv_op, mul::mul_op};
use crate::scalar::Scalar;

/// `a / b`, recorded as `a * (1 / b)`.
pub fn div_op(a: &Scalar, b: &Scalar) -> Scalar {
    mul_op(a, &inv_op(b))
}
