use crate::ops::arithmetic::{add::add_op, neg::neg_op};
use crate::scalar::Scalar;

/// `a - b`, recorded as `a + (-b)`.
pub fn sub_op(a: &Scalar, b: &Scalar) -> Scalar {
    add_op(a, &neg_op(b))
}
