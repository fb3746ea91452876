// src/scalar/traits.rs

use crate::ops::arithmetic::{add::add_op, div::div_op, mul::mul_op, neg::neg_op, sub::sub_op};
use crate::scalar::Scalar;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

impl Clone for Scalar {
    fn clone(&self) -> Self {
        Scalar {
            data: Arc::clone(&self.data), // Clone the Arc, not the ScalarData
        }
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Scalar")
            .field("id", &guard.id)
            .field("value", &guard.value)
            .field("grad", &guard.grad)
            .field("requires_grad", &guard.requires_grad)
            .field(
                "op",
                &guard.history.as_ref().map(|history| history.function.name()),
            )
            .finish()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self.value())
    }
}

// `f64` operands are lifted to constants.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Scalar> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Scalar> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<&Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<f64> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(self, &Scalar::constant(rhs))
            }
        }

        impl $trait<f64> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(&self, &Scalar::constant(rhs))
            }
        }

        impl $trait<&Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op_fn(&Scalar::constant(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for &Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        neg_op(&self)
    }
}
