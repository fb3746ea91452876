//! # Scalar Operations Module (`ops`)
//!
//! Differentiable functions over [`Scalar`](crate::scalar::Scalar) values.
//!
//! - Each function is a unit struct implementing [`ScalarFunction`]: a forward rule
//!   that may save values into a [`Context`](crate::autograd::Context), and a backward
//!   rule that turns the incoming derivative into one contribution per input.
//! - Each function also has a `xxx_op` free function that applies it through
//!   [`apply`], which decides whether the result carries history.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, inv.
//! - [`math_elem`]: ln, exp.
//! - [`activation`]: sigmoid, relu.

pub mod activation;
pub mod arithmetic;
pub mod function;
pub mod math_elem;

pub use function::{apply, ScalarFunction};
