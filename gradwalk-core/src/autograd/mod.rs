//! # Autograd Module (`autograd`)
//!
//! Reverse-mode differentiation over a graph of [`Variable`]s.
//!
//! - [`topological_sort`] linearizes the non-constant ancestors of an output,
//!   consumer before producer.
//! - [`backpropagate`] walks that order once, summing per-node contributions, and
//!   deposits the totals into the leaves.
//! - [`Context`] is the forward-pass cache functions use to stash values for backward.
//! - [`grad_check`] compares analytical derivatives against finite differences.

pub mod backprop;
pub mod context;
pub mod grad_check;
pub mod graph;
pub mod variable;

pub use backprop::backpropagate;
pub use context::Context;
pub use graph::topological_sort;
pub use variable::{Variable, VariableId};
