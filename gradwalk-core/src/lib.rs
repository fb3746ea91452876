pub mod autograd;
pub mod error;
pub mod ops;
pub mod scalar;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export the entry points so they are reachable as `gradwalk_core::backpropagate` etc.
pub use autograd::{backpropagate, topological_sort, Context, Variable, VariableId};
pub use error::AutodiffError;
pub use scalar::Scalar;
// `central_difference` is bounded on `num_traits::Float`.
pub use num_traits;
