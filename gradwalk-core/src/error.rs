use crate::autograd::VariableId;
use thiserror::Error;

/// Custom error type for the gradwalk autodiff core.
///
/// The graph-level variants (`ConstantInOrder`, `MissingGradient`, `UnknownParent`,
/// `ParentAlreadyExpanded`, `GradientCountMismatch`) are contract violations: they mean
/// a `Variable` implementation upstream is broken, not that the input data is bad. They
/// stop the backward pass immediately and are never retried.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum AutodiffError {
    #[error("Contract violation: constant variable {id} appeared in the linearized order")]
    ConstantInOrder { id: VariableId },

    #[error("Contract violation: no gradient was routed to variable {id} before it was needed")]
    MissingGradient { id: VariableId },

    #[error("Contract violation: chain rule of variable {node} returned producer {parent}, which is not part of the graph")]
    UnknownParent {
        node: VariableId,
        parent: VariableId,
    },

    #[error("Contract violation: chain rule of variable {node} routed gradient to {parent}, which was already expanded")]
    ParentAlreadyExpanded {
        node: VariableId,
        parent: VariableId,
    },

    #[error("Backward of '{operation}' returned {actual} gradients, but the node has {expected} inputs")]
    GradientCountMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Expected {expected} saved values in the forward context of '{operation}', got {actual}")]
    MissingSavedValues {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Operation requires the variable to require grad, but it doesn't.")]
    RequiresGradNotMet,

    #[error("Internal error: {0}")]
    InternalError(String),
}
