use crate::error::AutodiffError;
use std::fmt;
use std::ops::Add;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VARIABLE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a node in the computation graph.
///
/// Two handles denote the same node if and only if their ids are equal. Ids are drawn
/// from a process-wide counter and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(u64);

impl VariableId {
    /// Allocates a new id, distinct from every id handed out before.
    pub fn fresh() -> Self {
        VariableId(NEXT_VARIABLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value of the id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The capability set every vertex of the computation graph must provide.
///
/// Implementors are expected to be cheap handles (an `Arc` or `Rc` around shared
/// state): `parents` and `chain_rule` hand out owned clones, and
/// `accumulate_derivative` mutates through `&self`.
///
/// Edges point from a consumer to its producers: `parents` answers "which inputs was
/// I computed from".
pub trait Variable: Clone {
    /// Gradient value flowing through the graph. Contributions from several
    /// consumers are combined with `+`.
    type Grad: Clone + Add<Output = Self::Grad>;

    /// Identity of this node. Used as the only equality and lookup key.
    fn unique_id(&self) -> VariableId;

    /// True for original inputs, whose gradient is the result of the pass.
    fn is_leaf(&self) -> bool;

    /// True for nodes excluded from differentiation entirely.
    fn is_constant(&self) -> bool;

    /// Producers of this node, in the order they were consumed. May be empty, and may
    /// contain duplicates or the node itself.
    fn parents(&self) -> Vec<Self>;

    /// Applies the local derivative to `d_output`.
    ///
    /// Returns one `(producer, contribution)` pair per producer edge, in the same order
    /// as [`parents`](Variable::parents).
    fn chain_rule(&self, d_output: &Self::Grad) -> Result<Vec<(Self, Self::Grad)>, AutodiffError>;

    /// Adds `value` into the externally visible gradient of this node.
    ///
    /// Called only on leaves, once per backward pass, with the fully summed value.
    fn accumulate_derivative(&self, value: Self::Grad) -> Result<(), AutodiffError>;
}
