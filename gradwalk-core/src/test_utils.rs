use crate::autograd::{Variable, VariableId};
use crate::error::AutodiffError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Hand-wired graph node for exercising the linearizer and accumulator directly.
///
/// Each producer edge carries a multiplier: `chain_rule(d)` returns `d * multiplier`
/// for every edge. Deposits and expansions are recorded for later assertions.
#[derive(Clone)]
pub(crate) struct MockNode {
    inner: Rc<MockInner>,
}

struct MockInner {
    id: VariableId,
    name: &'static str,
    leaf: bool,
    constant: bool,
    /// Reports non-constant on the first query and constant afterwards.
    flaky_constant: bool,
    constant_queries: Cell<usize>,
    /// `chain_rule` returns no pairs at all.
    drops_gradient: Cell<bool>,
    /// Extra pair appended by `chain_rule`, pointing outside `parents`.
    stray: RefCell<Option<MockNode>>,
    parents: RefCell<Vec<(MockNode, f64)>>,
    deposits: RefCell<Vec<f64>>,
    expansions: Cell<usize>,
}

impl MockNode {
    fn build(name: &'static str, leaf: bool, constant: bool, flaky_constant: bool) -> Self {
        MockNode {
            inner: Rc::new(MockInner {
                id: VariableId::fresh(),
                name,
                leaf,
                constant,
                flaky_constant,
                constant_queries: Cell::new(0),
                drops_gradient: Cell::new(false),
                stray: RefCell::new(None),
                parents: RefCell::new(Vec::new()),
                deposits: RefCell::new(Vec::new()),
                expansions: Cell::new(0),
            }),
        }
    }

    pub(crate) fn leaf(name: &'static str) -> Self {
        Self::build(name, true, false, false)
    }

    pub(crate) fn constant(name: &'static str) -> Self {
        Self::build(name, false, true, false)
    }

    /// Non-leaf node computed from `parents`.
    pub(crate) fn op(name: &'static str, parents: &[(&MockNode, f64)]) -> Self {
        let node = Self::build(name, false, false, false);
        for (parent, multiplier) in parents {
            node.push_parent(parent, *multiplier);
        }
        node
    }

    pub(crate) fn flaky_constant(name: &'static str, parents: &[(&MockNode, f64)]) -> Self {
        let node = Self::build(name, false, false, true);
        for (parent, multiplier) in parents {
            node.push_parent(parent, *multiplier);
        }
        node
    }

    /// Adds an edge after construction, so self-edges and cycles can be wired.
    pub(crate) fn push_parent(&self, parent: &MockNode, multiplier: f64) {
        self.inner
            .parents
            .borrow_mut()
            .push((parent.clone(), multiplier));
    }

    pub(crate) fn set_drops_gradient(&self) {
        self.inner.drops_gradient.set(true);
    }

    pub(crate) fn set_stray(&self, stray: &MockNode) {
        *self.inner.stray.borrow_mut() = Some(stray.clone());
    }

    pub(crate) fn deposits(&self) -> Vec<f64> {
        self.inner.deposits.borrow().clone()
    }

    pub(crate) fn expansions(&self) -> usize {
        self.inner.expansions.get()
    }

    pub(crate) fn name(&self) -> &'static str {
        self.inner.name
    }
}

/// Names of `nodes`, in order.
pub(crate) fn names(nodes: &[MockNode]) -> Vec<&'static str> {
    nodes.iter().map(MockNode::name).collect()
}

impl Variable for MockNode {
    type Grad = f64;

    fn unique_id(&self) -> VariableId {
        self.inner.id
    }

    fn is_leaf(&self) -> bool {
        self.inner.leaf
    }

    fn is_constant(&self) -> bool {
        if self.inner.flaky_constant {
            let queries = self.inner.constant_queries.get() + 1;
            self.inner.constant_queries.set(queries);
            return queries > 1;
        }
        self.inner.constant
    }

    fn parents(&self) -> Vec<MockNode> {
        self.inner
            .parents
            .borrow()
            .iter()
            .map(|(parent, _)| parent.clone())
            .collect()
    }

    fn chain_rule(&self, d_output: &f64) -> Result<Vec<(MockNode, f64)>, AutodiffError> {
        self.inner.expansions.set(self.inner.expansions.get() + 1);
        if self.inner.drops_gradient.get() {
            return Ok(Vec::new());
        }
        let mut pairs: Vec<(MockNode, f64)> = self
            .inner
            .parents
            .borrow()
            .iter()
            .map(|(parent, multiplier)| (parent.clone(), d_output * multiplier))
            .collect();
        if let Some(stray) = self.inner.stray.borrow().as_ref() {
            pairs.push((stray.clone(), *d_output));
        }
        Ok(pairs)
    }

    fn accumulate_derivative(&self, value: f64) -> Result<(), AutodiffError> {
        self.inner.deposits.borrow_mut().push(value);
        Ok(())
    }
}
