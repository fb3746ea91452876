use crate::autograd::variable::{Variable, VariableId};
use std::collections::HashSet;

/// One pending node of the depth-first walk: the node itself, its producers and the
/// position of the next producer to look at.
struct Frame<V> {
    node: V,
    parents: Vec<V>,
    cursor: usize,
}

enum Step<V> {
    Descend { from: VariableId, into: V },
    Finish,
}

/// Computes the order in which the backward pass must visit the graph.
///
/// Starting from `variable` (the right-most node), returns every non-constant node
/// reachable through producer edges, each exactly once, with `variable` first and every
/// node placed before all of its non-constant producers.
///
/// Constant nodes are left out, and the walk does not descend through them: their
/// ancestors are irrelevant to this differentiation even when they are not constant
/// themselves. Leaves end the descent even if they list parents. Self-edges are skipped.
///
/// The walk uses an explicit stack, so deep graphs do not grow the call stack. A node is
/// marked visited before its producers are explored; a cycle among non-constant nodes
/// therefore terminates, but yields an order that may be locally inconsistent.
pub fn topological_sort<V: Variable>(variable: &V) -> Vec<V> {
    let mut visited: HashSet<VariableId> = HashSet::new();
    let mut sorted_list: Vec<V> = Vec::new();
    let mut stack: Vec<Frame<V>> = Vec::new();

    explore(variable.clone(), &mut visited, &mut sorted_list, &mut stack);

    loop {
        let step = match stack.last_mut() {
            None => break,
            Some(frame) if frame.cursor < frame.parents.len() => {
                let into = frame.parents[frame.cursor].clone();
                frame.cursor += 1;
                Step::Descend {
                    from: frame.node.unique_id(),
                    into,
                }
            }
            Some(_) => Step::Finish,
        };

        match step {
            Step::Descend { from, into } => {
                let into_id = into.unique_id();
                if into_id == from || visited.contains(&into_id) {
                    continue;
                }
                explore(into, &mut visited, &mut sorted_list, &mut stack);
            }
            Step::Finish => {
                if let Some(frame) = stack.pop() {
                    sorted_list.push(frame.node);
                }
            }
        }
    }

    sorted_list.reverse();
    log::debug!(
        "topological_sort: {} non-constant nodes reachable from {}",
        sorted_list.len(),
        variable.unique_id()
    );
    sorted_list
}

fn explore<V: Variable>(
    node: V,
    visited: &mut HashSet<VariableId>,
    sorted_list: &mut Vec<V>,
    stack: &mut Vec<Frame<V>>,
) {
    visited.insert(node.unique_id());
    if node.is_constant() {
        log::trace!("topological_sort: pruning constant {}", node.unique_id());
        return;
    }
    if node.is_leaf() {
        sorted_list.push(node);
        return;
    }
    let parents = node.parents();
    stack.push(Frame {
        node,
        parents,
        cursor: 0,
    });
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
