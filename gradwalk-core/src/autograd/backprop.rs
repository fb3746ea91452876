use crate::autograd::graph::topological_sort;
use crate::autograd::variable::{Variable, VariableId};
use crate::error::AutodiffError;
use std::collections::HashMap;

/// Runs backpropagation from `variable`, seeding it with `deriv`.
///
/// Every leaf reachable from `variable` through non-constant nodes receives exactly one
/// call to [`Variable::accumulate_derivative`], carrying the sum of all contributions
/// that reached it. Constants never receive or forward a gradient.
///
/// # Errors
/// Returns a contract-violation error if the linearized order contains a constant, if a
/// node is reached without any gradient routed to it, or if a chain rule names a
/// producer outside the graph or one that was already expanded (only possible when
/// the graph has a cycle). The pass stops at the first violation, before any leaf
/// is written.
pub fn backpropagate<V: Variable>(variable: &V, deriv: V::Grad) -> Result<(), AutodiffError> {
    let order = topological_sort(variable);

    let positions: HashMap<VariableId, usize> = order
        .iter()
        .enumerate()
        .map(|(position, node)| (node.unique_id(), position))
        .collect();
    let mut grads: Vec<Option<V::Grad>> = vec![None; order.len()];

    if let Some(node) = order.iter().find(|node| node.is_constant()) {
        return Err(AutodiffError::ConstantInOrder {
            id: node.unique_id(),
        });
    }

    match positions.get(&variable.unique_id()) {
        Some(&position) => grads[position] = Some(deriv),
        // A constant output has nothing to differentiate.
        None => {
            log::debug!(
                "backpropagate: output {} is constant, nothing to do",
                variable.unique_id()
            );
            return Ok(());
        }
    }

    let mut leaves: Vec<usize> = Vec::new();
    for (position, node) in order.iter().enumerate() {
        if node.is_leaf() {
            leaves.push(position);
            continue;
        }

        let node_id = node.unique_id();
        let d_output = grads[position]
            .take()
            .ok_or(AutodiffError::MissingGradient { id: node_id })?;
        log::trace!("backpropagate: expanding {}", node_id);

        for (parent, contribution) in node.chain_rule(&d_output)? {
            let parent_id = parent.unique_id();
            if parent.is_constant() {
                log::trace!("backpropagate: dropping contribution to constant {}", parent_id);
                continue;
            }
            if parent_id == node_id {
                continue;
            }
            let &slot = positions
                .get(&parent_id)
                .ok_or(AutodiffError::UnknownParent {
                    node: node_id,
                    parent: parent_id,
                })?;
            if slot < position && !order[slot].is_leaf() {
                return Err(AutodiffError::ParentAlreadyExpanded {
                    node: node_id,
                    parent: parent_id,
                });
            }
            grads[slot] = Some(match grads[slot].take() {
                Some(existing) => existing + contribution,
                None => contribution,
            });
        }
    }

    log::debug!(
        "backpropagate: {} nodes expanded, depositing into {} leaves",
        order.len() - leaves.len(),
        leaves.len()
    );

    // Check every leaf first so a violation leaves all leaves untouched.
    let mut deposits = Vec::with_capacity(leaves.len());
    for position in leaves {
        let node = &order[position];
        let grad = grads[position]
            .take()
            .ok_or(AutodiffError::MissingGradient {
                id: node.unique_id(),
            })?;
        deposits.push((node, grad));
    }
    for (node, grad) in deposits {
        node.accumulate_derivative(grad)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "backprop_test.rs"]
mod tests;
