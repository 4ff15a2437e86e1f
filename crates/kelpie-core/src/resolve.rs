//! Reconciling a raw drop location against pre-existing user constraints.
//!
//! A constraint set by an earlier gesture can push a node past its natural layer or position.
//! That shifts where a later drop has to land to mean "right after that node", so the raw
//! candidate from the locators is adjusted against the constraint values recorded on the
//! snapshot before anything is sent to the layout engine.

use serde::Serialize;

use crate::locate::{layer_of_node, nodes_of_layer, position_in_layer};
use crate::model::Node;

/// Combined layer+position constraint for a drag that crossed a layer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaticConstraint {
    pub layer: usize,
    pub adjusted_layer: usize,
    pub position: usize,
    pub adjusted_position: usize,
}

/// Position-only constraint for a reorder within the node's current layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionConstraint {
    pub position: usize,
    pub adjusted_position: usize,
}

/// Outcome of a drag release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Constraint {
    Static(StaticConstraint),
    Position(PositionConstraint),
    /// The node landed back in its original slot; the caller should ask the engine to refresh
    /// the layout instead of pinning anything.
    Unchanged,
}

/// Shifts `candidate` when a node at or left of it was boosted past its natural layer by an
/// earlier constraint.
///
/// The shift follows the node with the maximum constraint value among those boosted nodes. A
/// chain of earlier constraints can have moved the apparent ordering by an arbitrary cumulative
/// amount, so looking only at the immediately adjacent layer is not enough. Ties keep the first
/// such node in snapshot order.
pub fn adjust_layer(nodes: &[Node], candidate: usize) -> usize {
    let mut best: Option<(usize, usize)> = None;
    for node in nodes {
        if node.layer_id > candidate {
            continue;
        }
        let Some(cons) = node.layer_constraint else {
            continue;
        };
        if cons <= node.layer_id {
            continue;
        }
        if best.is_none_or(|(max_cons, _)| cons > max_cons) {
            best = Some((cons, node.layer_id));
        }
    }

    match best {
        Some((max_cons, layer_id)) => max_cons + (candidate - layer_id),
        None => candidate,
    }
}

/// Shifts `candidate` when the node directly above it was pushed down past its natural index by
/// an earlier position constraint.
///
/// `layer_nodes` must be in y-order, as left behind by [`position_in_layer`]. When the target
/// already lived in this layer and the upper neighbor's position id equals the candidate, the
/// target slots in at the neighbor's constraint value itself; otherwise just after it.
pub fn adjust_position(candidate: usize, already_in_layer: bool, layer_nodes: &[&Node]) -> usize {
    if candidate == 0 {
        return candidate;
    }
    debug_assert!(
        candidate <= layer_nodes.len(),
        "position candidate outside the layer"
    );

    let upper_index = candidate - 1;
    let Some(upper) = layer_nodes.get(upper_index) else {
        return candidate;
    };

    match upper.position_constraint {
        Some(cons) if cons > upper_index => {
            if already_in_layer && upper.pos_id == candidate {
                cons
            } else {
                cons + 1
            }
        }
        _ => candidate,
    }
}

/// Decides which constraint, if any, a drag release produces.
///
/// A cross-layer move always carries a combined [`StaticConstraint`]: the engine has to learn
/// the layer and the position atomically. A same-layer reorder carries only the position. A
/// drop into the original slot produces [`Constraint::Unchanged`].
pub fn resolve(
    target: &Node,
    nodes: &[Node],
    candidate_layer: usize,
    candidate_position: usize,
    already_in_layer: bool,
    layer_nodes: &[&Node],
) -> Constraint {
    if target.layer_id != candidate_layer {
        Constraint::Static(StaticConstraint {
            layer: candidate_layer,
            adjusted_layer: adjust_layer(nodes, candidate_layer),
            position: candidate_position,
            adjusted_position: adjust_position(candidate_position, already_in_layer, layer_nodes),
        })
    } else if target.pos_id != candidate_position {
        Constraint::Position(PositionConstraint {
            position: candidate_position,
            adjusted_position: adjust_position(candidate_position, already_in_layer, layer_nodes),
        })
    } else {
        Constraint::Unchanged
    }
}

/// Full pointer-up pipeline: locate the drop layer and position, then resolve the constraint.
pub fn derive_constraint(target: &Node, nodes: &[Node]) -> Constraint {
    let candidate_layer = layer_of_node(target, nodes);
    let mut layer_nodes = nodes_of_layer(candidate_layer, nodes);
    let already_in_layer = layer_nodes.iter().any(|n| n.id == target.id);
    let candidate_position = position_in_layer(&mut layer_nodes, target);

    resolve(
        target,
        nodes,
        candidate_layer,
        candidate_position,
        already_in_layer,
        &layer_nodes,
    )
}
