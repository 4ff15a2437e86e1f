//! Locating a node's layer and in-layer position.

use crate::layers::build_layers;
use crate::model::Node;

/// Index of the layer `node` currently falls into, judged by its live horizontal center against
/// the layer bands built from `nodes`.
///
/// A center right of every band means the node moved past the last layer. That opens a new
/// trailing layer (`layers.len()`), unless the dragged node is the sole member of the current
/// last layer: then it stays where it is instead of chasing a phantom layer of its own making.
pub fn layer_of_node(node: &Node, nodes: &[Node]) -> usize {
    let layers = build_layers(nodes);
    let cx = node.center_x();

    for (i, layer) in layers.iter().enumerate() {
        if cx < layer.right_x {
            return i;
        }
    }

    if !layers.is_empty() {
        let last = nodes_of_layer(layers.len() - 1, nodes);
        if last.len() == 1 && last[0].selected {
            return layers.len() - 1;
        }
    }

    layers.len()
}

/// Nodes the engine currently assigns to `layer`, in snapshot order.
pub fn nodes_of_layer(layer: usize, nodes: &[Node]) -> Vec<&Node> {
    nodes.iter().filter(|n| n.layer_id == layer).collect()
}

/// Ordinal position of `target` among `layer_nodes`, ordered by live y coordinate.
///
/// Sorts `layer_nodes` in place; the constraint resolver relies on seeing the same y-order when
/// it inspects the upper neighbor. A `target` that is already a member keeps its sorted index
/// as-is, so y-ties cannot reorder it.
pub fn position_in_layer(layer_nodes: &mut [&Node], target: &Node) -> usize {
    layer_nodes.sort_by(|a, b| a.position.y.total_cmp(&b.position.y));

    if let Some(index) = layer_nodes.iter().position(|n| n.id == target.id) {
        return index;
    }

    for (i, node) in layer_nodes.iter().enumerate() {
        if target.position.y < node.position.y {
            return i;
        }
    }
    layer_nodes.len()
}

/// Layer of the selected node, or `None` when nothing in `nodes` is selected.
pub fn layer_of_selected(nodes: &[Node]) -> Option<usize> {
    nodes
        .iter()
        .find(|n| n.selected)
        .map(|n| layer_of_node(n, nodes))
}

/// Whether any node of the sibling set is selected.
pub fn any_selected(nodes: &[Node]) -> bool {
    nodes.iter().any(|n| n.selected)
}
