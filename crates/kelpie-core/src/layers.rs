//! Layer index construction.
//!
//! Layers are derived fresh per gesture from the nodes' layer ids and shadow-aware geometry,
//! then turned into contiguous x-ranges for drop targeting: adjacent layers meet at the midline
//! between their nearest extents, and the outer layers get symmetric padding so they keep a
//! bounded, non-empty capture region.

use serde::Serialize;

use crate::model::Node;

/// Horizontal padding applied to both sides of a lone layer.
const SINGLE_LAYER_PADDING: f64 = 10.0;

/// A vertical band of the layered layout, addressable by index = layer id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layer {
    pub left_x: f64,
    pub right_x: f64,
    /// Horizontal center of the layer's members, fixed when the layer is closed. Boundary
    /// reconciliation moves `left_x`/`right_x` but never `mid`.
    pub mid: f64,
    pub top_y: f64,
    pub bot_y: f64,
}

/// Builds the ordered layer index for one hierarchical level of the graph.
///
/// Nodes are grouped by `layer_id` (one layer per distinct id, ascending), with each node
/// contributing its [`Node::anchor`] bounds, so a node mid-drag still counts at its pre-drag
/// spot. All layers share the global top/bottom bounds of the input.
pub fn build_layers(nodes: &[Node]) -> Vec<Layer> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&Node> = nodes.iter().collect();
    sorted.sort_by_key(|n| n.layer_id);

    let mut layers: Vec<Layer> = Vec::new();
    let mut current = sorted[0].layer_id;
    let mut left_x = f64::MAX;
    let mut right_x = f64::MIN;
    let mut top_y = f64::MAX;
    let mut bot_y = f64::MIN;

    for node in &sorted {
        if node.layer_id != current {
            layers.push(close_layer(left_x, right_x));
            left_x = f64::MAX;
            right_x = f64::MIN;
            current = node.layer_id;
        }

        let anchor = node.anchor();
        left_x = left_x.min(anchor.x);
        right_x = right_x.max(anchor.x + node.size.width);
        top_y = top_y.min(anchor.y);
        bot_y = bot_y.max(anchor.y + node.size.height);
    }
    layers.push(close_layer(left_x, right_x));

    // Adjacent layers meet at the midline between their nearest extents.
    for i in 0..layers.len() - 1 {
        let mid = layers[i].right_x + (layers[i + 1].left_x - layers[i].right_x) / 2.0;
        layers[i].right_x = mid;
        layers[i + 1].left_x = mid;
    }

    if layers.len() == 1 {
        let only = &mut layers[0];
        only.left_x -= SINGLE_LAYER_PADDING;
        only.right_x += SINGLE_LAYER_PADDING;
    } else {
        let first = &mut layers[0];
        first.left_x = first.mid - (first.right_x - first.mid);

        // The reconciliation pass already moved the last layer's left bound to the shared
        // midline; mirror that distance to the right of `mid`.
        let last = layers.len() - 1;
        let last = &mut layers[last];
        last.right_x = last.mid + (last.mid - last.left_x);
    }

    for layer in &mut layers {
        layer.top_y = top_y;
        layer.bot_y = bot_y;
    }

    layers
}

fn close_layer(left_x: f64, right_x: f64) -> Layer {
    Layer {
        left_x,
        right_x,
        mid: left_x + (right_x - left_x) / 2.0,
        top_y: f64::MAX,
        bot_y: f64::MIN,
    }
}
