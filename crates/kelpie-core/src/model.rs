//! Node snapshot and geometry primitives.
//!
//! These are intentionally lightweight and `Clone`-friendly: the interactive layer receives a
//! fresh snapshot per gesture and holds nothing between gestures.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// One sibling node of a layered layout, as reported by the rendering layer.
///
/// `layer_id` and `pos_id` are the layout engine's last applied assignment and may lag the live
/// geometry while a drag is in flight. Queries that describe the layout the engine knows about
/// must go through [`Node::anchor`] rather than reading `position` directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub position: Point,
    pub size: Size,
    /// Index of the layer the engine currently assigns this node to.
    pub layer_id: usize,
    /// Ordinal position within that layer, ordered by vertical coordinate.
    pub pos_id: usize,
    /// User-pinned layer, if any.
    pub layer_constraint: Option<usize>,
    /// User-pinned in-layer position, if any.
    pub position_constraint: Option<usize>,
    pub selected: bool,
    /// Nodes outside interactive layout never get a shadow and never produce constraints.
    pub interactive_layout: bool,
    /// Pre-drag position snapshot, set on the dragged node while a gesture is in flight.
    pub shadow: Option<Point>,
}

impl Node {
    /// Position the layout engine knows about: the shadow while a drag is in flight, the live
    /// position otherwise.
    pub fn anchor(&self) -> Point {
        self.shadow.unwrap_or(self.position)
    }

    /// Horizontal center of the node at its live position.
    pub fn center_x(&self) -> f64 {
        self.position.x + self.size.width / 2.0
    }
}
