#![forbid(unsafe_code)]

//! Headless layer/position constraint derivation for interactive layered graph layouts.
//!
//! Given a snapshot of sibling nodes and the node the user dragged, this crate computes which
//! layer band and in-layer slot the node was dropped into and reconciles that against
//! constraints earlier gestures have already pinned. The result is the minimal constraint to
//! hand to an external layout engine, or nothing when the node landed back where it started.
//!
//! The crate is pure and synchronous: no I/O, no state between gestures, one O(n log n) pass
//! over the sibling count per drag release.

pub mod layers;
pub mod locate;
pub mod model;
pub mod resolve;

pub use layers::{Layer, build_layers};
pub use locate::{
    any_selected, layer_of_node, layer_of_selected, nodes_of_layer, position_in_layer,
};
pub use model::{Node, Point, Size};
pub use resolve::{
    Constraint, PositionConstraint, StaticConstraint, adjust_layer, adjust_position,
    derive_constraint, resolve,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
