//! Wire payloads for the external constraint channel.
//!
//! Constraints are fire-and-forget notifications to the layout service that owns the diagram
//! model; nothing here is retained locally. Field names serialize in camelCase to match the
//! service's JSON surface.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Combined layer+position constraint, sent when a drag crossed a layer boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStaticConstraint {
    pub uri: String,
    pub node_id: String,
    pub layer: usize,
    pub adjusted_layer: usize,
    pub position: usize,
    pub adjusted_position: usize,
}

/// Position-only constraint, sent when a drag reordered a node within its layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPositionConstraint {
    pub uri: String,
    pub node_id: String,
    pub position: usize,
    pub adjusted_position: usize,
}

/// Clears a previously pinned constraint. Part of the protocol surface for collaborators; the
/// gesture layer itself never emits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConstraint {
    pub uri: String,
    pub node_id: String,
}

/// A single outbound notification to the layout service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintNotification {
    SetStatic(SetStaticConstraint),
    SetPosition(SetPositionConstraint),
    DeleteStatic(DeleteConstraint),
    /// Ask the service to re-run layout without pinning anything (snap back).
    RefreshLayout { uri: String },
}

impl ConstraintNotification {
    /// Notification method the payload travels under.
    pub fn method(&self) -> &'static str {
        match self {
            Self::SetStatic(_) => "constraints/setStaticConstraint",
            Self::SetPosition(_) => "constraints/setPositionConstraint",
            Self::DeleteStatic(_) => "constraints/deleteStaticConstraint",
            Self::RefreshLayout { .. } => "constraints/refreshLayout",
        }
    }

    /// JSON payload for the notification. The refresh signal carries the bare uri string, not
    /// an object.
    pub fn payload(&self) -> Value {
        let value = match self {
            Self::SetStatic(c) => serde_json::to_value(c),
            Self::SetPosition(c) => serde_json::to_value(c),
            Self::DeleteStatic(c) => serde_json::to_value(c),
            Self::RefreshLayout { uri } => return Value::String(uri.clone()),
        };
        value.unwrap_or(Value::Null)
    }
}
