//! Drag gesture lifecycle.
//!
//! The pointer-listener half of the interactive layout feature: capture a shadow on pointer
//! down, derive and publish the constraint on pointer up. The rendering layer owns the node
//! snapshots and forwards pointer events; the outbound side is a typed channel the caller
//! injects at construction.

use kelpie_core::{Constraint, Node, derive_constraint};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::protocol::{ConstraintNotification, SetPositionConstraint, SetStaticConstraint};

/// Outbound, fire-and-forget channel for constraint notifications.
///
/// Delivery and ordering are the transport's problem; implementations must not block.
pub trait ConstraintChannel {
    fn send(&mut self, notification: ConstraintNotification);
}

impl<F: FnMut(ConstraintNotification)> ConstraintChannel for F {
    fn send(&mut self, notification: ConstraintNotification) {
        self(notification)
    }
}

/// Tracks one pointer-interaction stream over the diagram identified by `uri`.
///
/// Gestures are strictly sequential in a single pointer stream, so one mutable instance per
/// diagram suffices; nothing is retained between gestures beyond the `dragged` marker.
#[derive(Debug)]
pub struct DragInteraction<C> {
    uri: String,
    channel: C,
    dragged: bool,
}

impl<C: ConstraintChannel> DragInteraction<C> {
    pub fn new(uri: impl Into<String>, channel: C) -> Self {
        Self {
            uri: uri.into(),
            channel,
            dragged: false,
        }
    }

    /// Captures the pre-drag position of the grabbed node.
    ///
    /// Only nodes participating in interactive layout get a shadow; grabbing anything else is
    /// a plain selection gesture.
    pub fn pointer_down(&mut self, target_id: &str, nodes: &mut [Node]) -> Result<()> {
        self.dragged = false;
        let target = find_node_mut(nodes, target_id)?;
        if target.interactive_layout {
            target.shadow = Some(target.position);
            trace!(node = target_id, "captured drag shadow");
        }
        Ok(())
    }

    /// Marks that the pointer actually moved. A release without movement is a click and
    /// derives nothing.
    pub fn pointer_move(&mut self) {
        self.dragged = true;
    }

    /// Processes a drag release: derives the constraint for the drop location, publishes it
    /// (or a refresh when nothing changed), and clears the target's shadow.
    pub fn pointer_up(&mut self, target_id: &str, nodes: &mut [Node]) -> Result<()> {
        let dragged = std::mem::replace(&mut self.dragged, false);
        let index = find_node(nodes, target_id)?;

        if dragged {
            // Derive while the shadow is still in place: layer geometry must reflect the
            // pre-drag layout the engine knows about.
            let target = nodes[index].clone();
            let constraint = derive_constraint(&target, nodes);
            let notification = self.notification_for(&target, constraint);
            debug!(
                node = target_id,
                method = notification.method(),
                "publishing constraint"
            );
            self.channel.send(notification);
        }

        nodes[index].shadow = None;
        Ok(())
    }

    fn notification_for(&self, target: &Node, constraint: Constraint) -> ConstraintNotification {
        match constraint {
            Constraint::Static(c) => ConstraintNotification::SetStatic(SetStaticConstraint {
                uri: self.uri.clone(),
                node_id: target.id.clone(),
                layer: c.layer,
                adjusted_layer: c.adjusted_layer,
                position: c.position,
                adjusted_position: c.adjusted_position,
            }),
            Constraint::Position(c) => {
                ConstraintNotification::SetPosition(SetPositionConstraint {
                    uri: self.uri.clone(),
                    node_id: target.id.clone(),
                    position: c.position,
                    adjusted_position: c.adjusted_position,
                })
            }
            Constraint::Unchanged => ConstraintNotification::RefreshLayout {
                uri: self.uri.clone(),
            },
        }
    }
}

fn find_node(nodes: &[Node], id: &str) -> Result<usize> {
    nodes
        .iter()
        .position(|n| n.id == id)
        .ok_or_else(|| Error::UnknownNode { id: id.to_string() })
}

fn find_node_mut<'a>(nodes: &'a mut [Node], id: &str) -> Result<&'a mut Node> {
    nodes
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or_else(|| Error::UnknownNode { id: id.to_string() })
}
