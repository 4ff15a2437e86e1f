#![forbid(unsafe_code)]

//! Interactive layout constraints for layered diagrams.
//!
//! `kelpie` wraps the headless derivation core (`kelpie-core`, re-exported wholesale) with the
//! collaborator-facing surface of the feature: the wire payloads the layout service consumes
//! and the drag-gesture lifecycle that produces them.
//!
//! The crate deliberately stops at a typed channel. Rendering, pointer plumbing, and message
//! transport stay with the host; their only contract with this crate is "forward pointer
//! events, deliver notifications".

pub use kelpie_core::*;

pub mod error;
pub mod interaction;
pub mod protocol;

pub use error::{Error, Result};
pub use interaction::{ConstraintChannel, DragInteraction};
pub use protocol::{
    ConstraintNotification, DeleteConstraint, SetPositionConstraint, SetStaticConstraint,
};
