//! Error handling for the Cabo match engine.

pub mod domain;

pub use domain::{GameError, ResourceKind};
