#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Server-authoritative match engine for Cabo, a turn-based
//! hidden-information card game for 2-4 participants.
//!
//! The engine is pure in-memory computation: transport, lobby formation,
//! and rendering live outside this crate and talk to it through
//! [`registry::MatchRegistry::apply`].

pub mod domain;
pub mod error;
pub mod errors;
pub mod registry;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::actions::Action;
pub use domain::cards::{Ability, Deck, Rank};
pub use domain::events::{MatchEvent, Notice, NoticeBody};
pub use domain::player_view::MatchSnapshot;
pub use error::EngineError;
pub use errors::GameError;
pub use registry::{ActionResult, MatchId, MatchRegistry, PlayerUpdate};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
