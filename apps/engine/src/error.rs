//! Boundary error type for registry-level operations.
//!
//! Domain rejections ([`GameError`]) describe illegal play inside a live
//! match; `EngineError` additionally covers the cases where there is no
//! match to play in.

use thiserror::Error;
use uuid::Uuid;

use crate::errors::domain::GameError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("match {0} not found")]
    MatchNotFound(Uuid),
    #[error("participant {0} is not seated in this match")]
    UnknownParticipant(Uuid),
    #[error("invalid match setup: {detail}")]
    InvalidSetup { detail: String },
    #[error(transparent)]
    Game(#[from] GameError),
}

impl EngineError {
    pub fn invalid_setup(detail: impl Into<String>) -> Self {
        Self::InvalidSetup {
            detail: detail.into(),
        }
    }
}
