//! Domain-level error type for match actions.
//!
//! This error type is transport-agnostic. Every rejected action leaves the
//! match unmodified; the transport layer delivers the error to the
//! originating participant only and never notifies anyone else.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::cards::Rank;

/// Card piles that may be empty when an action needs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Deck,
    Discard,
}

/// Central domain error type.
///
/// There is no fatal category here: any unexpected condition degrades to a
/// rejection with the match left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Action is not legal in the current phase.
    InvalidPhase(String),
    /// Action is reserved for the current-turn participant (or, for draw
    /// resolution, the owner of the pending card).
    NotYourTurn,
    /// A hand-slot or seat index fell outside its bounds.
    OutOfRange(String),
    /// The deck or discard pile was empty when a card was required.
    EmptyResource(ResourceKind),
    /// A draw resolution was submitted with no pending card to resolve.
    NoPendingCard,
    /// The action requires the pending slot to be empty, but it is not.
    UnexpectedPendingCard,
    /// The pending card's rank is outside the band the resolution needs.
    AbilityNotApplicable(Rank),
    /// Both initial peeks have already been spent.
    PeeksExhausted,
    /// The match has finalized; no further actions are accepted.
    MatchFinished,
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GameError::InvalidPhase(d) => write!(f, "action not legal in current phase: {d}"),
            GameError::NotYourTurn => write!(f, "not your turn"),
            GameError::OutOfRange(d) => write!(f, "index out of range: {d}"),
            GameError::EmptyResource(ResourceKind::Deck) => write!(f, "deck is empty"),
            GameError::EmptyResource(ResourceKind::Discard) => write!(f, "discard pile is empty"),
            GameError::NoPendingCard => write!(f, "no drawn card to resolve"),
            GameError::UnexpectedPendingCard => write!(f, "resolve your drawn card first"),
            GameError::AbilityNotApplicable(rank) => {
                write!(f, "rank {rank} grants no such ability")
            }
            GameError::PeeksExhausted => write!(f, "no peeks remaining"),
            GameError::MatchFinished => write!(f, "match is already over"),
        }
    }
}

impl Error for GameError {}

impl GameError {
    pub fn invalid_phase(detail: impl Into<String>) -> Self {
        Self::InvalidPhase(detail.into())
    }

    pub fn out_of_range(detail: impl Into<String>) -> Self {
        Self::OutOfRange(detail.into())
    }

    /// Stable machine-readable code for transport payloads and logs.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::InvalidPhase(_) => "invalid_phase",
            GameError::NotYourTurn => "not_your_turn",
            GameError::OutOfRange(_) => "out_of_range",
            GameError::EmptyResource(ResourceKind::Deck) => "deck_empty",
            GameError::EmptyResource(ResourceKind::Discard) => "discard_empty",
            GameError::NoPendingCard => "no_pending_card",
            GameError::UnexpectedPendingCard => "unexpected_pending_card",
            GameError::AbilityNotApplicable(_) => "ability_not_applicable",
            GameError::PeeksExhausted => "peeks_exhausted",
            GameError::MatchFinished => "match_finished",
        }
    }
}
