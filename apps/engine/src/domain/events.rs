//! Public match events and private notices emitted by the state machine.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cards::{Ability, Rank};
use crate::domain::state::Seat;

/// Publicly visible description of an applied action.
///
/// Closed replacement for a free-form "last action" bag: downstream
/// consumers match on the kind instead of structurally inspecting loose
/// fields. Ranks appear only where they are public anyway (cards that
/// landed on the discard pile); privately drawn or hidden cards never do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    Drew { seat: Seat },
    Discarded { seat: Seat, rank: Rank },
    Swapped { seat: Seat, slot: usize },
    PairClaimSucceeded { seat: Seat, rank: Rank, removed: usize },
    PairClaimFailed { seat: Seat },
    AbilityUsed { seat: Seat, rank: Rank },
    TookDiscard { seat: Seat, rank: Rank, slot: usize },
    FinalCalled { seat: Seat },
    TurnSkipped { seat: Seat },
    PeekSpent { seat: Seat },
    Finished { winner: Seat },
}

/// A private payload addressed to exactly one participant. Never broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub recipient: Uuid,
    pub body: NoticeBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NoticeBody {
    /// The freshly drawn card, offered to the drawer for resolution.
    DrawOffer { rank: Rank },
    /// Result of an initial peek at one of the recipient's own slots.
    PeekResult { slot: usize, rank: Rank },
    /// Result of a 7-8 peek or 9-10 spy on a target slot.
    AbilityPeek {
        ability: Ability,
        target: Seat,
        target_slot: usize,
        rank: Rank,
    },
}
