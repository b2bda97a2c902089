//! Player-submitted actions, one closed variant per action kind.
//!
//! Each variant carries exactly the fields that action needs; the envelope
//! is parsed and type-checked at the transport boundary, so nothing
//! loosely-typed ever reaches the state machine.

use serde::{Deserialize, Serialize};

use crate::domain::state::Seat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Draw the head of the deck into the pending slot.
    Draw,
    /// Discard the pending card as-is.
    ResolveDiscard,
    /// Swap the pending card into an own hand slot; the displaced rank
    /// goes to the discard top.
    ResolveSwap { slot: usize },
    /// Discard 2-4 own slots of equal rank, keeping only the pending card.
    ResolvePairClaim { slots: Vec<usize> },
    /// Privately look at a target slot (pending rank 7..=10).
    ResolvePeek { target: Seat, target_slot: usize },
    /// Blindly exchange one own slot's rank with a target slot's rank
    /// (pending rank 11..=12).
    ResolveBlindSwap {
        own_slot: usize,
        target: Seat,
        target_slot: usize,
    },
    /// Swap the discard top into an own slot, revealing that slot.
    TakeDiscard { slot: usize },
    /// Declare the final round ("Cabo").
    CallFinal,
    /// Give up the turn without moving any card. Synthesized by the
    /// external turn timer through the same entry point as real actions.
    SkipTurn,
    /// Spend one of the initial private peeks at an own slot.
    Peek { slot: usize },
}

impl Action {
    /// Stable wire name, used for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Draw => "draw",
            Action::ResolveDiscard => "resolve_discard",
            Action::ResolveSwap { .. } => "resolve_swap",
            Action::ResolvePairClaim { .. } => "resolve_pair_claim",
            Action::ResolvePeek { .. } => "resolve_peek",
            Action::ResolveBlindSwap { .. } => "resolve_blind_swap",
            Action::TakeDiscard { .. } => "take_discard",
            Action::CallFinal => "call_final",
            Action::SkipTurn => "skip_turn",
            Action::Peek { .. } => "peek",
        }
    }
}
