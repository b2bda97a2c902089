//! Per-participant redacted views of a match.
//!
//! The same match produces a different snapshot for each recipient: hidden
//! ranks and the pending card are stripped for everyone but their owner.
//! These are the documents the transport layer serializes into
//! `game_update` payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cards::Rank;
use crate::domain::state::{MatchState, Phase, Seat};

/// What one viewer may know about a single hand slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    /// Present for the viewer's own slots and for slots revealed to all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
    pub revealed: bool,
}

/// One seat as redacted for a specific viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub seat: Seat,
    pub id: Uuid,
    pub name: String,
    pub slots: Vec<SlotView>,
    pub peeks_remaining: u8,
}

/// Final-call status, public to all participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalCallView {
    pub caller: Seat,
    pub remaining: u8,
}

/// Terminal result, public to all participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeView {
    pub winner: Seat,
    pub totals: Vec<u32>,
}

/// Snapshot of a match as seen by one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub viewer: Uuid,
    pub seats: Vec<SeatView>,
    pub deck_size: usize,
    pub discard_top: Option<Rank>,
    pub discard_size: usize,
    pub turn: Seat,
    pub phase: Phase,
    /// Seat holding an unresolved drawn card, if any. Public knowledge.
    pub pending_seat: Option<Seat>,
    /// The pending rank; present only in the owner's snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_rank: Option<Rank>,
    pub final_call: Option<FinalCallView>,
    pub outcome: Option<OutcomeView>,
}

/// Produce the snapshot of `state` visible to the `viewer` seat.
pub fn snapshot_for(state: &MatchState, viewer: Seat) -> MatchSnapshot {
    let seats = state
        .participants
        .iter()
        .enumerate()
        .map(|(seat, p)| {
            let own = seat == usize::from(viewer);
            let slots = p
                .hand
                .iter()
                .map(|slot| SlotView {
                    rank: (own || slot.revealed).then_some(slot.rank),
                    revealed: slot.revealed,
                })
                .collect();
            SeatView {
                seat: seat as Seat,
                id: p.id,
                name: p.name.clone(),
                slots,
                peeks_remaining: p.peeks_remaining,
            }
        })
        .collect();

    let pending_seat = state.pending.map(|p| p.owner);
    let pending_rank = state
        .pending
        .filter(|p| p.owner == viewer)
        .map(|p| p.rank);

    MatchSnapshot {
        viewer: state.participants[usize::from(viewer)].id,
        seats,
        deck_size: state.deck.len(),
        discard_top: state.discard.top(),
        discard_size: state.discard.len(),
        turn: state.turn,
        phase: state.phase,
        pending_seat,
        pending_rank,
        final_call: state.final_call.map(|fc| FinalCallView {
            caller: fc.caller,
            remaining: fc.remaining,
        }),
        outcome: state.outcome.as_ref().map(|o| OutcomeView {
            winner: o.winner,
            totals: o.totals.clone(),
        }),
    }
}
