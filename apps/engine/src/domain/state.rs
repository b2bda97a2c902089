use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cards::{Deck, DiscardPile, Rank};

/// Index into the seat list; seat order is fixed at deal time.
pub type Seat = u8;

/// Phases of a live match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// The current participant may draw, take the discard top, call the
    /// final round, or skip.
    Draw,
    /// The current participant holds a freshly drawn card and must resolve
    /// it before the turn advances.
    AwaitingResolution,
}

/// One card position in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSlot {
    pub rank: Rank,
    /// Whether other participants' views may show the rank. The owner
    /// always receives their own ranks.
    pub revealed: bool,
}

impl HandSlot {
    pub fn hidden(rank: Rank) -> Self {
        Self {
            rank,
            revealed: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Participant {
    pub id: Uuid,
    pub name: String,
    pub hand: Vec<HandSlot>,
    pub peeks_remaining: u8,
}

/// A card drawn from the deck, privately visible to its owner only,
/// awaiting resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDraw {
    pub rank: Rank,
    pub owner: Seat,
}

/// Countdown armed when a participant declares the final round ("Cabo").
///
/// Every turn-ending action after the declaration decrements `remaining`;
/// the match finalizes the moment it reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalCall {
    pub caller: Seat,
    pub remaining: u8,
}

/// Terminal result; present exactly when the match is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: Seat,
    /// Sum of hand rank values, indexed by seat.
    pub totals: Vec<u32>,
}

/// Entire match container, sufficient for pure domain operations.
///
/// Exclusively owned by the room that created it for the lifetime of one
/// game; never persisted and never revived after finalization.
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Seats in deal order; stable for the match lifetime.
    pub participants: Vec<Participant>,
    pub deck: Deck,
    pub discard: DiscardPile,
    /// Seat whose turn it is.
    pub turn: Seat,
    pub phase: Phase,
    pub pending: Option<PendingDraw>,
    pub final_call: Option<FinalCall>,
    pub outcome: Option<MatchOutcome>,
}

impl MatchState {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn seat_of(&self, id: Uuid) -> Option<Seat> {
        self.participants
            .iter()
            .position(|p| p.id == id)
            .map(|i| i as Seat)
    }

    /// `turn = (turn + 1) mod N`, applied exactly once per turn-ending
    /// action.
    pub fn advance_turn(&mut self) {
        self.turn = ((usize::from(self.turn) + 1) % self.participant_count()) as Seat;
    }

    /// Total cards tracked by this match: deck + hands + discard + pending.
    /// Equals the full deck size at every reachable state after the deal.
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.discard.len()
            + self
                .participants
                .iter()
                .map(|p| p.hand.len())
                .sum::<usize>()
            + usize::from(self.pending.is_some())
    }
}
