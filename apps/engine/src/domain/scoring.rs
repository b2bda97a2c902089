//! Finalization and scoring.

use crate::domain::state::{MatchOutcome, MatchState, Seat};

/// Sum hand values per seat and mark the match finished.
///
/// The winner is the strictly lowest total; on equal totals the earliest
/// seat wins. No-op if the match is already over; an outcome is never
/// recomputed.
pub fn finalize_match(state: &mut MatchState) {
    if state.is_over() {
        return;
    }

    let totals: Vec<u32> = state
        .participants
        .iter()
        .map(|p| p.hand.iter().map(|slot| slot.rank.value()).sum())
        .collect();

    let mut winner: Seat = 0;
    for (seat, &total) in totals.iter().enumerate().skip(1) {
        // Strict comparison keeps the earliest seat on ties.
        if total < totals[usize::from(winner)] {
            winner = seat as Seat;
        }
    }

    state.outcome = Some(MatchOutcome { winner, totals });
}
