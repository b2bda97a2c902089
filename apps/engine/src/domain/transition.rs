//! The match state machine: validates and applies one action at a time.
//!
//! [`apply_action`] is the only mutator of a [`MatchState`]. Every action
//! either fully applies or is rejected with the state untouched; validation
//! therefore completes before the first mutation, including for actions
//! that cascade into finalization.

use tracing::info;

use crate::domain::actions::Action;
use crate::domain::cards::Ability;
use crate::domain::events::{MatchEvent, Notice, NoticeBody};
use crate::domain::rules::{MAX_CLAIM_SLOTS, MIN_CLAIM_SLOTS};
use crate::domain::scoring::finalize_match;
use crate::domain::state::{FinalCall, HandSlot, MatchState, PendingDraw, Phase, Seat};
use crate::errors::domain::{GameError, ResourceKind};

/// What one successful action produced, for the transport layer to fan out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Public narration, in occurrence order. Finalization appends
    /// [`MatchEvent::Finished`] after the triggering action's own event.
    pub events: Vec<MatchEvent>,
    /// Private payloads, each addressed to a single recipient.
    pub notices: Vec<Notice>,
}

impl ActionOutcome {
    fn event(event: MatchEvent) -> Self {
        Self {
            events: vec![event],
            notices: Vec::new(),
        }
    }
}

/// Validate and apply one action from `actor` against `state`.
pub fn apply_action(
    state: &mut MatchState,
    actor: Seat,
    action: Action,
) -> Result<ActionOutcome, GameError> {
    if state.is_over() {
        return Err(GameError::MatchFinished);
    }
    if usize::from(actor) >= state.participant_count() {
        return Err(GameError::out_of_range(format!("no seat {actor}")));
    }

    match action {
        Action::Draw => draw(state, actor),
        Action::ResolveDiscard => resolve_discard(state, actor),
        Action::ResolveSwap { slot } => resolve_swap(state, actor, slot),
        Action::ResolvePairClaim { slots } => resolve_pair_claim(state, actor, &slots),
        Action::ResolvePeek {
            target,
            target_slot,
        } => resolve_peek(state, actor, target, target_slot),
        Action::ResolveBlindSwap {
            own_slot,
            target,
            target_slot,
        } => resolve_blind_swap(state, actor, own_slot, target, target_slot),
        Action::TakeDiscard { slot } => take_discard(state, actor, slot),
        Action::CallFinal => call_final(state, actor),
        Action::SkipTurn => skip_turn(state, actor),
        Action::Peek { slot } => peek(state, actor, slot),
    }
}

fn require_phase(state: &MatchState, phase: Phase, action: &'static str) -> Result<(), GameError> {
    if state.phase != phase {
        return Err(GameError::invalid_phase(action));
    }
    Ok(())
}

fn require_turn(state: &MatchState, actor: Seat) -> Result<(), GameError> {
    if state.turn != actor {
        return Err(GameError::NotYourTurn);
    }
    Ok(())
}

/// The pending card, which must exist and belong to `actor`.
fn require_pending(state: &MatchState, actor: Seat) -> Result<PendingDraw, GameError> {
    let pending = state.pending.ok_or(GameError::NoPendingCard)?;
    if pending.owner != actor {
        return Err(GameError::NotYourTurn);
    }
    Ok(pending)
}

fn require_seat(state: &MatchState, seat: Seat) -> Result<(), GameError> {
    if usize::from(seat) >= state.participant_count() {
        return Err(GameError::out_of_range(format!("no seat {seat}")));
    }
    Ok(())
}

fn require_slot(state: &MatchState, seat: Seat, slot: usize) -> Result<(), GameError> {
    let len = state.participants[usize::from(seat)].hand.len();
    if slot >= len {
        return Err(GameError::out_of_range(format!(
            "slot {slot} outside hand of {len}"
        )));
    }
    Ok(())
}

/// Advance the turn and service an armed countdown. Called exactly once per
/// turn-ending action; finalizes the match when the countdown hits zero.
fn end_turn(state: &mut MatchState, events: &mut Vec<MatchEvent>) {
    state.advance_turn();
    let Some(call) = state.final_call.as_mut() else {
        return;
    };
    call.remaining = call.remaining.saturating_sub(1);
    if call.remaining == 0 {
        finalize_match(state);
        if let Some(outcome) = &state.outcome {
            info!(winner = outcome.winner, "match finalized");
            events.push(MatchEvent::Finished {
                winner: outcome.winner,
            });
        }
    }
}

fn draw(state: &mut MatchState, actor: Seat) -> Result<ActionOutcome, GameError> {
    require_phase(state, Phase::Draw, "draw")?;
    require_turn(state, actor)?;
    if state.pending.is_some() {
        return Err(GameError::UnexpectedPendingCard);
    }
    let rank = state
        .deck
        .draw()
        .ok_or(GameError::EmptyResource(ResourceKind::Deck))?;

    state.pending = Some(PendingDraw { rank, owner: actor });
    state.phase = Phase::AwaitingResolution;

    Ok(ActionOutcome {
        events: vec![MatchEvent::Drew { seat: actor }],
        notices: vec![Notice {
            recipient: state.participants[usize::from(actor)].id,
            body: NoticeBody::DrawOffer { rank },
        }],
    })
}

fn resolve_discard(state: &mut MatchState, actor: Seat) -> Result<ActionOutcome, GameError> {
    require_phase(state, Phase::AwaitingResolution, "resolve_discard")?;
    let pending = require_pending(state, actor)?;

    state.pending = None;
    state.discard.push(pending.rank);
    state.phase = Phase::Draw;

    let mut outcome = ActionOutcome::event(MatchEvent::Discarded {
        seat: actor,
        rank: pending.rank,
    });
    end_turn(state, &mut outcome.events);
    Ok(outcome)
}

fn resolve_swap(state: &mut MatchState, actor: Seat, slot: usize) -> Result<ActionOutcome, GameError> {
    require_phase(state, Phase::AwaitingResolution, "resolve_swap")?;
    let pending = require_pending(state, actor)?;
    require_slot(state, actor, slot)?;

    state.pending = None;
    let slot_ref = &mut state.participants[usize::from(actor)].hand[slot];
    // Visibility is not forced by a swap; only take_discard reveals.
    let displaced = std::mem::replace(&mut slot_ref.rank, pending.rank);
    state.discard.push(displaced);
    state.phase = Phase::Draw;

    let mut outcome = ActionOutcome::event(MatchEvent::Swapped { seat: actor, slot });
    end_turn(state, &mut outcome.events);
    Ok(outcome)
}

fn resolve_pair_claim(
    state: &mut MatchState,
    actor: Seat,
    slots: &[usize],
) -> Result<ActionOutcome, GameError> {
    require_phase(state, Phase::AwaitingResolution, "resolve_pair_claim")?;
    let pending = require_pending(state, actor)?;

    // Structural failures reject the whole action; only a rank mismatch
    // below reaches the penalty path.
    if !(MIN_CLAIM_SLOTS..=MAX_CLAIM_SLOTS).contains(&slots.len()) {
        return Err(GameError::out_of_range(format!(
            "pair claim proposes {} slots, needs {MIN_CLAIM_SLOTS}-{MAX_CLAIM_SLOTS}",
            slots.len()
        )));
    }
    for (i, &slot) in slots.iter().enumerate() {
        require_slot(state, actor, slot)?;
        if slots[..i].contains(&slot) {
            return Err(GameError::out_of_range(format!("duplicate slot {slot}")));
        }
    }

    state.pending = None;
    state.phase = Phase::Draw;

    let hand = &state.participants[usize::from(actor)].hand;
    let claimed = hand[slots[0]].rank;
    let matched = slots.iter().all(|&i| hand[i].rank == claimed);

    let event = if matched {
        // Remove from highest index to lowest so the remaining indices
        // stay stable while removing.
        let mut ordered = slots.to_vec();
        ordered.sort_unstable();
        let hand = &mut state.participants[usize::from(actor)].hand;
        for &i in ordered.iter().rev() {
            hand.remove(i);
        }
        hand.push(HandSlot::hidden(pending.rank));
        for _ in &ordered {
            state.discard.push(claimed);
        }
        MatchEvent::PairClaimSucceeded {
            seat: actor,
            rank: claimed,
            removed: ordered.len(),
        }
    } else {
        // Failed claim: the drawn card is kept as an extra hidden slot.
        // This penalty is deliberate; nothing is removed.
        let hand = &mut state.participants[usize::from(actor)].hand;
        hand.push(HandSlot::hidden(pending.rank));
        MatchEvent::PairClaimFailed { seat: actor }
    };

    let mut outcome = ActionOutcome::event(event);
    end_turn(state, &mut outcome.events);
    Ok(outcome)
}

fn resolve_peek(
    state: &mut MatchState,
    actor: Seat,
    target: Seat,
    target_slot: usize,
) -> Result<ActionOutcome, GameError> {
    require_phase(state, Phase::AwaitingResolution, "resolve_peek")?;
    let pending = require_pending(state, actor)?;
    let ability = match pending.rank.ability() {
        Some(ability @ (Ability::Peek | Ability::Spy)) => ability,
        _ => return Err(GameError::AbilityNotApplicable(pending.rank)),
    };
    require_seat(state, target)?;
    require_slot(state, target, target_slot)?;

    let seen = state.participants[usize::from(target)].hand[target_slot].rank;
    state.pending = None;
    state.discard.push(pending.rank);
    state.phase = Phase::Draw;

    let mut outcome = ActionOutcome {
        events: vec![MatchEvent::AbilityUsed {
            seat: actor,
            rank: pending.rank,
        }],
        notices: vec![Notice {
            recipient: state.participants[usize::from(actor)].id,
            body: NoticeBody::AbilityPeek {
                ability,
                target,
                target_slot,
                rank: seen,
            },
        }],
    };
    end_turn(state, &mut outcome.events);
    Ok(outcome)
}

fn resolve_blind_swap(
    state: &mut MatchState,
    actor: Seat,
    own_slot: usize,
    target: Seat,
    target_slot: usize,
) -> Result<ActionOutcome, GameError> {
    require_phase(state, Phase::AwaitingResolution, "resolve_blind_swap")?;
    let pending = require_pending(state, actor)?;
    if pending.rank.ability() != Some(Ability::BlindSwap) {
        return Err(GameError::AbilityNotApplicable(pending.rank));
    }
    require_seat(state, target)?;
    require_slot(state, actor, own_slot)?;
    require_slot(state, target, target_slot)?;

    // Ranks move, visibility flags stay with their slots.
    let own_rank = state.participants[usize::from(actor)].hand[own_slot].rank;
    let target_rank = state.participants[usize::from(target)].hand[target_slot].rank;
    state.participants[usize::from(actor)].hand[own_slot].rank = target_rank;
    state.participants[usize::from(target)].hand[target_slot].rank = own_rank;

    state.pending = None;
    state.discard.push(pending.rank);
    state.phase = Phase::Draw;

    let mut outcome = ActionOutcome::event(MatchEvent::AbilityUsed {
        seat: actor,
        rank: pending.rank,
    });
    end_turn(state, &mut outcome.events);
    Ok(outcome)
}

fn take_discard(state: &mut MatchState, actor: Seat, slot: usize) -> Result<ActionOutcome, GameError> {
    require_phase(state, Phase::Draw, "take_discard")?;
    require_turn(state, actor)?;
    if state.pending.is_some() {
        return Err(GameError::UnexpectedPendingCard);
    }
    require_slot(state, actor, slot)?;
    let taken = state
        .discard
        .take_top()
        .ok_or(GameError::EmptyResource(ResourceKind::Discard))?;

    let slot_ref = &mut state.participants[usize::from(actor)].hand[slot];
    let displaced = std::mem::replace(&mut slot_ref.rank, taken);
    // Everyone saw the discard top land in this slot.
    slot_ref.revealed = true;
    state.discard.push(displaced);

    let mut outcome = ActionOutcome::event(MatchEvent::TookDiscard {
        seat: actor,
        rank: taken,
        slot,
    });
    end_turn(state, &mut outcome.events);
    Ok(outcome)
}

fn call_final(state: &mut MatchState, actor: Seat) -> Result<ActionOutcome, GameError> {
    require_phase(state, Phase::Draw, "call_final")?;
    require_turn(state, actor)?;
    if state.pending.is_some() {
        return Err(GameError::UnexpectedPendingCard);
    }
    if state.final_call.is_some() {
        return Err(GameError::invalid_phase("final round already called"));
    }

    state.final_call = Some(FinalCall {
        caller: actor,
        remaining: (state.participant_count() - 1) as u8,
    });
    info!(caller = actor, "final round called");
    // The arming advance does not tick the countdown; every other
    // participant still gets exactly one turn.
    state.advance_turn();

    Ok(ActionOutcome::event(MatchEvent::FinalCalled { seat: actor }))
}

fn skip_turn(state: &mut MatchState, actor: Seat) -> Result<ActionOutcome, GameError> {
    require_phase(state, Phase::Draw, "skip_turn")?;
    require_turn(state, actor)?;
    // A pending card never survives into the Draw phase; drop any stale
    // reference without moving cards.
    state.pending = None;

    let mut outcome = ActionOutcome::event(MatchEvent::TurnSkipped { seat: actor });
    end_turn(state, &mut outcome.events);
    Ok(outcome)
}

fn peek(state: &mut MatchState, actor: Seat, slot: usize) -> Result<ActionOutcome, GameError> {
    // Legal off-turn and in either phase while the match is live; does not
    // consume a turn and never ticks the countdown.
    let participant = &state.participants[usize::from(actor)];
    if participant.peeks_remaining == 0 {
        return Err(GameError::PeeksExhausted);
    }
    require_slot(state, actor, slot)?;

    let participant = &mut state.participants[usize::from(actor)];
    participant.peeks_remaining -= 1;
    let rank = participant.hand[slot].rank;

    Ok(ActionOutcome {
        events: vec![MatchEvent::PeekSpent { seat: actor }],
        notices: vec![Notice {
            recipient: participant.id,
            body: NoticeBody::PeekResult { slot, rank },
        }],
    })
}
