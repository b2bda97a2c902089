//! Deck construction, shuffling, and the initial deal.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::domain::cards::{Deck, DiscardPile, Rank};
use crate::domain::rules::{DEAL_HAND_SIZE, INITIAL_PEEKS, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::{HandSlot, MatchState, Participant, Phase};
use crate::error::EngineError;

/// Full 54-card Cabo deck in canonical order: two 0s, four each of 1..=12,
/// two 13s.
pub fn full_deck() -> Vec<Rank> {
    let mut deck = Vec::with_capacity(crate::domain::rules::DECK_SIZE);
    for value in 0u8..=13 {
        let copies = if value == 0 || value == 13 { 2 } else { 4 };
        for _ in 0..copies {
            // 0..=13 is always a valid rank
            if let Some(rank) = Rank::new(value) {
                deck.push(rank);
            }
        }
    }
    deck
}

/// Uniformly shuffled full deck using the provided RNG.
pub fn shuffled_deck(rng: &mut impl Rng) -> Deck {
    let mut cards = full_deck();
    cards.shuffle(rng);
    Deck::from_cards(cards)
}

/// Deterministically shuffled full deck (tests, replays).
pub fn shuffled_deck_from_seed(seed: u64) -> Deck {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffled_deck(&mut rng)
}

/// Create a match from an ordered roster and a shuffled deck.
///
/// Deals [`DEAL_HAND_SIZE`] hidden cards per seat from the deck head, then
/// flips one card to seed the discard pile. Seat order is fixed here for
/// the match lifetime. Initial phase is `Draw` with seat 0 to act.
pub fn deal(roster: Vec<(Uuid, String)>, mut deck: Deck) -> Result<MatchState, EngineError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&roster.len()) {
        return Err(EngineError::invalid_setup(format!(
            "need {MIN_PLAYERS}-{MAX_PLAYERS} participants, got {}",
            roster.len()
        )));
    }
    for (i, (id, _)) in roster.iter().enumerate() {
        if roster[..i].iter().any(|(other, _)| other == id) {
            return Err(EngineError::invalid_setup(format!(
                "duplicate participant id {id}"
            )));
        }
    }
    // Hands plus the flipped opener must fit in the supplied deck.
    let needed = roster.len() * DEAL_HAND_SIZE + 1;
    if deck.len() < needed {
        return Err(EngineError::invalid_setup(format!(
            "deck has {} cards, deal needs {needed}",
            deck.len()
        )));
    }

    let mut participants = Vec::with_capacity(roster.len());
    for (id, name) in roster {
        let mut hand = Vec::with_capacity(DEAL_HAND_SIZE);
        for _ in 0..DEAL_HAND_SIZE {
            let rank = deck
                .draw()
                .ok_or_else(|| EngineError::invalid_setup("deck exhausted during deal"))?;
            hand.push(HandSlot::hidden(rank));
        }
        participants.push(Participant {
            id,
            name,
            hand,
            peeks_remaining: INITIAL_PEEKS,
        });
    }

    let mut discard = DiscardPile::default();
    let opener = deck
        .draw()
        .ok_or_else(|| EngineError::invalid_setup("deck exhausted before the opener"))?;
    discard.push(opener);

    Ok(MatchState {
        participants,
        deck,
        discard,
        turn: 0,
        phase: Phase::Draw,
        pending: None,
        final_call: None,
        outcome: None,
    })
}
