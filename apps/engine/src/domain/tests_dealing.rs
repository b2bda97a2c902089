use uuid::Uuid;

use crate::domain::dealing::{deal, full_deck, shuffled_deck_from_seed};
use crate::domain::rules::{DEAL_HAND_SIZE, DECK_SIZE, INITIAL_PEEKS};
use crate::domain::state::Phase;
use crate::error::EngineError;

fn roster(n: usize) -> Vec<(Uuid, String)> {
    (0..n)
        .map(|i| (Uuid::new_v4(), format!("player-{i}")))
        .collect()
}

#[test]
fn seeded_shuffle_is_deterministic() {
    let a = shuffled_deck_from_seed(12345);
    let b = shuffled_deck_from_seed(12345);
    let mut a = a;
    let mut b = b;
    for _ in 0..DECK_SIZE {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn different_seeds_differ() {
    let mut a = shuffled_deck_from_seed(12345);
    let mut b = shuffled_deck_from_seed(54321);
    let mut same = true;
    for _ in 0..DECK_SIZE {
        if a.draw() != b.draw() {
            same = false;
        }
    }
    assert!(!same);
}

#[test]
fn shuffle_preserves_composition() {
    let mut deck = shuffled_deck_from_seed(42);
    let mut counts = [0usize; 14];
    while let Some(rank) = deck.draw() {
        counts[rank.get() as usize] += 1;
    }
    let template = full_deck();
    for value in 0..=13u8 {
        let expected = template.iter().filter(|r| r.get() == value).count();
        assert_eq!(counts[value as usize], expected, "rank {value}");
    }
}

#[test]
fn deal_gives_four_hidden_cards_and_flips_the_opener() {
    for players in 2..=4usize {
        let state = deal(roster(players), shuffled_deck_from_seed(9)).unwrap();

        assert_eq!(state.participant_count(), players);
        assert_eq!(state.phase, Phase::Draw);
        assert_eq!(state.turn, 0);
        assert_eq!(state.pending, None);
        assert_eq!(state.final_call, None);
        assert!(!state.is_over());

        for p in &state.participants {
            assert_eq!(p.hand.len(), DEAL_HAND_SIZE);
            assert!(p.hand.iter().all(|slot| !slot.revealed));
            assert_eq!(p.peeks_remaining, INITIAL_PEEKS);
        }
        assert_eq!(state.discard.len(), 1);
        assert_eq!(
            state.deck.len(),
            DECK_SIZE - players * DEAL_HAND_SIZE - 1
        );
        // Conservation from the very first state.
        assert_eq!(state.card_count(), DECK_SIZE);
    }
}

#[test]
fn deal_rejects_bad_rosters() {
    assert!(matches!(
        deal(roster(1), shuffled_deck_from_seed(1)),
        Err(EngineError::InvalidSetup { .. })
    ));
    assert!(matches!(
        deal(roster(5), shuffled_deck_from_seed(1)),
        Err(EngineError::InvalidSetup { .. })
    ));

    let mut duped = roster(2);
    duped.push((duped[0].0, "copycat".into()));
    assert!(matches!(
        deal(duped, shuffled_deck_from_seed(1)),
        Err(EngineError::InvalidSetup { .. })
    ));
}

#[test]
fn deal_rejects_a_short_deck() {
    use crate::domain::cards::{Deck, Rank};
    let short = Deck::from_cards((0..8).map(|_| Rank::new(1).unwrap()));
    assert!(matches!(
        deal(roster(2), short),
        Err(EngineError::InvalidSetup { .. })
    ));
}
