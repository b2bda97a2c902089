use crate::domain::actions::Action;
use crate::domain::player_view::snapshot_for;
use crate::domain::scoring::finalize_match;
use crate::domain::test_state_helpers::{make_match, rank};
use crate::domain::transition::apply_action;

#[test]
fn own_slots_carry_ranks_while_others_are_stripped() {
    let state = make_match(&[&[1, 2, 3, 4], &[5, 6, 7, 8]], &[9], &[0]);

    let view = snapshot_for(&state, 0);
    let own: Vec<_> = view.seats[0].slots.iter().map(|s| s.rank).collect();
    assert_eq!(
        own,
        vec![Some(rank(1)), Some(rank(2)), Some(rank(3)), Some(rank(4))]
    );
    assert!(view.seats[1].slots.iter().all(|s| s.rank.is_none()));

    // The other seat sees the mirror image.
    let view = snapshot_for(&state, 1);
    assert!(view.seats[0].slots.iter().all(|s| s.rank.is_none()));
    assert!(view.seats[1].slots.iter().all(|s| s.rank.is_some()));
}

#[test]
fn revealed_slots_are_visible_to_everyone() {
    let mut state = make_match(&[&[1, 2, 3, 4], &[5, 6, 7, 8]], &[9], &[0]);
    state.participants[1].hand[2].revealed = true;

    let view = snapshot_for(&state, 0);
    assert_eq!(view.seats[1].slots[2].rank, Some(rank(7)));
    assert!(view.seats[1].slots[2].revealed);
    // Neighboring slots stay hidden.
    assert_eq!(view.seats[1].slots[1].rank, None);
}

#[test]
fn pending_rank_is_owner_only_but_its_existence_is_public() {
    let mut state = make_match(&[&[1, 2, 3, 4], &[5, 6, 7, 8]], &[9], &[0]);
    apply_action(&mut state, 0, Action::Draw).unwrap();

    let owner = snapshot_for(&state, 0);
    assert_eq!(owner.pending_seat, Some(0));
    assert_eq!(owner.pending_rank, Some(rank(9)));

    let other = snapshot_for(&state, 1);
    assert_eq!(other.pending_seat, Some(0));
    assert_eq!(other.pending_rank, None);
}

#[test]
fn shared_piles_expose_sizes_and_top_card_only() {
    let state = make_match(&[&[1, 2], &[3, 4]], &[9, 10, 11], &[0, 5]);

    let view = snapshot_for(&state, 1);
    assert_eq!(view.deck_size, 3);
    assert_eq!(view.discard_size, 2);
    assert_eq!(view.discard_top, Some(rank(5)));
    assert_eq!(view.viewer, state.participants[1].id);
}

#[test]
fn final_call_and_outcome_are_public() {
    let mut state = make_match(&[&[1, 2, 3, 4], &[5, 6, 7, 8]], &[9], &[0]);
    apply_action(&mut state, 0, Action::CallFinal).unwrap();

    let view = snapshot_for(&state, 1);
    let fc = view.final_call.unwrap();
    assert_eq!(fc.caller, 0);
    assert_eq!(fc.remaining, 1);
    assert!(view.outcome.is_none());

    finalize_match(&mut state);
    for seat in 0..2 {
        let view = snapshot_for(&state, seat);
        let outcome = view.outcome.unwrap();
        assert_eq!(outcome.winner, 0);
        assert_eq!(outcome.totals, vec![10, 26]);
    }
}

#[test]
fn hidden_ranks_never_serialize() {
    let state = make_match(&[&[1, 2], &[3, 4]], &[9], &[0]);
    let view = snapshot_for(&state, 0);

    let json = serde_json::to_value(&view).unwrap();
    let other_slots = json["seats"][1]["slots"].as_array().unwrap();
    for slot in other_slots {
        assert!(slot.get("rank").is_none());
        assert_eq!(slot["revealed"], false);
    }
    // Own slots serialize their ranks as bare numbers.
    assert_eq!(json["seats"][0]["slots"][0]["rank"], 1);
    assert!(json.get("pending_rank").is_none());
}
