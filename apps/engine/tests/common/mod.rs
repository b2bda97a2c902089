#![allow(dead_code)]

// tests/common/mod.rs
use cabo_engine::MatchSnapshot;
use uuid::Uuid;

// Logging is auto-installed for every test binary that declares this module.
#[ctor::ctor]
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Fresh ids and names for an `n`-seat roster.
pub fn roster(n: usize) -> Vec<(Uuid, String)> {
    (0..n)
        .map(|i| (Uuid::new_v4(), format!("player-{i}")))
        .collect()
}

/// Cards accounted for by one snapshot: both shared piles, every slot of
/// every seat, and the pending card if one exists. Equals the full deck
/// size in every snapshot of a well-formed match.
pub fn snapshot_card_total(snapshot: &MatchSnapshot) -> usize {
    snapshot.deck_size
        + snapshot.discard_size
        + snapshot
            .seats
            .iter()
            .map(|seat| seat.slots.len())
            .sum::<usize>()
        + usize::from(snapshot.pending_seat.is_some())
}
