//! Domain layer: pure match logic, no I/O and no locking.

pub mod actions;
pub mod cards;
pub mod dealing;
pub mod events;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod transition;


#[cfg(test)]
mod tests_dealing;
#[cfg(test)]
mod tests_player_view;

// Re-exports for ergonomics
pub use actions::Action;
pub use cards::{Ability, Deck, DiscardPile, Rank};
pub use dealing::{deal, shuffled_deck, shuffled_deck_from_seed};
pub use events::{MatchEvent, Notice, NoticeBody};
pub use player_view::{snapshot_for, MatchSnapshot};
pub use state::{HandSlot, MatchState, Participant, Phase, Seat};
pub use transition::{apply_action, ActionOutcome};
