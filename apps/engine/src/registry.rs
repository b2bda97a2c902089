//! Concurrent registry of live matches and the transport-facing entry point.
//!
//! Lookup across matches is lock-free; mutation within one match is
//! serialized by that match's own mutex, because the state machine is not
//! internally synchronized. The registry is owned by the hosting transport
//! component and passed around by handle rather than living in a
//! process-wide singleton.

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::actions::Action;
use crate::domain::cards::Deck;
use crate::domain::dealing::deal;
use crate::domain::events::{MatchEvent, Notice};
use crate::domain::player_view::{snapshot_for, MatchSnapshot};
use crate::domain::state::Seat;
use crate::domain::transition::apply_action;
use crate::error::EngineError;
use crate::errors::domain::GameError;

pub type MatchId = Uuid;

/// One participant's refreshed view after a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerUpdate {
    pub recipient: Uuid,
    pub snapshot: MatchSnapshot,
}

/// Everything the transport layer needs to fan out after one `apply` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    /// One redacted snapshot per participant; empty when `error` is set.
    pub updates: Vec<PlayerUpdate>,
    /// Public narration of what happened, for every participant.
    pub events: Vec<MatchEvent>,
    /// Private payloads, each addressed to a single recipient.
    pub notices: Vec<Notice>,
    /// Rejection to surface to the originating participant only.
    pub error: Option<GameError>,
}

impl ActionResult {
    fn rejected(error: GameError) -> Self {
        Self {
            updates: Vec::new(),
            events: Vec::new(),
            notices: Vec::new(),
            error: Some(error),
        }
    }
}

/// Shared table of live matches, keyed by match id.
#[derive(Default)]
pub struct MatchRegistry {
    matches: DashMap<MatchId, Mutex<crate::domain::state::MatchState>>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a match from an ordered roster and a shuffled deck.
    ///
    /// The shuffle is the caller's responsibility (see
    /// [`crate::domain::dealing::shuffled_deck`]); the registry only
    /// requires a uniformly permuted full deck.
    pub fn create(&self, roster: Vec<(Uuid, String)>, deck: Deck) -> Result<MatchId, EngineError> {
        let players = roster.len();
        let state = deal(roster, deck)?;
        let id = Uuid::new_v4();
        self.matches.insert(id, Mutex::new(state));
        info!(%id, players, "match created");
        Ok(id)
    }

    /// Route one participant action into its match.
    ///
    /// Domain rejections come back inside the [`ActionResult`] (they are
    /// addressed to the originator); `Err` is reserved for routing
    /// failures where there is no match or seat to reject from.
    pub fn apply(
        &self,
        match_id: MatchId,
        participant: Uuid,
        action: Action,
    ) -> Result<ActionResult, EngineError> {
        let entry = self
            .matches
            .get(&match_id)
            .ok_or(EngineError::MatchNotFound(match_id))?;
        let mut state = entry.lock();

        let seat = state
            .seat_of(participant)
            .ok_or(EngineError::UnknownParticipant(participant))?;
        debug!(%match_id, seat, kind = action.kind(), "applying action");

        match apply_action(&mut state, seat, action) {
            Ok(outcome) => {
                let updates = state
                    .participants
                    .iter()
                    .enumerate()
                    .map(|(viewer, p)| PlayerUpdate {
                        recipient: p.id,
                        snapshot: snapshot_for(&state, viewer as Seat),
                    })
                    .collect();
                Ok(ActionResult {
                    updates,
                    events: outcome.events,
                    notices: outcome.notices,
                    error: None,
                })
            }
            Err(err) => {
                debug!(%match_id, seat, code = err.code(), "action rejected");
                Ok(ActionResult::rejected(err))
            }
        }
    }

    /// Drop a match (room reset or process teardown). Returns whether a
    /// match was removed.
    pub fn remove(&self, match_id: MatchId) -> bool {
        self.matches.remove(&match_id).is_some()
    }

    pub fn contains(&self, match_id: MatchId) -> bool {
        self.matches.contains_key(&match_id)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
