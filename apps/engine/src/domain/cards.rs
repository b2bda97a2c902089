//! Card rank and pile types.
//!
//! Cabo cards have no suits: a card is fully described by its rank, which
//! doubles as its scoring value.

use std::collections::VecDeque;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

pub const MAX_RANK: u8 = 13;

/// A card rank in `0..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rank(u8);

impl Rank {
    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_RANK).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Scoring value at finalization. Value equals rank.
    pub fn value(self) -> u32 {
        u32::from(self.0)
    }

    /// The special effect a freshly drawn card of this rank may trigger.
    pub fn ability(self) -> Option<Ability> {
        match self.0 {
            7..=8 => Some(Ability::Peek),
            9..=10 => Some(Ability::Spy),
            11..=12 => Some(Ability::BlindSwap),
            _ => None,
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Ability bands: 7-8 and 9-10 both grant a private look at a target slot
/// (kept as distinct flavors for client narration), 11-12 grants a blind
/// two-slot rank exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Peek,
    Spy,
    BlindSwap,
}

/// Face-down draw pile. Cards only ever leave from the head; the order is
/// fixed at shuffle time and never changed afterwards.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: VecDeque<Rank>,
}

impl Deck {
    pub fn from_cards(cards: impl IntoIterator<Item = Rank>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the head card.
    pub fn draw(&mut self) -> Option<Rank> {
        self.cards.pop_front()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Face-up discard pile; only the top card is ever inspected or removed.
#[derive(Debug, Clone, Default)]
pub struct DiscardPile {
    cards: Vec<Rank>,
}

impl DiscardPile {
    pub fn push(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    pub fn top(&self) -> Option<Rank> {
        self.cards.last().copied()
    }

    pub fn take_top(&mut self) -> Option<Rank> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
