pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Two 0s, four each of 1..=12, two 13s.
pub const DECK_SIZE: usize = 54;

/// Cards dealt to each seat before the opener is flipped.
pub const DEAL_HAND_SIZE: usize = 4;

/// Private looks at own slots granted to each participant per match.
pub const INITIAL_PEEKS: u8 = 2;

/// A pair claim proposes between 2 and 4 own-slot indices.
pub const MIN_CLAIM_SLOTS: usize = 2;
pub const MAX_CLAIM_SLOTS: usize = 4;
