//! Player identification and per-player game state.
//!
//! A [`Player`] owns a hand and two engine-set status flags. The legal-move
//! query is stateless: it returns a freshly built set on every call instead
//! of accumulating into a field, so repeated draw/check cycles within one
//! turn can never see stale entries.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;
use super::stack::TileStack;
use super::tile::{Tile, TileId};

/// Type-safe player identifier; the index doubles as the turn-order slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Tile ids of the hand tiles playable against the current chain ends.
///
/// Seven slots cover the dealt hand size without allocating.
pub type LegalMoves = SmallVec<[TileId; 7]>;

/// One participant: a hand plus engine-managed status flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    hand: TileStack,
    inactive: bool,
    winner: bool,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile to the hand.
    pub fn add_to_hand(&mut self, tile: Tile) {
        self.hand.add(tile);
    }

    /// Remove a specific tile instance from the hand.
    ///
    /// # Panics
    ///
    /// Panics when the tile is not in the hand; the engine only ever
    /// removes tiles it just located there.
    pub fn remove_from_hand(&mut self, id: TileId) -> Tile {
        self.hand
            .remove(id)
            .unwrap_or_else(|| panic!("{id} is not in this player's hand"))
    }

    /// Compute, from scratch, the hand tiles playable against the two
    /// current chain end values.
    #[must_use]
    pub fn legal_moves(&self, left_end: u8, right_end: u8) -> LegalMoves {
        self.hand
            .iter()
            .filter(|tile| tile.is_playable(left_end, right_end))
            .map(Tile::id)
            .collect()
    }

    /// Select one legal move uniformly at random and remove it from the
    /// hand.
    ///
    /// # Panics
    ///
    /// Panics on an empty legal set or on ids not present in the hand;
    /// both indicate a broken turn-loop invariant.
    pub fn play_random(&mut self, legal: &LegalMoves, rng: &mut GameRng) -> Tile {
        let id = *rng
            .choose(legal)
            .expect("play_random requires a non-empty legal move set");
        self.remove_from_hand(id)
    }

    /// Remove a uniformly random tile from the hand, for the no-double
    /// fallback start.
    ///
    /// # Panics
    ///
    /// Panics on an empty hand; every hand holds 7 tiles at start time.
    pub fn random_starter(&mut self, rng: &mut GameRng) -> Tile {
        self.hand
            .pick_random(rng)
            .expect("starter pick requires a dealt hand")
    }

    /// Sum of both pip values over the whole hand, or `None` for an empty
    /// hand (an empty hand is the win condition, never a scoring state).
    #[must_use]
    pub fn hand_pip_sum(&self) -> Option<u32> {
        if self.hand.is_empty() {
            None
        } else {
            Some(self.hand.pip_sum())
        }
    }

    /// The player's hand.
    #[must_use]
    pub fn hand(&self) -> &TileStack {
        &self.hand
    }

    /// True when the hand holds no tiles.
    #[must_use]
    pub fn has_empty_hand(&self) -> bool {
        self.hand.is_empty()
    }

    /// True once the player failed to move on their most recent turn.
    #[must_use]
    pub fn is_inactive(&self) -> bool {
        self.inactive
    }

    /// Engine-set pass status.
    pub fn set_inactive(&mut self, inactive: bool) {
        self.inactive = inactive;
    }

    /// True only after an empty-hand victory.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.winner
    }

    /// Engine-set on empty-hand victory.
    pub fn set_winner(&mut self) {
        self.winner = true;
    }
}
