//! Game engine: configuration, setup, the turn loop, and terminal results.

pub mod game;

pub use game::{DominoGame, GameConfig, GameResult, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
