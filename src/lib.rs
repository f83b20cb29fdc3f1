//! # domino-engine
//!
//! A self-playing double-six domino simulation engine.
//!
//! Given a player count (2-4) and a session token, the engine builds the
//! standard 28-tile set, deals 7 tiles per player, determines a starting
//! move, and plays full rounds on its own - uniform-random legal-move
//! selection, orientation-correct chain extension, draw-on-block, pass
//! tracking - until one player empties their hand or the game blocks.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness flows through one seeded RNG, so a
//!    fixed seed reproduces an entire run byte for byte.
//!
//! 2. **Write-only persistence boundary**: the engine pushes a snapshot
//!    after every atomic state change and one result record at termination.
//!    Callers supply the [`ProgressSink`]; the engine never reads back.
//!
//! 3. **Identity-based tile handling**: every tile instance carries a
//!    [`TileId`], and collections remove by id rather than by pip values,
//!    so value-equal instances can never be confused.
//!
//! ## Modules
//!
//! - `core`: tiles, the tile stack, players, the chain, RNG
//! - `engine`: configuration, setup, the turn loop, terminal results
//! - `progress`: snapshot/result records, the sink trait, display encoding
//! - `error`: boundary error types
//!
//! ## Example
//!
//! ```
//! use domino_engine::{DominoGame, GameConfig, MemorySink, SessionId};
//!
//! let config = GameConfig::new(2, SessionId::new("demo"));
//! let mut game = DominoGame::setup(config, 42, MemorySink::new()).unwrap();
//! let result = game.run().unwrap();
//!
//! assert!(!result.winners().is_empty());
//! let sink = game.into_sink();
//! assert!(sink.result().is_some());
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod progress;

// Re-export commonly used types
pub use crate::core::{
    standard_set, Chain, GameRng, LegalMoves, Player, PlayerId, Tile, TileId, TileStack, MAX_PIP,
    STANDARD_SET_SIZE,
};

pub use crate::engine::{
    DominoGame, GameConfig, GameResult, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::error::{EngineError, SinkError};

pub use crate::progress::{
    encode::{encode_tiles, tile_symbol, Orientation},
    MemorySink, ProgressSink, ResultRecord, ResultStatus, SessionId, Snapshot,
};
