//! Core game objects: tiles, stacks, players, the chain, and the RNG.

pub mod chain;
pub mod player;
pub mod rng;
pub mod stack;
pub mod tile;

pub use chain::Chain;
pub use player::{LegalMoves, Player, PlayerId};
pub use rng::GameRng;
pub use stack::TileStack;
pub use tile::{standard_set, Tile, TileId, MAX_PIP, STANDARD_SET_SIZE};
