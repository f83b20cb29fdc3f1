//! Display encoding: pip pairs to Unicode domino tile symbols.
//!
//! Pure functions over (pip pair, orientation). The Unicode domino block
//! lays tiles out row-major by pip pair: horizontal tiles start at U+1F031
//! (0-0) and vertical tiles at U+1F063 (0-0), each advancing by
//! `left * 7 + right`. The symbol is a cosmetic concern of the persistence
//! records; game correctness never depends on it.

use crate::core::tile::Tile;

const HORIZONTAL_BASE: u32 = 0x1F031;
const VERTICAL_BASE: u32 = 0x1F063;

/// Visual orientation of an encoded tile symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Left-right layout; used for all snapshot encodings.
    Horizontal,
    /// Top-bottom layout.
    Vertical,
}

/// The Unicode symbol for a tile in its current orientation.
#[must_use]
pub fn tile_symbol(tile: &Tile, orientation: Orientation) -> char {
    let base = match orientation {
        Orientation::Horizontal => HORIZONTAL_BASE,
        Orientation::Vertical => VERTICAL_BASE,
    };
    let code = base + u32::from(tile.left()) * 7 + u32::from(tile.right());
    // Pips are validated to 0..=6 at construction, so the code point stays
    // inside the domino block.
    char::from_u32(code).expect("domino code point is always valid")
}

/// Encode a tile sequence as one symbol per tile, in order.
#[must_use]
pub fn encode_tiles<'a>(
    tiles: impl IntoIterator<Item = &'a Tile>,
    orientation: Orientation,
) -> String {
    tiles
        .into_iter()
        .map(|tile| tile_symbol(tile, orientation))
        .collect()
}
