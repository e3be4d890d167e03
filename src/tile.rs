use serde::{Deserialize, Serialize};

/// Numeric id returned by room queries for positions outside the grid. Never a valid tile id.
pub const OUT_OF_RANGE: u32 = 999;

/// Glyph displayed for ids that don't correspond to any known tile
pub const UNKNOWN_GLYPH: char = '?';

/// The contents of a single cell of a room
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    Wall,
    Player,
    Portal,
}

// Each tile kind with its numeric id and the glyph used both when rendering a room and when
// reading a room definition. Adding a tile kind means adding a row here.
const TILE_TABLE: &[(Tile, u32, char)] = &[
    (Tile::Empty, 0, ' '),
    (Tile::Wall, 1, '#'),
    (Tile::Player, 2, '@'),
    (Tile::Portal, 3, '*'),
];

impl Tile {
    pub fn id(self) -> u32 {
        Self::entry(self).1
    }

    pub fn glyph(self) -> char {
        Self::entry(self).2
    }

    pub fn from_id(id: u32) -> Option<Self> {
        TILE_TABLE
            .iter()
            .find(|&&(_, tile_id, _)| tile_id == id)
            .map(|&(tile, _, _)| tile)
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        TILE_TABLE
            .iter()
            .find(|&&(_, _, tile_glyph)| tile_glyph == glyph)
            .map(|&(tile, _, _)| tile)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Wall => "wall",
            Self::Player => "player",
            Self::Portal => "portal",
        }
    }

    fn entry(self) -> &'static (Tile, u32, char) {
        TILE_TABLE
            .iter()
            .find(|(tile, _, _)| *tile == self)
            .expect("every tile has an entry in the tile table")
    }
}

/// Returns the glyph for a raw tile id, falling back to `UNKNOWN_GLYPH`
pub fn glyph_for_id(id: u32) -> char {
    Tile::from_id(id).map(Tile::glyph).unwrap_or(UNKNOWN_GLYPH)
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Tile; 4] = [Tile::Empty, Tile::Wall, Tile::Player, Tile::Portal];

    #[test]
    fn ids_match_their_tiles() {
        assert_eq!(Tile::Empty.id(), 0);
        assert_eq!(Tile::Wall.id(), 1);
        assert_eq!(Tile::Player.id(), 2);
        assert_eq!(Tile::Portal.id(), 3);
        for tile in ALL {
            assert_eq!(Tile::from_id(tile.id()), Some(tile));
            assert_eq!(Tile::from_glyph(tile.glyph()), Some(tile));
        }
    }

    #[test]
    fn unknown_ids_and_glyphs() {
        assert_eq!(Tile::from_id(4), None);
        assert_eq!(Tile::from_id(OUT_OF_RANGE), None);
        assert_eq!(glyph_for_id(42), '?');
        assert_eq!(glyph_for_id(1), '#');
        assert_eq!(Tile::from_glyph('x'), None);
        assert_eq!(Tile::from_glyph('?'), None);
    }
}
