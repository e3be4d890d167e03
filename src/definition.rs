//! Parsing rooms from their textual definitions.
//!
//! A definition is one line of text per row of the room. Every line has the same length, and
//! each character is the glyph of a tile. The single `@` marks where the player spawns; the
//! cell underneath it is empty.

use crate::error::RoomError;
use crate::room::{self, Room};
use crate::tile::Tile;
use coord_2d::Coord;
use grid_2d::Grid;

const SPAWN_MARKER: char = '@';

impl Room {
    /// Builds a room from the lines of a definition and spawns the player
    pub fn from_lines<I>(lines: I) -> Result<Self, RoomError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .map(|line| line.as_ref().chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let width = rows.first().ok_or(RoomError::Empty)?.len();
        let size = room::room_size(rows.len() as u64, width as u64)?;
        let mut tiles = Vec::with_capacity(width * rows.len());
        let mut spawn: Option<(usize, usize)> = None;
        for (row, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != width {
                return Err(RoomError::RaggedLine {
                    row,
                    expected: width,
                    found: glyphs.len(),
                });
            }
            for (column, &glyph) in glyphs.iter().enumerate() {
                let tile = if glyph == SPAWN_MARKER {
                    if let Some(first) = spawn {
                        return Err(RoomError::MultipleSpawns {
                            first,
                            second: (row, column),
                        });
                    }
                    spawn = Some((row, column));
                    Tile::Empty
                } else {
                    Tile::from_glyph(glyph).ok_or(RoomError::UnknownGlyph {
                        row,
                        column,
                        glyph,
                    })?
                };
                tiles.push(tile);
            }
        }
        let (spawn_row, spawn_column) = spawn.ok_or(RoomError::MissingSpawn)?;
        let mut grid = Grid::new_copy(size, Tile::Empty);
        for (cell, tile) in grid.iter_mut().zip(tiles) {
            *cell = tile;
        }
        // room_size keeps both sides within i32
        Ok(Self::with_grid(grid, Coord::new(spawn_column as i32, spawn_row as i32)))
    }
}

/// Splits the contents of a definition file into lines, accepting either line terminator
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use direction::CardinalDirection;

    const LAYOUT: &[&str] = &["#####", "#  *#", "# @ #", "#####"];

    #[test]
    fn parses_layout_and_spawn() {
        let room = Room::from_lines(LAYOUT).unwrap();
        assert_eq!(room.dimensions(), (4, 5));
        assert_eq!(room.spawn_position(), (2, 2));
        assert_eq!(room.player_position(), (2, 2));
        assert_eq!(room.tile_at(0, 0), Some(Tile::Wall));
        assert_eq!(room.tile_at(1, 3), Some(Tile::Portal));
        assert_eq!(room.tile_at(1, 1), Some(Tile::Empty));
        assert_eq!(room.tile_at(2, 2), Some(Tile::Player));
    }

    #[test]
    fn render_then_parse_gives_the_same_layout() {
        let room = Room::from_lines(LAYOUT).unwrap();
        let rendered = room.render();
        assert_eq!(rendered, LAYOUT);
        let reparsed = Room::from_lines(&rendered).unwrap();
        assert_eq!(reparsed.render(), rendered);
        assert_eq!(reparsed.spawn_position(), room.spawn_position());
    }

    #[test]
    fn spawn_cell_is_empty_once_the_player_leaves() {
        let mut room = Room::from_lines(LAYOUT).unwrap();
        room.move_player(CardinalDirection::West, 1, &mut || ()).unwrap();
        assert_eq!(room.tile_at(2, 2), Some(Tile::Empty));
        assert_eq!(room.render()[2], "#@  #");
    }

    #[test]
    fn windows_line_endings() {
        let lines = split_lines("###\r\n#@#\r\n###\r\n");
        assert_eq!(lines, vec!["###", "#@#", "###"]);
        let room = Room::from_lines(&lines).unwrap();
        assert_eq!(room.dimensions(), (3, 3));
    }

    #[test]
    fn rejects_malformed_definitions() {
        let empty: &[&str] = &[];
        assert!(matches!(Room::from_lines(empty), Err(RoomError::Empty)));
        assert!(matches!(Room::from_lines(&["", ""]), Err(RoomError::ZeroDimension)));
        assert!(matches!(
            Room::from_lines(&["   ", " "]),
            Err(RoomError::RaggedLine {
                row: 1,
                expected: 3,
                found: 1
            })
        ));
        assert!(matches!(Room::from_lines(&["   ", "   "]), Err(RoomError::MissingSpawn)));
        assert!(matches!(
            Room::from_lines(&["@ ", " @"]),
            Err(RoomError::MultipleSpawns {
                first: (0, 0),
                second: (1, 1)
            })
        ));
        assert!(matches!(
            Room::from_lines(&["@x"]),
            Err(RoomError::UnknownGlyph {
                row: 0,
                column: 1,
                glyph: 'x'
            })
        ));
    }
}
