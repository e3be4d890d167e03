use crate::error::{MoveError, RoomError};
use crate::source::RoomSource;
use crate::tile::{self, Tile, OUT_OF_RANGE};
use coord_2d::{Coord, Size};
use direction::CardinalDirection;
use grid_2d::Grid;

/// Receives the signal raised when the player walks into a portal
pub trait PortalHandler {
    fn advance_room(&mut self);
}

impl<F: FnMut()> PortalHandler for F {
    fn advance_room(&mut self) {
        (self)()
    }
}

/// What happened as the result of a successful move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player now stands on the given `(row, column)`
    Moved { row: i32, column: i32 },
    /// The player stepped into a portal. The player stays put and the room is finished with.
    EnteredPortal,
}

/// A fixed-size grid of tiles holding a single player
pub struct Room {
    grid: Grid<Tile>,
    spawn_coord: Coord,
    player_coord: Coord,
    spawned: bool,
}

impl Room {
    /// Creates an empty room of the given size and spawns the player at `(spawn_row, spawn_column)`
    pub fn new(
        rows: u32,
        columns: u32,
        spawn_row: u32,
        spawn_column: u32,
    ) -> Result<Self, RoomError> {
        let size = room_size(u64::from(rows), u64::from(columns))?;
        let spawn_out_of_bounds = || RoomError::SpawnOutOfBounds {
            row: spawn_row,
            column: spawn_column,
        };
        let spawn_coord = match (i32::try_from(spawn_column), i32::try_from(spawn_row)) {
            (Ok(x), Ok(y)) => Coord::new(x, y),
            _ => return Err(spawn_out_of_bounds()),
        };
        if !spawn_coord.is_valid(size) {
            return Err(spawn_out_of_bounds());
        }
        let grid = Grid::new_copy(size, Tile::Empty);
        Ok(Self::with_grid(grid, spawn_coord))
    }

    // `grid` must not contain a player and `spawn_coord` must lie within it
    pub(crate) fn with_grid(grid: Grid<Tile>, spawn_coord: Coord) -> Self {
        let mut room = Self {
            grid,
            spawn_coord,
            player_coord: spawn_coord,
            spawned: false,
        };
        room.spawn_player();
        room
    }

    /// Loads the definition called `name` from `source` and parses it
    pub fn from_source<S: RoomSource + ?Sized>(source: &S, name: &str) -> Result<Self, RoomError> {
        let lines = source.load(name)?;
        let room = Self::from_lines(&lines)?;
        let (rows, columns) = room.dimensions();
        tracing::info!(room = name, rows, columns, "loaded room");
        Ok(room)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.grid.height(), self.grid.width())
    }

    pub fn rows(&self) -> u32 {
        self.grid.height()
    }

    pub fn columns(&self) -> u32 {
        self.grid.width()
    }

    pub fn is_in_bounds(&self, row: i32, column: i32) -> bool {
        Coord::new(column, row).is_valid(self.grid.size())
    }

    /// Returns the tile at `(row, column)`, or `None` outside the room
    pub fn tile_at(&self, row: i32, column: i32) -> Option<Tile> {
        self.grid.get(Coord::new(column, row)).copied()
    }

    /// Returns the numeric id of the tile at `(row, column)`, or `OUT_OF_RANGE` outside the room
    pub fn tile_id_at(&self, row: i32, column: i32) -> u32 {
        self.tile_at(row, column).map(Tile::id).unwrap_or(OUT_OF_RANGE)
    }

    /// One string per row, top row first
    pub fn render(&self) -> Vec<String> {
        (0..self.grid.height() as i32)
            .map(|y| {
                (0..self.grid.width() as i32)
                    .map(|x| tile::glyph_for_id(self.grid.get_checked(Coord::new(x, y)).id()))
                    .collect()
            })
            .collect()
    }

    pub fn player_position(&self) -> (i32, i32) {
        (self.player_coord.y, self.player_coord.x)
    }

    pub fn spawn_position(&self) -> (i32, i32) {
        (self.spawn_coord.y, self.spawn_coord.x)
    }

    pub fn is_spawned(&self) -> bool {
        self.spawned
    }

    /// Puts the player back at the spawn position, removing them from wherever they were
    pub fn spawn_player(&mut self) {
        if self.spawned {
            self.clear_tile(self.player_coord);
        }
        self.place_tile(self.spawn_coord, Tile::Player);
        self.player_coord = self.spawn_coord;
        self.spawned = true;
        tracing::debug!(position = %format_coord(self.spawn_coord), "player spawned");
    }

    /// Moves the player `steps` cells in a straight line. Only the destination cell is checked,
    /// so a move of more than one step passes over whatever lies between.
    pub fn move_player<H: PortalHandler + ?Sized>(
        &mut self,
        direction: CardinalDirection,
        steps: u32,
        portal_handler: &mut H,
    ) -> Result<MoveOutcome, MoveError> {
        let offset = direction.coord();
        let steps = i64::from(steps);
        let target_row = i64::from(self.player_coord.y) + i64::from(offset.y) * steps;
        let target_column = i64::from(self.player_coord.x) + i64::from(offset.x) * steps;
        let target = match (i32::try_from(target_row), i32::try_from(target_column)) {
            (Ok(row), Ok(column)) if self.is_in_bounds(row, column) => Coord::new(column, row),
            _ => {
                tracing::warn!(
                    row = target_row,
                    column = target_column,
                    "you can't move outside the room"
                );
                return Err(MoveError::OutOfBounds {
                    row: target_row,
                    column: target_column,
                });
            }
        };
        match *self.grid.get_checked(target) {
            Tile::Empty => {
                self.relocate_tile(self.player_coord, target, Tile::Player)?;
                self.player_coord = target;
                tracing::debug!(position = %format_coord(target), "player moved");
                Ok(MoveOutcome::Moved {
                    row: target.y,
                    column: target.x,
                })
            }
            Tile::Portal => {
                tracing::info!(position = %format_coord(target), "player entered portal");
                portal_handler.advance_room();
                Ok(MoveOutcome::EnteredPortal)
            }
            tile => {
                tracing::warn!(position = %format_coord(target), %tile, "move blocked");
                Err(MoveError::Blocked { tile })
            }
        }
    }

    fn place_tile(&mut self, coord: Coord, tile: Tile) {
        match self.grid.get_mut(coord) {
            Some(cell) => *cell = tile,
            None => tracing::warn!(
                position = %format_coord(coord),
                %tile,
                "can't place a tile outside the room"
            ),
        }
    }

    fn clear_tile(&mut self, coord: Coord) {
        self.place_tile(coord, Tile::Empty);
    }

    fn relocate_tile(&mut self, from: Coord, to: Coord, tile: Tile) -> Result<(), MoveError> {
        let found = match self.grid.get(from) {
            Some(&found) => found,
            None => {
                tracing::warn!(
                    position = %format_coord(from),
                    "can't move a tile from outside the room"
                );
                return Err(MoveError::OutOfBounds {
                    row: i64::from(from.y),
                    column: i64::from(from.x),
                });
            }
        };
        if found != tile {
            tracing::error!(
                position = %format_coord(from),
                expected = %tile,
                %found,
                "room is in an inconsistent state"
            );
            return Err(MoveError::InconsistentState {
                row: from.y,
                column: from.x,
                expected: tile,
                found,
            });
        }
        if !to.is_valid(self.grid.size()) {
            tracing::warn!(position = %format_coord(to), "can't move a tile outside the room");
            return Err(MoveError::OutOfBounds {
                row: i64::from(to.y),
                column: i64::from(to.x),
            });
        }
        self.clear_tile(from);
        self.place_tile(to, tile);
        Ok(())
    }
}

// Coordinates are i32, so neither side may exceed i32::MAX
pub(crate) fn room_size(rows: u64, columns: u64) -> Result<Size, RoomError> {
    if rows == 0 || columns == 0 {
        return Err(RoomError::ZeroDimension);
    }
    let max = i32::MAX as u64;
    if rows > max || columns > max {
        return Err(RoomError::TooLarge { rows, columns });
    }
    Ok(Size::new(columns as u32, rows as u32))
}

/// Formats a position as `"(row, column)"`
pub fn format_position(row: i32, column: i32) -> String {
    format!("({}, {})", row, column)
}

fn format_coord(coord: Coord) -> String {
    format_position(coord.y, coord.x)
}
