use crate::tile::Tile;
use std::path::PathBuf;

/// Reasons a single move is rejected. The room is left unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position ({row}, {column}) is outside the room")]
    OutOfBounds { row: i64, column: i64 },

    #[error("there is a {tile} in the way")]
    Blocked { tile: Tile },

    /// The grid disagrees with the tracked player position
    #[error("expected {expected} at ({row}, {column}) but found {found}")]
    InconsistentState {
        row: i32,
        column: i32,
        expected: Tile,
        found: Tile,
    },
}

/// Failure to construct a room, or to set up a session of rooms
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    #[error("room definition is empty")]
    Empty,

    #[error("room must have at least one row and one column")]
    ZeroDimension,

    #[error("row {row} has {found} columns but the room is {expected} columns wide")]
    RaggedLine {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognised character {glyph:?} at ({row}, {column})")]
    UnknownGlyph {
        row: usize,
        column: usize,
        glyph: char,
    },

    #[error("a {rows}x{columns} room is too large")]
    TooLarge { rows: u64, columns: u64 },

    #[error("room definition has no spawn marker")]
    MissingSpawn,

    #[error("room definition has a second spawn marker at {second:?} (first at {first:?})")]
    MultipleSpawns {
        first: (usize, usize),
        second: (usize, usize),
    },

    #[error("spawn position ({row}, {column}) is outside the room")]
    SpawnOutOfBounds { row: u32, column: u32 },

    #[error("no room named {0:?}")]
    UnknownRoom(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid session config: {0}")]
    Config(#[from] serde_json::Error),
}
