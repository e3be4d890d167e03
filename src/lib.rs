//! A small turn-based game of walking a player through grid rooms. Each room is loaded from a
//! text definition; stepping into a portal moves on to the next room until none remain.

pub mod app;
pub mod config;
pub mod definition;
pub mod error;
pub mod room;
pub mod session;
pub mod source;
pub mod tile;

pub use app::{App, Command};
pub use config::SessionConfig;
pub use error::{MoveError, RoomError};
pub use room::{format_position, MoveOutcome, PortalHandler, Room};
pub use session::Session;
pub use source::{BuiltinRooms, RoomDirectory, RoomSource};
pub use tile::{Tile, OUT_OF_RANGE};

pub use direction::CardinalDirection;
