use crate::error::{MoveError, RoomError};
use crate::room::{self, MoveOutcome, Room};
use crate::source::RoomSource;
use direction::CardinalDirection;

/// Plays through an ordered list of rooms, moving on each time the player enters a portal
pub struct Session<S> {
    source: S,
    room_names: Vec<String>,
    room_index: usize,
    current_room: Option<Room>,
    load_error: Option<RoomError>,
    playing: bool,
}

impl<S: RoomSource> Session<S> {
    pub fn new(room_names: Vec<String>, source: S) -> Result<Self, RoomError> {
        let first = room_names.first().ok_or(RoomError::Empty)?;
        let room = Room::from_source(&source, first)?;
        Ok(Self {
            source,
            room_names,
            room_index: 0,
            current_room: Some(room),
            load_error: None,
            playing: true,
        })
    }

    /// Moves the player in the current room, advancing to the next room through a portal
    pub fn move_player(
        &mut self,
        direction: CardinalDirection,
        steps: u32,
    ) -> Result<MoveOutcome, MoveError> {
        let room = match self.current_room.as_mut() {
            Some(room) => room,
            None => return Ok(MoveOutcome::EnteredPortal),
        };
        let mut portal_entered = false;
        let outcome = room.move_player(direction, steps, &mut || portal_entered = true)?;
        if portal_entered {
            if let Err(error) = self.advance_room() {
                tracing::error!(%error, "failed to load the next room");
                self.load_error = Some(error);
                self.playing = false;
            }
        }
        Ok(outcome)
    }

    /// Discards the current room and loads the next one, ending the session after the last room
    pub fn advance_room(&mut self) -> Result<(), RoomError> {
        self.current_room = None;
        self.room_index += 1;
        match self.room_names.get(self.room_index) {
            Some(name) => {
                tracing::info!(room = %name, index = self.room_index, "advancing to next room");
                self.current_room = Some(Room::from_source(&self.source, name)?);
            }
            None => {
                tracing::info!("no rooms remain");
                self.playing = false;
            }
        }
        Ok(())
    }

    pub fn quit(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_complete(&self) -> bool {
        self.room_index >= self.room_names.len()
    }

    /// Why the session stopped early, if the room after a portal couldn't be loaded
    pub fn load_error(&self) -> Option<&RoomError> {
        self.load_error.as_ref()
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.current_room.as_ref()
    }

    pub fn room_name(&self) -> Option<&str> {
        self.current_room
            .as_ref()
            .and(self.room_names.get(self.room_index))
            .map(String::as_str)
    }

    pub fn room_index(&self) -> usize {
        self.room_index
    }

    pub fn room_count(&self) -> usize {
        self.room_names.len()
    }

    /// The player's position in the current room, e.g. `"Pos: (3, 2)"`
    pub fn status_line(&self) -> Option<String> {
        self.current_room.as_ref().map(|room| {
            let (row, column) = room.player_position();
            format!("Pos: {}", room::format_position(row, column))
        })
    }
}
