use crate::definition;
use crate::error::RoomError;
use std::path::{Path, PathBuf};

/// Somewhere room definitions can be loaded from by name
pub trait RoomSource {
    fn load(&self, name: &str) -> Result<Vec<String>, RoomError>;
}

/// The rooms that ship with the game
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinRooms;

const BUILTIN: &[(&str, &str)] = &[
    ("room1", include_str!("../rooms/room1.txt")),
    ("room2", include_str!("../rooms/room2.txt")),
    ("special", include_str!("../rooms/special.txt")),
];

impl BuiltinRooms {
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|&(name, _)| name)
    }
}

impl RoomSource for BuiltinRooms {
    fn load(&self, name: &str) -> Result<Vec<String>, RoomError> {
        BUILTIN
            .iter()
            .find(|&&(builtin_name, _)| builtin_name == name)
            .map(|&(_, text)| definition::split_lines(text))
            .ok_or_else(|| RoomError::UnknownRoom(name.to_string()))
    }
}

/// Reads `<root>/<name>.txt` for each room
#[derive(Clone, Debug)]
pub struct RoomDirectory {
    root: PathBuf,
}

impl RoomDirectory {
    pub const EXTENSION: &'static str = "txt";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name).with_extension(Self::EXTENSION)
    }
}

impl RoomSource for RoomDirectory {
    fn load(&self, name: &str) -> Result<Vec<String>, RoomError> {
        let path = self.path_of(name);
        let text = std::fs::read_to_string(&path).map_err(|source| RoomError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "read room definition");
        Ok(definition::split_lines(&text))
    }
}

impl<S: RoomSource + ?Sized> RoomSource for Box<S> {
    fn load(&self, name: &str) -> Result<Vec<String>, RoomError> {
        (**self).load(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Room;

    #[test]
    fn every_builtin_room_parses() {
        for name in BuiltinRooms::names() {
            let room = Room::from_source(&BuiltinRooms, name).unwrap();
            assert_eq!(room.player_position(), room.spawn_position());
        }
    }

    #[test]
    fn unknown_builtin_room() {
        assert!(matches!(
            BuiltinRooms.load("attic"),
            Err(RoomError::UnknownRoom(name)) if name == "attic"
        ));
    }

    #[test]
    fn directory_paths() {
        let directory = RoomDirectory::new("levels");
        assert_eq!(directory.path_of("room1"), Path::new("levels/room1.txt"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let directory = RoomDirectory::new(std::env::temp_dir().join("gridexplorer-no-such-dir"));
        assert!(matches!(directory.load("room1"), Err(RoomError::Io { .. })));
    }
}
