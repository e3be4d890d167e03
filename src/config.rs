use crate::error::RoomError;
use crate::source::{BuiltinRooms, RoomDirectory, RoomSource};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which rooms to play, in order, and where to find them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default = "default_rooms")]
    pub rooms: Vec<String>,

    /// Directory of `<name>.txt` room definitions. The built-in rooms are used when absent.
    #[serde(default)]
    pub room_dir: Option<PathBuf>,
}

fn default_rooms() -> Vec<String> {
    BuiltinRooms::names().map(str::to_string).collect()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rooms: default_rooms(),
            room_dir: None,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, RoomError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, RoomError> {
        let json = std::fs::read_to_string(path).map_err(|source| RoomError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn room_source(&self) -> Box<dyn RoomSource> {
        match &self.room_dir {
            Some(dir) => Box::new(RoomDirectory::new(dir.clone())),
            None => Box::new(BuiltinRooms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plays_the_builtin_rooms() {
        let config = SessionConfig::default();
        assert_eq!(config.rooms, vec!["room1", "room2", "special"]);
        assert_eq!(config.room_dir, None);
    }

    #[test]
    fn parse_json() {
        let config =
            SessionConfig::from_json_str(r#"{"rooms": ["a", "b"], "room_dir": "levels"}"#).unwrap();
        assert_eq!(config.rooms, vec!["a", "b"]);
        assert_eq!(config.room_dir, Some(PathBuf::from("levels")));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = SessionConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            SessionConfig::from_json_str(r#"{"levels": []}"#),
            Err(RoomError::Config(_))
        ));
    }
}
