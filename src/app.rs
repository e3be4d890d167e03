use crate::session::Session;
use crate::source::RoomSource;
use direction::CardinalDirection;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter a move direction (wasd or q to quit): ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(CardinalDirection),
    Quit,
    Invalid,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "w" => Self::Move(CardinalDirection::North),
            "a" => Self::Move(CardinalDirection::West),
            "s" => Self::Move(CardinalDirection::South),
            "d" => Self::Move(CardinalDirection::East),
            "q" => Self::Quit,
            _ => Self::Invalid,
        }
    }
}

/// Drives a session from lines of input, writing the room after every turn
pub struct App<S> {
    session: Session<S>,
}

impl<S: RoomSource> App<S> {
    pub fn new(session: Session<S>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        self.display(&mut output)?;
        let mut lines = input.lines();
        while self.session.is_playing() {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            self.handle_command(Command::parse(&line), &mut output)?;
            if self.session.is_playing() {
                self.display(&mut output)?;
            }
        }
        if let Some(error) = self.session.load_error() {
            writeln!(output, "Couldn't load the next room: {}", error)?;
        } else if self.session.is_complete() {
            writeln!(output, "You made it through every room!")?;
        }
        Ok(())
    }

    fn handle_command<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<()> {
        match command {
            Command::Move(direction) => {
                if let Err(error) = self.session.move_player(direction, 1) {
                    writeln!(output, "{}", error)?;
                }
            }
            Command::Quit => self.session.quit(),
            Command::Invalid => writeln!(output, "Invalid command.")?,
        }
        Ok(())
    }

    fn display<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if let Some(room) = self.session.current_room() {
            for line in room.render() {
                writeln!(output, "{}", line)?;
            }
        }
        if let Some(status) = self.session.status_line() {
            writeln!(output, "{}", status)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("w"), Command::Move(CardinalDirection::North));
        assert_eq!(Command::parse("a"), Command::Move(CardinalDirection::West));
        assert_eq!(Command::parse("s\n"), Command::Move(CardinalDirection::South));
        assert_eq!(Command::parse("d"), Command::Move(CardinalDirection::East));
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("W"), Command::Invalid);
        assert_eq!(Command::parse("wasd"), Command::Invalid);
        assert_eq!(Command::parse(""), Command::Invalid);
    }
}
