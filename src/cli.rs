use clap::{Parser, Subcommand};
use git_version::git_version;

use crate::door::DoorActuator;
use crate::gpio::{ButtonLine, SensorLine};

const GIT_VERSION: &str = git_version!(fallback = env!("CARGO_PKG_VERSION"));

/// A utility for opening and closing a garage door.
#[derive(Parser)]
#[clap(name = "garagedoor", version = GIT_VERSION)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Copy, Clone, Debug)]
pub enum Command {
    /// Open the garage door.
    Open,
    /// Close the garage door.
    Close,
    /// Check the status of the garage door.
    Status,
}

/// Applies `command` to the door and returns the line to print.
///
/// `close` only presses when the sensor still reads open. `open` presses
/// unconditionally, so a door stopped mid-travel can always be nudged.
pub fn execute<S, B>(command: Command, door: &mut DoorActuator<S, B>) -> &'static str
where
    S: SensorLine,
    B: ButtonLine,
{
    match command {
        Command::Open => {
            door.press_button();
            "OPENING"
        }
        Command::Close => {
            if door.is_open() {
                door.press_button();
                "CLOSING"
            } else {
                "CLOSED"
            }
        }
        Command::Status => {
            if door.is_open() {
                "OPEN"
            } else {
                "CLOSED"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rppal::gpio::Level;

    use super::*;
    use crate::config::DoorConfig;
    use crate::gpio::fake::{Board, Button, Sensor};

    fn door_on(board: &Board) -> DoorActuator<Sensor, Button> {
        DoorActuator::connect(board, &DoorConfig::default()).unwrap()
    }

    #[test]
    fn status_reports_an_open_door() {
        let board = Board::with_sensor(Level::High);
        let mut door = door_on(&board);
        assert_eq!(execute(Command::Status, &mut door), "OPEN");
        assert!(board.button_writes().is_empty());
    }

    #[test]
    fn status_reports_a_closed_door() {
        let board = Board::with_sensor(Level::Low);
        let mut door = door_on(&board);
        assert_eq!(execute(Command::Status, &mut door), "CLOSED");
        assert!(board.button_writes().is_empty());
    }

    #[test]
    fn close_presses_while_the_door_reads_open() {
        let board = Board::with_sensor(Level::High);
        let mut door = door_on(&board);
        assert_eq!(execute(Command::Close, &mut door), "CLOSING");
        assert_eq!(board.button_writes().len(), 2);
    }

    #[test]
    fn close_is_a_noop_when_already_closed() {
        let board = Board::with_sensor(Level::Low);
        let mut door = door_on(&board);
        assert_eq!(execute(Command::Close, &mut door), "CLOSED");
        assert!(board.button_writes().is_empty());
    }

    #[test]
    fn open_always_presses() {
        for level in [Level::High, Level::Low] {
            let board = Board::with_sensor(level);
            let mut door = door_on(&board);
            assert_eq!(execute(Command::Open, &mut door), "OPENING");
            assert_eq!(board.button_writes().len(), 2);
        }
    }
}
