use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use serde::Serialize;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true when `other` points the opposite way.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        self.opposite() == other
    }

    /// Returns the unit displacement vector for this direction.
    #[must_use]
    pub fn vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    TogglePause,
    Restart,
    Confirm,
    CycleTheme,
    Quit,
}

/// Maps a textual key name to a direction.
///
/// Accepts arrow-key names and WASD letters, case-insensitively; any other
/// input has no mapping.
#[must_use]
pub fn direction_from_key(key: &str) -> Option<Direction> {
    match key.to_ascii_lowercase().as_str() {
        "up" | "arrowup" | "w" => Some(Direction::Up),
        "down" | "arrowdown" | "s" => Some(Direction::Down),
        "left" | "arrowleft" | "a" => Some(Direction::Left),
        "right" | "arrowright" | "d" => Some(Direction::Right),
        _ => None,
    }
}

/// Maps a terminal key code to a game input.
#[must_use]
pub fn game_input_from_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Char(' ') => Some(GameInput::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameInput::Restart),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameInput::CycleTheme),
        KeyCode::Up => direction_from_key("arrowup").map(GameInput::Direction),
        KeyCode::Down => direction_from_key("arrowdown").map(GameInput::Direction),
        KeyCode::Left => direction_from_key("arrowleft").map(GameInput::Direction),
        KeyCode::Right => direction_from_key("arrowright").map(GameInput::Direction),
        KeyCode::Char(letter) => {
            direction_from_key(&letter.to_string()).map(GameInput::Direction)
        }
        _ => None,
    }
}

/// Polls the terminal for one game input, waiting at most `timeout`.
pub fn poll_game_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let Event::Key(key) = event::read()? else {
        return Ok(None);
    };
    if key.kind == KeyEventKind::Release {
        return Ok(None);
    }

    Ok(game_input_from_key(key.code))
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::{Direction, GameInput, direction_from_key, game_input_from_key};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);

        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(!Direction::Up.is_opposite(Direction::Left));
    }

    #[test]
    fn direction_vectors_are_unit_displacements() {
        assert_eq!(Direction::Up.vector(), (0, -1));
        assert_eq!(Direction::Down.vector(), (0, 1));
        assert_eq!(Direction::Left.vector(), (-1, 0));
        assert_eq!(Direction::Right.vector(), (1, 0));
    }

    #[test]
    fn arrow_names_and_wasd_map_to_directions() {
        assert_eq!(direction_from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_from_key("w"), Some(Direction::Up));
        assert_eq!(direction_from_key("ARROWDOWN"), Some(Direction::Down));
        assert_eq!(direction_from_key("s"), Some(Direction::Down));
        assert_eq!(direction_from_key("arrowleft"), Some(Direction::Left));
        assert_eq!(direction_from_key("A"), Some(Direction::Left));
        assert_eq!(direction_from_key("right"), Some(Direction::Right));
        assert_eq!(direction_from_key("d"), Some(Direction::Right));
    }

    #[test]
    fn unknown_keys_have_no_mapping() {
        assert_eq!(direction_from_key("q"), None);
        assert_eq!(direction_from_key("Escape"), None);
        assert_eq!(direction_from_key(""), None);
    }

    #[test]
    fn key_codes_map_to_game_inputs() {
        assert_eq!(
            game_input_from_key(KeyCode::Up),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            game_input_from_key(KeyCode::Char('d')),
            Some(GameInput::Direction(Direction::Right))
        );
        assert_eq!(game_input_from_key(KeyCode::Char(' ')), Some(GameInput::TogglePause));
        assert_eq!(game_input_from_key(KeyCode::Char('r')), Some(GameInput::Restart));
        assert_eq!(game_input_from_key(KeyCode::Esc), Some(GameInput::Quit));
        assert_eq!(game_input_from_key(KeyCode::Char('x')), None);
    }
}
