use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// A raw keystroke mapped to a game command, before any game-phase gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Request a direction change
    Turn(Direction),
    /// Start a new game, or restart after game over
    StartOrRestart,
    /// Pause or resume the running game
    TogglePause,
    /// Leave the current game and return to the waiting screen
    QuitGame,
    /// Leave the program
    Exit,
    /// Key with no binding
    Ignored,
}

/// Maps terminal key events to [`Command`]s.
///
/// Movement is vim-style hjkl, case-insensitive. Space starts or
/// restarts, `p` pauses, `q` quits the game, Esc and Ctrl-C quit the
/// program.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Command {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Command::Exit;
        }

        match key.code {
            // Movement - vim motions
            KeyCode::Char('h') | KeyCode::Char('H') => Command::Turn(Direction::Left),
            KeyCode::Char('j') | KeyCode::Char('J') => Command::Turn(Direction::Down),
            KeyCode::Char('k') | KeyCode::Char('K') => Command::Turn(Direction::Up),
            KeyCode::Char('l') | KeyCode::Char('L') => Command::Turn(Direction::Right),

            // Controls
            KeyCode::Char(' ') => Command::StartOrRestart,
            KeyCode::Char('p') | KeyCode::Char('P') => Command::TogglePause,
            KeyCode::Char('q') | KeyCode::Char('Q') => Command::QuitGame,
            KeyCode::Esc => Command::Exit,

            _ => Command::Ignored,
        }
    }

    /// The character a key event carries, for the key log.
    pub fn key_char(&self, key: KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(c) => Some(c),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_hjkl_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('h'))),
            Command::Turn(Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('j'))),
            Command::Turn(Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('k'))),
            Command::Turn(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('l'))),
            Command::Turn(Direction::Right)
        );
    }

    #[test]
    fn test_hjkl_uppercase() {
        let handler = InputHandler::new();

        let h_upper = KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(h_upper),
            Command::Turn(Direction::Left)
        );
        let k_upper = KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(k_upper),
            Command::Turn(Direction::Up)
        );
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char(' '))),
            Command::StartOrRestart
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('p'))),
            Command::TogglePause
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('q'))),
            Command::QuitGame
        );
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), Command::Exit);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), Command::Exit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('x'))),
            Command::Ignored
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            Command::Ignored
        );
    }
}
