//! Input command buffer: raw key events in, gated game commands out.
//!
//! The buffer enforces the game-phase gating (direction keys only while
//! the game runs, start only while it doesn't) and keeps the timestamped
//! key log. The 180-degree-reversal rule is not applied here; every
//! directional command is forwarded and the snake's own buffer drops
//! invalid ones.

pub mod handler;
pub mod keylog;

pub use handler::{Command, InputHandler};
pub use keylog::{KeyLog, KeyLogEntry};

use crossterm::event::KeyEvent;

use crate::game::GameStatus;

/// Captures raw key events into direction intents and the key log.
pub struct InputBuffer {
    handler: InputHandler,
    key_log: KeyLog,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            handler: InputHandler::new(),
            key_log: KeyLog::new(),
        }
    }

    /// Map a key event to a command under the current game status.
    ///
    /// Gating rules:
    /// - `Turn`, `TogglePause`, `QuitGame` are honored only while the
    ///   status is `started` (paused included); each accepted keystroke
    ///   is appended to the key log.
    /// - `StartOrRestart` is honored only while *not* started.
    /// - `QuitGame` on the waiting screen means leaving the program.
    /// - `Exit` is honored everywhere.
    /// - Everything else is `Ignored` and never logged.
    pub fn process(&mut self, key: KeyEvent, status: GameStatus) -> Command {
        let command = self.handler.handle_key_event(key);

        match command {
            Command::Exit => Command::Exit,
            Command::StartOrRestart if status != GameStatus::Started => Command::StartOrRestart,
            Command::QuitGame if status == GameStatus::Waiting => Command::Exit,
            Command::Turn(_) | Command::TogglePause | Command::QuitGame
                if status == GameStatus::Started =>
            {
                if let Some(c) = self.handler.key_char(key) {
                    self.key_log.record(c);
                }
                command
            }
            _ => Command::Ignored,
        }
    }

    /// Clear the key log; called when a new game starts.
    pub fn clear_log(&mut self) {
        self.key_log.clear();
    }

    pub fn key_log(&self) -> &KeyLog {
        &self.key_log
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_directions_gated_to_started() {
        let mut buffer = InputBuffer::new();

        assert_eq!(
            buffer.process(press('h'), GameStatus::Waiting),
            Command::Ignored
        );
        assert_eq!(
            buffer.process(press('h'), GameStatus::GameOver),
            Command::Ignored
        );
        assert_eq!(
            buffer.process(press('h'), GameStatus::Started),
            Command::Turn(Direction::Left)
        );
    }

    #[test]
    fn test_start_only_honored_when_not_started() {
        let mut buffer = InputBuffer::new();

        assert_eq!(
            buffer.process(press(' '), GameStatus::Waiting),
            Command::StartOrRestart
        );
        assert_eq!(
            buffer.process(press(' '), GameStatus::GameOver),
            Command::StartOrRestart
        );
        assert_eq!(
            buffer.process(press(' '), GameStatus::GameWon),
            Command::StartOrRestart
        );
        assert_eq!(
            buffer.process(press(' '), GameStatus::Started),
            Command::Ignored
        );
    }

    #[test]
    fn test_quit_while_waiting_exits_program() {
        let mut buffer = InputBuffer::new();

        assert_eq!(buffer.process(press('q'), GameStatus::Waiting), Command::Exit);
        assert_eq!(
            buffer.process(press('q'), GameStatus::Started),
            Command::QuitGame
        );
    }

    #[test]
    fn test_accepted_keystrokes_are_logged() {
        let mut buffer = InputBuffer::new();

        buffer.process(press('h'), GameStatus::Started);
        buffer.process(press('j'), GameStatus::Started);
        buffer.process(press('p'), GameStatus::Started);

        let keys: Vec<char> = buffer.key_log().entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!['h', 'j', 'p']);
    }

    #[test]
    fn test_gated_out_keystrokes_are_not_logged() {
        let mut buffer = InputBuffer::new();

        buffer.process(press('h'), GameStatus::Waiting);
        buffer.process(press('x'), GameStatus::Started);
        buffer.process(press(' '), GameStatus::Waiting);

        assert!(buffer.key_log().is_empty());
    }

    #[test]
    fn test_every_directional_keystroke_forwarded() {
        // Reversal rejection is the snake's job; the buffer forwards all
        // four directions regardless of what the snake is doing.
        let mut buffer = InputBuffer::new();

        for (c, dir) in [
            ('h', Direction::Left),
            ('j', Direction::Down),
            ('k', Direction::Up),
            ('l', Direction::Right),
        ] {
            assert_eq!(
                buffer.process(press(c), GameStatus::Started),
                Command::Turn(dir)
            );
        }
        assert_eq!(buffer.key_log().len(), 4);
    }

    #[test]
    fn test_clear_log() {
        let mut buffer = InputBuffer::new();
        buffer.process(press('h'), GameStatus::Started);
        assert_eq!(buffer.key_log().len(), 1);

        buffer.clear_log();
        assert!(buffer.key_log().is_empty());
    }
}
