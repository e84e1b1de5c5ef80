use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::game::{GameConfig, GameController};
use crate::input::{Command, InputBuffer};
use crate::render::Renderer;
use crate::score::ScoreBoard;

/// Interactive terminal session: wires the key event stream, the
/// frame-driven game clock, and the renderer together.
pub struct PlayMode {
    controller: GameController,
    input: InputBuffer,
    score_board: ScoreBoard,
    renderer: Renderer,
    should_exit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let controller = GameController::new(config)?;

        Ok(Self {
            controller,
            input: InputBuffer::new(),
            score_board: ScoreBoard::new(),
            renderer: Renderer::new(),
            should_exit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run session with cleanup
        let result = self.run_session(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_session(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Frames at ~60 Hz feed the simulation clock; the controller
        // decides per frame whether enough time has passed for a tick.
        let frame_interval = Duration::from_millis(16);
        let mut frame_timer = interval(frame_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Simulation frame
                _ = frame_timer.tick() => {
                    let result = self.controller.advance(Instant::now());
                    if result.ended {
                        self.score_board.stop();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        let snapshot = self.controller.snapshot();
                        let summary = self.score_board.summarize(self.input.key_log(), &snapshot);
                        self.renderer.render(frame, &snapshot, &summary);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_exit = true;
                }
            }

            if self.should_exit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input.process(key, self.controller.status()) {
                Command::Turn(direction) => {
                    self.controller.set_pending_direction(direction);
                }
                Command::StartOrRestart => {
                    self.input.clear_log();
                    self.controller.start_game();
                    self.score_board.start();
                }
                Command::TogglePause => {
                    self.controller.toggle_pause();
                }
                Command::QuitGame => {
                    self.controller.quit_game();
                    self.score_board.stop();
                }
                Command::Exit => {
                    self.should_exit = true;
                }
                Command::Ignored => {}
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_space_starts_game() {
        let mut mode = PlayMode::new(GameConfig::default()).unwrap();
        assert_eq!(mode.controller.status(), GameStatus::Waiting);

        mode.handle_event(press(' '));

        assert_eq!(mode.controller.status(), GameStatus::Started);
        assert!(mode.score_board.is_running());
        assert!(mode.input.key_log().is_empty());
    }

    #[test]
    fn test_quit_returns_to_waiting_and_stops_timer() {
        let mut mode = PlayMode::new(GameConfig::default()).unwrap();
        mode.handle_event(press(' '));
        mode.handle_event(press('q'));

        assert_eq!(mode.controller.status(), GameStatus::Waiting);
        assert!(!mode.score_board.is_running());
        assert!(!mode.should_exit);
    }

    #[test]
    fn test_quit_on_waiting_screen_exits() {
        let mut mode = PlayMode::new(GameConfig::default()).unwrap();
        mode.handle_event(press('q'));
        assert!(mode.should_exit);
    }

    #[test]
    fn test_pause_key_toggles() {
        let mut mode = PlayMode::new(GameConfig::default()).unwrap();
        mode.handle_event(press(' '));

        mode.handle_event(press('p'));
        assert!(mode.controller.is_paused());
        mode.handle_event(press('p'));
        assert!(!mode.controller.is_paused());
    }

    #[test]
    fn test_restart_clears_key_log() {
        let mut mode = PlayMode::new(GameConfig::default()).unwrap();
        mode.handle_event(press(' '));
        mode.handle_event(press('h'));
        mode.handle_event(press('j'));
        assert_eq!(mode.input.key_log().len(), 2);

        mode.handle_event(press('q'));
        mode.handle_event(press(' '));
        assert!(mode.input.key_log().is_empty());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let config = GameConfig {
            starting_level: 50,
            max_level: 25,
            ..Default::default()
        };
        assert!(PlayMode::new(config).is_err());
    }
}
