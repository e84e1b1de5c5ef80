//! Derived scoring view: elapsed wall-clock time, keystroke count, and
//! the frozen final score. The only state owned here is the timer; the
//! rest is read from the controller snapshot and the key log.

use std::time::{Duration, Instant};

use crate::game::GameSnapshot;
use crate::input::KeyLog;

/// One read-only scoring snapshot for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub elapsed: Duration,
    pub total_keystrokes: usize,
    pub final_score: Option<u32>,
}

/// Wall-clock timer for one game session.
///
/// Runs from game start until the game ends or is quit; pausing the game
/// does not stop it.
pub struct ScoreBoard {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            started_at: None,
            accumulated: Duration::ZERO,
        }
    }

    /// Reset and start a fresh timer; called when a new game begins.
    pub fn start(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = Some(Instant::now());
    }

    /// Freeze the timer; called on game over, win, or quit. Idempotent.
    pub fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += started_at.elapsed();
        }
    }

    pub fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self.accumulated + started_at.elapsed(),
            None => self.accumulated,
        }
    }

    /// Elapsed time as `mm:ss`.
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }

    /// Assemble the derived view from the timer, the key log, and the
    /// controller's frozen final score.
    pub fn summarize(&self, key_log: &KeyLog, snapshot: &GameSnapshot<'_>) -> ScoreSummary {
        ScoreSummary {
            elapsed: self.elapsed(),
            total_keystrokes: key_log.len(),
            final_score: snapshot.final_score,
        }
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}
