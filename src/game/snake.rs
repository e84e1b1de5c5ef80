use super::grid::{Direction, Grid, Position};

/// Outcome of a single movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    WallCollision,
    SelfCollision,
}

impl StepOutcome {
    pub fn is_collision(&self) -> bool {
        matches!(self, StepOutcome::WallCollision | StepOutcome::SelfCollision)
    }
}

/// The snake: body segments, active direction, and a single-slot buffer
/// for the next direction change.
///
/// The body is ordered head-first; it is replaced wholesale on each step,
/// never mutated piecemeal by anything outside this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Position>,
    direction: Direction,
    pending: Option<Direction>,
}

impl Snake {
    /// Place an initial body of `length` segments centered on the grid,
    /// head at the center and the rest extending downward, facing up.
    pub fn new(grid: Grid, length: usize) -> Self {
        let center = grid.center();
        let body = (0..length as i32)
            .map(|i| Position::new(center.r + i, center.c))
            .collect();

        Self {
            body,
            direction: Direction::Up,
            pending: None,
        }
    }

    /// Buffer a direction change for the next step.
    ///
    /// A request that reverses the *current* direction is silently dropped;
    /// a newer valid request overwrites an older buffered one.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending = Some(direction);
        }
    }

    /// Advance one cell: apply the buffered direction, then move.
    ///
    /// On a collision nothing is mutated (the buffered direction has
    /// already been consumed, which is what lets a grace-period tick
    /// honor a rescuing turn).
    pub fn step(&mut self, grid: Grid, grow: bool) -> StepOutcome {
        if let Some(next) = self.pending.take() {
            self.direction = next;
        }

        let new_head = self.head().moved_in_direction(self.direction);

        if !grid.contains(new_head) {
            return StepOutcome::WallCollision;
        }

        // The tail cell vacates this tick unless the snake is growing, so
        // the head may move into it.
        let body_to_check = if grow {
            &self.body[..]
        } else {
            &self.body[..self.body.len() - 1]
        };

        if body_to_check.contains(&new_head) {
            return StepOutcome::SelfCollision;
        }

        let mut new_body = Vec::with_capacity(self.body.len() + 1);
        new_body.push(new_head);
        if grow {
            new_body.extend_from_slice(&self.body);
        } else {
            new_body.extend_from_slice(&self.body[..self.body.len() - 1]);
        }
        self.body = new_body;

        StepOutcome::Continue
    }

    /// Remove the body entirely; used when a game is quit. The snake is
    /// re-created from scratch on the next game start.
    pub fn clear(&mut self) {
        self.body.clear();
        self.direction = Direction::Up;
        self.pending = None;
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The direction the head is facing.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The direction the tail points, derived from the last two segments
    /// (the tail points away from its neighbor). Falls back to the active
    /// direction for a one-segment snake.
    pub fn tail_direction(&self) -> Direction {
        if self.body.len() < 2 {
            return self.direction;
        }

        let tail = self.body[self.body.len() - 1];
        let before = self.body[self.body.len() - 2];

        if tail.r < before.r {
            Direction::Up
        } else if tail.r > before.r {
            Direction::Down
        } else if tail.c < before.c {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}
