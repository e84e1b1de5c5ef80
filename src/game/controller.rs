use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::{ConfigError, GameConfig};
use super::food::FoodField;
use super::grid::{Direction, Grid, Position};
use super::snake::Snake;

/// Lifecycle of one game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No game running; the only state with no active scheduler.
    Waiting,
    Started,
    GameOver,
    GameWon,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::GameWon)
    }
}

/// What happened during one call to [`GameController::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether a tick was committed this frame
    pub ticked: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Whether this tick moved the game into a terminal status
    pub ended: bool,
}

impl TickResult {
    const IDLE: TickResult = TickResult {
        ticked: false,
        ate_food: false,
        ended: false,
    };
}

/// Read-only view of the game state handed to the renderer each frame.
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub status: GameStatus,
    pub paused: bool,
    pub grid: Grid,
    pub snake_body: &'a [Position],
    pub head_direction: Direction,
    pub tail_direction: Direction,
    pub food: &'a [Position],
    pub score: u32,
    pub level: u32,
    pub final_score: Option<u32>,
}

/// The game loop controller: owns all mutable simulation state and
/// advances it on a variable-rate clock.
///
/// The host calls [`advance`](Self::advance) once per frame with the frame
/// timestamp; a tick is committed only once `1000 / level` milliseconds
/// have elapsed since the last committed tick, so the tick rate in ticks
/// per second equals the current level. Within one committed tick the
/// order is fixed: buffered direction, movement, collision, food, score.
pub struct GameController {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: FoodField,
    status: GameStatus,
    paused: bool,
    score: u32,
    level: u32,
    foods_eaten_this_level: u32,
    final_score: Option<u32>,
    should_grow: bool,
    collision_pending: bool,
    last_tick: Option<Instant>,
    rng: StdRng,
}

impl GameController {
    /// Create a controller; the configuration is validated here so an
    /// invalid one can never reach `started`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a controller with a seeded RNG for deterministic food
    /// placement in tests.
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols);

        Ok(Self {
            snake: Snake::new(grid, config.initial_snake_size),
            food: FoodField::new(),
            status: GameStatus::Waiting,
            paused: false,
            score: 0,
            level: config.starting_level,
            foods_eaten_this_level: 0,
            final_score: None,
            should_grow: false,
            collision_pending: false,
            last_tick: None,
            grid,
            config,
            rng,
        })
    }

    /// Start a new game. Valid from `waiting` or either terminal state;
    /// restarting from a terminal state resets everything in one call.
    /// Ignored while a game is already running.
    pub fn start_game(&mut self) {
        if self.status == GameStatus::Started {
            return;
        }

        self.snake = Snake::new(self.grid, self.config.initial_snake_size);
        self.food.spawn(
            &mut self.rng,
            self.grid,
            self.snake.body(),
            self.config.initial_food_count,
        );
        self.score = 0;
        self.level = self.config.starting_level;
        self.foods_eaten_this_level = 0;
        self.final_score = None;
        self.should_grow = false;
        self.collision_pending = false;
        self.paused = false;
        self.last_tick = None;
        self.status = GameStatus::Started;
    }

    /// Stop the current game and return to `waiting`: cancels the
    /// scheduler and clears snake and food. Idempotent; a no-op while
    /// already `waiting`.
    pub fn quit_game(&mut self) {
        if self.status == GameStatus::Waiting {
            return;
        }

        self.snake.clear();
        self.food.clear();
        self.final_score = None;
        self.paused = false;
        self.last_tick = None;
        self.status = GameStatus::Waiting;
    }

    /// Halt or resume tick production without touching any game state.
    /// Only meaningful while `started`. Resuming re-baselines the clock
    /// so no catch-up ticks fire.
    pub fn toggle_pause(&mut self) {
        if self.status != GameStatus::Started {
            return;
        }

        self.paused = !self.paused;
        if !self.paused {
            self.last_tick = None;
        }
    }

    /// Forward a direction request to the snake's pending-direction
    /// buffer. Accepted only while `started`; the snake itself drops
    /// 180-degree reversals. Buffering works while paused, taking effect
    /// on the first tick after resume.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Started {
            self.snake.set_pending_direction(direction);
        }
    }

    /// Advance the clock to `now`, committing at most one tick.
    ///
    /// Called once per frame. The first call after a start or resume only
    /// records the baseline timestamp; leftover fractional time past one
    /// tick interval is dropped rather than carried, so the loop locks to
    /// the frame cadence instead of drifting ahead of it.
    pub fn advance(&mut self, now: Instant) -> TickResult {
        if self.status != GameStatus::Started || self.paused {
            return TickResult::IDLE;
        }

        let Some(baseline) = self.last_tick else {
            self.last_tick = Some(now);
            return TickResult::IDLE;
        };

        if now.duration_since(baseline) < self.tick_interval() {
            return TickResult::IDLE;
        }

        self.last_tick = Some(now);
        self.commit_tick()
    }

    /// Milliseconds per tick: `1000 / level`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.level as f64)
    }

    fn commit_tick(&mut self) -> TickResult {
        let grow = self.should_grow;
        self.should_grow = false;

        let outcome = self.snake.step(self.grid, grow);

        if outcome.is_collision() {
            // The snake did not move; re-arm growth for the retry tick.
            self.should_grow = grow;

            if self.config.collision_grace && !self.collision_pending {
                self.collision_pending = true;
                return TickResult {
                    ticked: true,
                    ate_food: false,
                    ended: false,
                };
            }

            self.end_game(GameStatus::GameOver);
            return TickResult {
                ticked: true,
                ate_food: false,
                ended: true,
            };
        }

        self.collision_pending = false;

        let head = self.snake.head();
        let mut ate_food = false;

        if self.food.contains(head) {
            ate_food = true;
            self.food.consume(head);
            // Growth is one tick delayed: the segment is added by the
            // next step.
            self.should_grow = true;
            self.foods_eaten_this_level += 1;
            // Points are awarded at the level current before any level-up
            // this same food triggers.
            self.score += self.level;

            if self.foods_eaten_this_level >= self.config.foods_per_level
                && self.level < self.config.max_level
            {
                self.level += 1;
                self.foods_eaten_this_level = 0;
            }

            self.food
                .spawn(&mut self.rng, self.grid, self.snake.body(), 1);

            if let Some(target) = self.config.target_score {
                if self.score >= target {
                    self.end_game(GameStatus::GameWon);
                    return TickResult {
                        ticked: true,
                        ate_food: true,
                        ended: true,
                    };
                }
            }
        }

        TickResult {
            ticked: true,
            ate_food,
            ended: false,
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        debug_assert!(status.is_terminal());
        self.status = status;
        self.final_score = Some(self.score);
        self.last_tick = None;
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            status: self.status,
            paused: self.paused,
            grid: self.grid,
            snake_body: self.snake.body(),
            head_direction: self.snake.direction(),
            tail_direction: self.snake.tail_direction(),
            food: self.food.positions(),
            score: self.score,
            level: self.level,
            final_score: self.final_score,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }
}
