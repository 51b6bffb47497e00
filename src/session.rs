use std::time::Duration;

use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::food::Food;
use crate::grid::{Direction, Grid};
use crate::score::ScoreStore;
use crate::snake::{MoveOutcome, Snake};

// absorbs rounding in the accumulated tick clock
const CLOCK_EPSILON: f64 = 1e-9;

/// What happened during one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    /// The snake bit itself; score and speed are back at their initial values.
    Collided,
    Ate,
}

/// One play session: a snake, its food and the running score.
pub struct Session<R = StdRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    speed: u32,
    best_score: u32,
    initial_speed: u32,
    speed_increment: u32,
    max_speed: Option<u32>,
    store: ScoreStore,
    last_tick_at: f64,
}

impl Session<StdRng> {
    pub fn new(config: &GameConfig, store: ScoreStore, now: f64) -> Self {
        Session::new_with_rng(config, store, now, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn new_with_rng(config: &GameConfig, store: ScoreStore, now: f64, mut rng: R) -> Self {
        let grid = config.grid();
        let snake = Snake::new(grid, &mut rng);
        let food = Food::new(grid, &mut rng);
        let best_score = store.load();
        info!("starting session, best score {}", best_score);
        Self {
            rng,
            grid,
            snake,
            food,
            score: 0,
            speed: config.initial_speed,
            best_score,
            initial_speed: config.initial_speed,
            speed_increment: config.speed_increment,
            max_speed: config.max_speed,
            store,
            last_tick_at: now,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Ticks per second.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Time between two ticks at the current speed.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval_secs())
    }

    fn interval_secs(&self) -> f64 {
        1.0 / f64::from(self.speed.max(1))
    }

    pub fn turn(&mut self, direction: Direction) {
        self.snake.turn(direction);
    }

    /// Advances by one tick if a full interval has passed on the tick clock.
    /// The clock moves by whole intervals so the rate stays at `speed` per
    /// second; when it lags by more than an interval it jumps to `now`.
    pub fn step(&mut self, now: f64) -> Option<TickOutcome> {
        let interval = self.interval_secs();
        if now - self.last_tick_at + CLOCK_EPSILON < interval {
            return None;
        }
        self.last_tick_at += interval;
        if now - self.last_tick_at >= interval {
            self.last_tick_at = now;
        }
        Some(self.tick())
    }

    pub fn tick(&mut self) -> TickOutcome {
        let moved = self.snake.move_step(&mut self.rng);
        if moved.resets_score() {
            self.score = 0;
            self.speed = self.initial_speed;
        }
        if moved == MoveOutcome::Collided {
            debug!("self-collision, snake reset");
            return TickOutcome::Collided;
        }

        if self.snake.head() != self.food.position() {
            return TickOutcome::Moved;
        }

        self.snake.grow();
        self.food.randomize_position(&mut self.rng);
        self.score += 1;
        if self.score > self.best_score {
            self.best_score = self.score;
            info!("new best score {}", self.best_score);
            if let Err(e) = self.store.save(self.best_score) {
                error!("error saving best score: {}", e);
            }
        }
        self.speed = self.next_speed();
        debug!("food eaten, score {} speed {}", self.score, self.speed);
        TickOutcome::Ate
    }

    fn next_speed(&self) -> u32 {
        let speed = self.speed.saturating_add(self.speed_increment);
        match self.max_speed {
            Some(max) => speed.min(max),
            None => speed,
        }
    }
}
