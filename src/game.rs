use rand::Rng;

use crate::config::BoardConfig;
use crate::food::place_food;
use crate::input::Direction;
use crate::snake::{Point, initial_snake};

/// Complete snapshot of one game in progress.
///
/// States are plain values: every transition takes the current state and
/// returns the next one, and the caller owns replacing its reference. Two
/// phases exist — active and terminal (`game_over`), and the terminal phase
/// absorbs all further ticks.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub config: BoardConfig,
    /// Body segments, head first; consecutive segments occupy adjacent cells.
    pub snake: Vec<Point>,
    /// Heading applied on the next tick.
    pub direction: Direction,
    /// Current food cell, or `None` when no free cell remains.
    pub food: Option<Point>,
    pub score: u32,
    pub tick: u64,
    /// Once true the state is terminal and the snake no longer moves.
    pub game_over: bool,
}

impl GameState {
    /// Creates a fresh game from `config`, clamping out-of-range values.
    ///
    /// The snake starts horizontally at the grid center heading right, with
    /// food placed on a free cell drawn from `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Self {
        let config = config.normalized();
        let snake = initial_snake(config);
        let food = place_food(&snake, config, rng);

        Self {
            config,
            snake,
            direction: Direction::Right,
            food,
            score: 0,
            tick: 0,
            game_over: false,
        }
    }

    /// Requests a heading change for the next tick.
    ///
    /// Requests equal or opposite to the current heading are absorbed
    /// unchanged, which rules out instant 180° self-collisions. The terminal
    /// flag is not consulted here; the front end gates input instead.
    #[must_use]
    pub fn set_direction(&self, next: Direction) -> Self {
        if next == self.direction || next.is_opposite(self.direction) {
            return self.clone();
        }

        Self {
            direction: next,
            ..self.clone()
        }
    }

    /// Advances the simulation by one tick.
    #[must_use]
    pub fn advance<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        // Terminal states absorb further ticks without counting them. A
        // missing food cell means the board is already full and forces the
        // same terminal transition.
        let Some(food) = self.food.filter(|_| !self.game_over) else {
            return Self {
                game_over: true,
                ..self.clone()
            };
        };

        let next_head = self.head().stepped(self.direction);
        let will_grow = next_head == food;
        // On a growing tick the tail keeps its cell, so the whole body
        // blocks; otherwise the tail vacates and is excluded.
        let blocking = if will_grow {
            &self.snake[..]
        } else {
            &self.snake[..self.snake.len() - 1]
        };

        if !next_head.in_bounds(self.config) || blocking.contains(&next_head) {
            return Self {
                tick: self.tick + 1,
                game_over: true,
                ..self.clone()
            };
        }

        // The carried-over body is exactly the blocking set: the full snake
        // when growing, the snake minus its tail when slithering.
        let mut next_snake = Vec::with_capacity(blocking.len() + 1);
        next_snake.push(next_head);
        next_snake.extend_from_slice(blocking);

        let next_food = if will_grow {
            place_food(&next_snake, self.config, rng)
        } else {
            self.food
        };

        Self {
            config: self.config,
            snake: next_snake,
            direction: self.direction,
            food: next_food,
            score: if will_grow { self.score + 1 } else { self.score },
            tick: self.tick + 1,
            // Growth onto the last free cell fills the board; that is the
            // terminal "perfect" state, not an error.
            game_over: next_food.is_none(),
        }
    }

    /// Starts a fresh game with the same board configuration.
    #[must_use]
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(self.config, rng)
    }

    /// Returns the head position.
    #[must_use]
    pub fn head(&self) -> Point {
        *self
            .snake
            .first()
            .expect("snake body must always contain at least one segment")
    }
}
