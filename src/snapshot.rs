use rand::Rng;
use serde::Serialize;

use crate::game::GameState;
use crate::input::Direction;
use crate::snake::Point;

/// Session phase reported to external harnesses.
///
/// `Closed` and `Paused` are host flags layered on top of the engine; the
/// engine itself only distinguishes active from game-over.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    Closed,
    GameOver,
    Paused,
    Playing,
}

impl SessionMode {
    /// Derives the reported mode from the host flags and the engine state.
    #[must_use]
    pub fn current(open: bool, paused: bool, state: &GameState) -> Self {
        if !open {
            Self::Closed
        } else if state.game_over {
            Self::GameOver
        } else if paused {
            Self::Paused
        } else {
            Self::Playing
        }
    }
}

#[derive(Debug, Serialize)]
struct CoordinateSystem {
    origin: &'static str,
    #[serde(rename = "xAxis")]
    x_axis: &'static str,
    #[serde(rename = "yAxis")]
    y_axis: &'static str,
}

// The coordinate convention is part of the wire contract so harnesses never
// have to guess which way y grows.
const COORDINATE_SYSTEM: CoordinateSystem = CoordinateSystem {
    origin: "top-left",
    x_axis: "right",
    y_axis: "down",
};

#[derive(Debug, Serialize)]
struct BoardSize {
    width: u16,
    height: u16,
}

/// Wire shape of one observable game snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    mode: SessionMode,
    coordinate_system: CoordinateSystem,
    board: BoardSize,
    snake: &'a [Point],
    food: Option<Point>,
    score: u32,
    direction: Direction,
    tick: u64,
}

/// Encodes the observable game state as a single JSON line.
pub fn render_game_to_text(state: &GameState, mode: SessionMode) -> serde_json::Result<String> {
    serde_json::to_string(&Snapshot {
        mode,
        coordinate_system: COORDINATE_SYSTEM,
        board: BoardSize {
            width: state.config.width,
            height: state.config.height,
        },
        snake: &state.snake,
        food: state.food,
        score: state.score,
        direction: state.direction,
        tick: state.tick,
    })
}

/// Advances the engine as if `ms` milliseconds of tick timer had elapsed.
///
/// Takes at least one step regardless of `ms`, and stops early once the game
/// is over, matching a driving loop that skips ticks on a terminal state.
#[must_use]
pub fn advance_by_millis<R: Rng + ?Sized>(
    state: &GameState,
    ms: u64,
    tick_interval_ms: u64,
    rng: &mut R,
) -> GameState {
    let interval = tick_interval_ms.max(1);
    let steps = ((ms as f64 / interval as f64).round() as u64).max(1);

    let mut next = state.clone();
    for _ in 0..steps {
        if next.game_over {
            break;
        }
        next = next.advance(rng);
    }

    next
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::Value;

    use crate::config::BoardConfig;
    use crate::game::GameState;
    use crate::input::Direction;
    use crate::snake::Point;

    use super::{SessionMode, advance_by_millis, render_game_to_text};

    fn sample_state() -> GameState {
        GameState {
            config: BoardConfig {
                width: 6,
                height: 5,
                initial_length: 3,
            },
            snake: vec![
                Point { x: 2, y: 2 },
                Point { x: 1, y: 2 },
                Point { x: 0, y: 2 },
            ],
            direction: Direction::Right,
            food: Some(Point { x: 4, y: 1 }),
            score: 3,
            tick: 17,
            game_over: false,
        }
    }

    #[test]
    fn mode_derivation_matches_host_flags() {
        let mut state = sample_state();

        assert_eq!(SessionMode::current(false, false, &state), SessionMode::Closed);
        assert_eq!(SessionMode::current(false, true, &state), SessionMode::Closed);
        assert_eq!(SessionMode::current(true, true, &state), SessionMode::Paused);
        assert_eq!(SessionMode::current(true, false, &state), SessionMode::Playing);

        state.game_over = true;
        assert_eq!(SessionMode::current(true, true, &state), SessionMode::GameOver);
    }

    #[test]
    fn snapshot_serializes_the_documented_shape() {
        let state = sample_state();
        let text = render_game_to_text(&state, SessionMode::Playing)
            .expect("snapshot must serialize");
        let value: Value = serde_json::from_str(&text).expect("snapshot must be valid JSON");

        assert_eq!(value["mode"], "playing");
        assert_eq!(value["coordinateSystem"]["origin"], "top-left");
        assert_eq!(value["coordinateSystem"]["xAxis"], "right");
        assert_eq!(value["coordinateSystem"]["yAxis"], "down");
        assert_eq!(value["board"]["width"], 6);
        assert_eq!(value["board"]["height"], 5);
        assert_eq!(value["snake"][0]["x"], 2);
        assert_eq!(value["snake"][0]["y"], 2);
        assert_eq!(value["food"]["x"], 4);
        assert_eq!(value["score"], 3);
        assert_eq!(value["direction"], "right");
        assert_eq!(value["tick"], 17);
    }

    #[test]
    fn game_over_mode_uses_snake_case_on_the_wire() {
        let mut state = sample_state();
        state.game_over = true;

        let text = render_game_to_text(&state, SessionMode::GameOver)
            .expect("snapshot must serialize");
        let value: Value = serde_json::from_str(&text).expect("snapshot must be valid JSON");

        assert_eq!(value["mode"], "game_over");
    }

    #[test]
    fn absent_food_serializes_as_null() {
        let mut state = sample_state();
        state.food = None;

        let text = render_game_to_text(&state, SessionMode::Playing)
            .expect("snapshot must serialize");
        let value: Value = serde_json::from_str(&text).expect("snapshot must be valid JSON");

        assert!(value["food"].is_null());
    }

    #[test]
    fn advance_by_millis_rounds_to_tick_steps() {
        let mut rng = StdRng::seed_from_u64(21);
        let state = sample_state();

        // 250ms at 120ms per tick rounds to two steps.
        let after = advance_by_millis(&state, 250, 120, &mut rng);
        assert_eq!(after.tick, 19);

        // 300ms rounds half-up to three steps.
        let mut rng = StdRng::seed_from_u64(21);
        let after = advance_by_millis(&state, 300, 120, &mut rng);
        assert_eq!(after.tick, 20);
    }

    #[test]
    fn advance_by_millis_always_takes_at_least_one_step() {
        let mut rng = StdRng::seed_from_u64(21);
        let state = sample_state();

        let after = advance_by_millis(&state, 0, 120, &mut rng);
        assert_eq!(after.tick, 18);
    }

    #[test]
    fn advance_by_millis_stops_at_game_over() {
        let mut rng = StdRng::seed_from_u64(21);
        // Two cells from the right wall heading right: the run ends after
        // three of the requested hundred steps.
        let state = GameState {
            config: BoardConfig {
                width: 6,
                height: 5,
                initial_length: 2,
            },
            snake: vec![Point { x: 3, y: 4 }, Point { x: 2, y: 4 }],
            direction: Direction::Right,
            food: Some(Point { x: 0, y: 0 }),
            score: 0,
            tick: 0,
            game_over: false,
        };

        let after = advance_by_millis(&state, 100 * 120, 120, &mut rng);

        assert!(after.game_over);
        assert_eq!(after.tick, 3);
    }
}
