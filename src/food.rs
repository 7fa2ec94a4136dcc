use rand::Rng;

use crate::config::BoardConfig;
use crate::snake::Point;

/// Picks a food cell among the open cells, or `None` when the board is full.
///
/// Open cells are enumerated in row-major order (`y` outer, `x` inner) and
/// one is chosen by scaling a uniform `[0,1)` draw over the candidate count,
/// so the same random source always lands on the same cell for a given
/// occupancy.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(
    snake: &[Point],
    config: BoardConfig,
    rng: &mut R,
) -> Option<Point> {
    let mut open_cells = Vec::with_capacity(config.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(config.height) {
        for x in 0..i32::from(config.width) {
            let cell = Point { x, y };
            if !snake.contains(&cell) {
                open_cells.push(cell);
            }
        }
    }

    if open_cells.is_empty() {
        return None;
    }

    Some(open_cells[unit_index(open_cells.len(), rng)])
}

/// Maps a uniform `[0,1)` draw onto `0..len` by scale-and-floor.
///
/// The draw is clamped just below 1.0 so the index never reaches `len`.
fn unit_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> usize {
    let unit: f64 = rng.gen_range(0.0..1.0);
    (unit.clamp(0.0, 0.999_999) * len as f64) as usize
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    use crate::config::BoardConfig;
    use crate::snake::Point;

    use super::place_food;

    fn small_board() -> BoardConfig {
        BoardConfig {
            width: 4,
            height: 4,
            initial_length: 2,
        }
    }

    #[test]
    fn food_never_lands_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = BoardConfig {
            width: 8,
            height: 6,
            initial_length: 3,
        };
        let snake = vec![
            Point { x: 0, y: 0 },
            Point { x: 1, y: 0 },
            Point { x: 2, y: 0 },
        ];

        for _ in 0..200 {
            let food = place_food(&snake, config, &mut rng).expect("board has open cells");
            assert!(!snake.contains(&food));
            assert!(food.in_bounds(config));
        }
    }

    #[test]
    fn full_board_yields_no_food() {
        let config = small_board();
        let mut snake = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                snake.push(Point { x, y });
            }
        }

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(place_food(&snake, config, &mut rng), None);
    }

    #[test]
    fn zero_draw_picks_first_open_cell_in_row_major_order() {
        // A constant zero source must select the first candidate.
        let mut rng = StepRng::new(0, 0);
        let snake = vec![Point { x: 0, y: 0 }];

        let food = place_food(&snake, small_board(), &mut rng);
        assert_eq!(food, Some(Point { x: 1, y: 0 }));
    }

    #[test]
    fn near_one_draw_picks_last_open_cell() {
        // A source pinned at the top of [0,1) must select the last candidate.
        let mut rng = StepRng::new(u64::MAX, 0);
        let snake = vec![Point { x: 3, y: 3 }];

        let food = place_food(&snake, small_board(), &mut rng);
        assert_eq!(food, Some(Point { x: 2, y: 3 }));
    }
}
