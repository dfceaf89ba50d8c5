//! Per-direction move verdicts
//!
//! `evaluate_move` is the shared toolkit every policy consumes: for one
//! candidate heading it reports whether food is reachable, whether eating
//! it would trap the snake, and how much room remains afterwards. A `None`
//! verdict means the move is illegal (reverse of the heading, or an
//! immediate collision), so policies may treat every returned verdict as a
//! legal move.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, Point};
use crate::evaluator::pathfinding::{bfs_path_with_timing, flood_fill_count};
use crate::simulation::state::GameState;
use crate::spatial::torus::{advance, direction_between};

/// Verdict for one candidate heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveEvaluation {
    pub direction: Direction,
    /// Inclusive node count of the shortest timed path to food, or None
    /// when food is unreachable after this move
    pub path_length: Option<usize>,
    /// Heuristic: after walking the whole path and eating, can the snake
    /// still reach its own tail? Not a survivability proof.
    pub safe: bool,
    /// Flood-fill cell count from the head after the move (after eating,
    /// when a path exists)
    pub space: usize,
}

/// Blocked set for breathing-room estimates: body minus tail, plus obstacles
fn space_blocked(snake: &[Point], obstacles: &AHashSet<Point>) -> AHashSet<Point> {
    let mut blocked = obstacles.clone();
    blocked.extend(snake[..snake.len() - 1].iter().copied());
    blocked
}

/// Hypothetical snake after stepping `direction`, growing exactly as the
/// kernel's step would
fn snake_after_move(state: &GameState, next_head: Point) -> Vec<Point> {
    let mut snake = Vec::with_capacity(state.snake.len() + 1);
    snake.push(next_head);
    snake.extend(state.snake.iter().copied());
    if next_head != state.food {
        snake.pop();
    }
    snake
}

/// Snake after walking `path` to the food, growing only on the final
/// food-arrival step
fn snake_after_path(snake: &[Point], path: &[Point]) -> Vec<Point> {
    let mut snake = snake.to_vec();
    let last = path.len() - 1;
    for (i, &p) in path.iter().enumerate().skip(1) {
        snake.insert(0, p);
        if i != last {
            snake.pop();
        }
    }
    snake
}

/// Evaluate one candidate heading against the current state
///
/// Mirrors the kernel's legality rules exactly: reversing the heading or
/// stepping onto body-minus-tail or an obstacle yields `None`, never a
/// verdict. See [`MoveEvaluation`] for the tuple contents.
pub fn evaluate_move(state: &GameState, size: i32, direction: Direction) -> Option<MoveEvaluation> {
    if direction.is_opposite(state.direction) {
        return None;
    }
    let next_head = advance(state.head(), direction, size);
    if state.hits_body(next_head) || state.obstacles.contains(&next_head) {
        return None;
    }

    let hypothetical = snake_after_move(state, next_head);

    match bfs_path_with_timing(next_head, state.food, size, &hypothetical, &state.obstacles) {
        Some(path) => {
            let after = snake_after_path(&hypothetical, &path);
            let head = after[0];
            let tail = after[after.len() - 1];
            let safe =
                bfs_path_with_timing(head, tail, size, &after, &state.obstacles).is_some();
            let space = flood_fill_count(head, size, &space_blocked(&after, &state.obstacles));
            Some(MoveEvaluation {
                direction,
                path_length: Some(path.len()),
                safe,
                space,
            })
        }
        None => {
            let space = flood_fill_count(
                next_head,
                size,
                &space_blocked(&hypothetical, &state.obstacles),
            );
            Some(MoveEvaluation {
                direction,
                path_length: None,
                safe: false,
                space,
            })
        }
    }
}

/// Does any timed path exist from the head to the food?
pub fn is_food_reachable(state: &GameState, size: i32) -> bool {
    bfs_path_with_timing(state.head(), state.food, size, &state.snake, &state.obstacles).is_some()
}

/// First step of a timed path from head to tail
///
/// The tail-chase fallback policies use when food is out of reach. Never
/// returns the reverse of the current heading.
pub fn direction_to_tail(state: &GameState, size: i32) -> Option<Direction> {
    let path =
        bfs_path_with_timing(state.head(), state.tail(), size, &state.snake, &state.obstacles)?;
    let first_step = *path.get(1)?;
    let dir = direction_between(state.head(), first_step, size)?;
    if dir.is_opposite(state.direction) {
        return None;
    }
    Some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Status;

    fn sample_state() -> GameState {
        // Three-cell snake heading right on an open board.
        GameState {
            snake: vec![Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)],
            direction: Direction::Right,
            food: Point::new(7, 5),
            obstacles: AHashSet::new(),
            last_spawned_obstacle: None,
            score: 0,
            fruits_eaten: 0,
            status: Status::Running,
            time_since_last_fruit: None,
            timeout_ms: None,
        }
    }

    #[test]
    fn test_straight_shot_verdict() {
        let state = sample_state();
        let verdict = evaluate_move(&state, 10, Direction::Right).unwrap();
        assert_eq!(verdict.path_length, Some(2));
        assert!(verdict.safe);
        assert!(verdict.space > 0);
    }

    #[test]
    fn test_reverse_heading_rejected() {
        let state = sample_state();
        assert!(evaluate_move(&state, 10, Direction::Left).is_none());
    }

    #[test]
    fn test_collision_moves_rejected() {
        let mut state = sample_state();
        state.obstacles.insert(Point::new(5, 4));
        // Up hits the obstacle; Left is the reverse; Right and Down remain.
        assert!(evaluate_move(&state, 10, Direction::Up).is_none());
        assert!(evaluate_move(&state, 10, Direction::Right).is_some());
        assert!(evaluate_move(&state, 10, Direction::Down).is_some());
    }

    #[test]
    fn test_verdicts_never_illegal() {
        let mut state = sample_state();
        state.obstacles.insert(Point::new(6, 5));
        for dir in Direction::ALL {
            if let Some(verdict) = evaluate_move(&state, 10, dir) {
                assert!(!verdict.direction.is_opposite(state.direction));
                let head = advance(state.head(), verdict.direction, 10);
                assert!(!state.hits_body(head));
                assert!(!state.obstacles.contains(&head));
            }
        }
    }

    #[test]
    fn test_eating_adjacent_food_grows_before_safety_check() {
        let mut state = sample_state();
        state.food = Point::new(6, 5);
        let verdict = evaluate_move(&state, 10, Direction::Right).unwrap();
        // Head lands on food: the path is the single arrival cell.
        assert_eq!(verdict.path_length, Some(1));
        assert!(verdict.safe);
    }

    #[test]
    fn test_unreachable_food_reports_space_from_hypothetical_head() {
        let mut state = sample_state();
        // Seal the food inside four obstacles.
        state.food = Point::new(0, 0);
        for p in [(0, 1), (1, 0), (0, 9), (9, 0)] {
            state.obstacles.insert(Point::new(p.0, p.1));
        }
        let verdict = evaluate_move(&state, 10, Direction::Right).unwrap();
        assert_eq!(verdict.path_length, None);
        assert!(!verdict.safe);
        assert!(verdict.space > 0);
    }

    #[test]
    fn test_is_food_reachable_open_board() {
        let state = sample_state();
        assert!(is_food_reachable(&state, 10));
    }

    #[test]
    fn test_direction_to_tail_simple() {
        let state = sample_state();
        let dir = direction_to_tail(&state, 10).unwrap();
        assert!(!dir.is_opposite(state.direction));
    }

    #[test]
    fn test_direction_to_tail_none_for_headless_snake() {
        let mut state = sample_state();
        state.snake = vec![Point::new(5, 5)];
        // Head and tail coincide: there is no step to take.
        assert_eq!(direction_to_tail(&state, 10), None);
    }
}
