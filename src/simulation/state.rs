//! Immutable game-state snapshots
//!
//! A `GameState` is created once by the kernel initializer and thereafter
//! only replaced by new snapshots returned from kernel functions, never
//! mutated in place. It is discarded on restart.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, Point, Status};

/// Full game snapshot
///
/// The snake is head-first and never contains duplicate cells; a duplicate
/// signals a bug upstream, not a legal configuration. `obstacles` is
/// append-only over the life of a game. The timing annotations are written
/// by the external driving loop and never read by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Snake body, head first
    pub snake: Vec<Point>,
    /// Current heading (pending heading between `apply_direction` and `step`)
    pub direction: Direction,
    pub food: Point,
    pub obstacles: AHashSet<Point>,
    /// Most recently spawned obstacle, for diagnostics
    pub last_spawned_obstacle: Option<Point>,
    pub score: u32,
    pub fruits_eaten: u32,
    pub status: Status,
    /// Externally-supplied annotation; stored, never enforced by the core
    pub time_since_last_fruit: Option<u64>,
    /// Externally-supplied annotation; stored, never enforced by the core
    pub timeout_ms: Option<u64>,
}

impl GameState {
    pub fn head(&self) -> Point {
        self.snake[0]
    }

    pub fn tail(&self) -> Point {
        self.snake[self.snake.len() - 1]
    }

    /// True iff `p` is a body cell excluding the tail
    ///
    /// The tail vacates on the tick being considered, so it is not a
    /// collision target.
    pub fn hits_body(&self, p: Point) -> bool {
        self.snake[..self.snake.len() - 1].contains(&p)
    }

    /// Every occupied cell: snake body plus obstacles
    pub fn occupied(&self) -> AHashSet<Point> {
        let mut occ = self.obstacles.clone();
        occ.extend(self.snake.iter().copied());
        occ
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> GameState {
        GameState {
            snake: vec![Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)],
            direction: Direction::Right,
            food: Point::new(7, 5),
            obstacles: AHashSet::from_iter([Point::new(1, 1)]),
            last_spawned_obstacle: None,
            score: 0,
            fruits_eaten: 0,
            status: Status::Running,
            time_since_last_fruit: None,
            timeout_ms: None,
        }
    }

    #[test]
    fn test_head_and_tail() {
        let state = sample_state();
        assert_eq!(state.head(), Point::new(5, 5));
        assert_eq!(state.tail(), Point::new(3, 5));
    }

    #[test]
    fn test_hits_body_excludes_tail() {
        let state = sample_state();
        assert!(state.hits_body(Point::new(4, 5)));
        assert!(state.hits_body(Point::new(5, 5)));
        assert!(!state.hits_body(Point::new(3, 5)));
    }

    #[test]
    fn test_occupied_unions_snake_and_obstacles() {
        let state = sample_state();
        let occ = state.occupied();
        assert_eq!(occ.len(), 4);
        assert!(occ.contains(&Point::new(1, 1)));
        assert!(occ.contains(&Point::new(3, 5)));
    }
}
