//! Simulation kernel - the authoritative state machine
//!
//! Lifecycle: `Ready → Running ⇄ Paused → GameOver` (terminal).
//!
//! Each `step` advances one tick:
//! 1. Compute the wrapped next head cell.
//! 2. Collision check against body-minus-tail and obstacles.
//! 3. Move, growing by one on food.
//! 4. On growth, every [`OBSTACLE_CADENCE`]th fruit spawns one obstacle.
//! 5. On growth, re-place food; a full board ends the game.
//!
//! Every function is a pure snapshot-in/snapshot-out transformation.
//! Identical state, size and rng sequence produce bit-identical output,
//! which reproducible benchmarking relies on.

use rand::Rng;

use crate::core::config::{GameConfig, OBSTACLE_CADENCE};
use crate::core::error::{Result, SnakeError};
use crate::core::types::{Direction, Point, Status};
use crate::planner;
use crate::simulation::state::GameState;
use crate::spatial::torus::{advance, wrap};
use crate::spatial::BoardIndex;

/// Create a fresh game in `Ready` status
///
/// Lays out the initial snake at board center heading Right, seeds the
/// obstacle budget via batch placement, then places food. Malformed
/// construction input fails fast; it is the only fatal condition in the
/// core.
pub fn create_initial_state<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<GameState> {
    let size = config.size;
    if size <= 0 {
        return Err(SnakeError::InvalidGridSize(size));
    }
    let snake_len = config.initial_snake_len.max(1);
    if snake_len as i32 > size {
        // A longer snake would wrap onto itself in the horizontal layout.
        return Err(SnakeError::SnakeDoesNotFit { snake_len, size });
    }

    let center = Point::new(size / 2, size / 2);
    let snake: Vec<Point> = (0..snake_len as i32)
        .map(|i| wrap(Point::new(center.x - i, center.y), size))
        .collect();

    let index = BoardIndex::new(size);
    let occupied: ahash::AHashSet<Point> = snake.iter().copied().collect();
    let obstacles = planner::spawn_obstacles(&occupied, &index, config.obstacle_budget, rng);

    let mut occupied_with_obstacles = occupied;
    occupied_with_obstacles.extend(obstacles.iter().copied());
    let food = planner::place_food(&occupied_with_obstacles, size, rng);

    let status = if food.is_some() {
        Status::Ready
    } else {
        // Degenerate board with no free cell left; nothing to play.
        tracing::debug!(size, "no free cell for initial food, game over at creation");
        Status::GameOver
    };

    Ok(GameState {
        food: food.unwrap_or(center),
        snake,
        direction: Direction::Right,
        obstacles: obstacles.into_iter().collect(),
        last_spawned_obstacle: None,
        score: 0,
        fruits_eaten: 0,
        status,
        time_since_last_fruit: None,
        timeout_ms: None,
    })
}

/// Request a heading change
///
/// The reverse of the current heading is a silent no-op, matching the
/// kernel's no-reverse rule. On a `Ready` game the heading is committed and
/// the game starts; otherwise only the pending heading is updated, taking
/// effect on the next `step`. Terminal states are untouched.
pub fn apply_direction(state: &GameState, direction: Direction) -> GameState {
    if state.status == Status::GameOver || direction.is_opposite(state.direction) {
        return state.clone();
    }

    let mut next = state.clone();
    next.direction = direction;
    if state.status == Status::Ready {
        next.status = Status::Running;
        tracing::debug!(?direction, "game started");
    }
    next
}

/// Cycle `Running ↔ Paused`; a no-op in any other status
pub fn toggle_pause(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.status = match state.status {
        Status::Running => Status::Paused,
        Status::Paused => Status::Running,
        other => other,
    };
    next
}

/// Advance the game by one tick
///
/// A no-op unless the game is `Running`. See the module docs for the phase
/// order.
pub fn step<R: Rng>(state: &GameState, size: i32, rng: &mut R) -> GameState {
    if state.status != Status::Running {
        return state.clone();
    }

    let next_head = advance(state.head(), state.direction, size);

    if state.hits_body(next_head) || state.obstacles.contains(&next_head) {
        tracing::debug!(?next_head, score = state.score, "collision, game over");
        let mut next = state.clone();
        next.status = Status::GameOver;
        return next;
    }

    let ate_food = next_head == state.food;
    let mut next = state.clone();
    next.snake.insert(0, next_head);
    if !ate_food {
        next.snake.pop();
        return next;
    }

    next.fruits_eaten += 1;
    next.score += 1;

    if next.fruits_eaten % OBSTACLE_CADENCE == 0 {
        let index = BoardIndex::new(size);
        let occupied = next.occupied();
        if let Some(obstacle) = planner::place_obstacle(&occupied, &index, None) {
            tracing::debug!(?obstacle, fruits = next.fruits_eaten, "obstacle spawned");
            next.obstacles.insert(obstacle);
            next.last_spawned_obstacle = Some(obstacle);
        }
    }

    match planner::place_food(&next.occupied(), size, rng) {
        Some(food) => next.food = food,
        None => {
            // Board filled; the previous food cell was just eaten and there
            // is nowhere left to respawn.
            tracing::debug!(score = next.score, "board filled, game over");
            next.status = Status::GameOver;
        }
    }

    next
}
