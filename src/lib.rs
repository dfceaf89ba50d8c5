//! Torus Snake - toroidal-grid snake simulation and move-evaluation toolkit
//!
//! The crate is split along the data flow:
//! - [`spatial`] - toroidal coordinate arithmetic and the caller-owned
//!   board-traversal index
//! - [`planner`] - food and obstacle placement that avoids creating dead ends
//! - [`simulation`] - the authoritative state machine, one pure tick at a time
//! - [`evaluator`] - time-aware BFS, flood fill, and the per-direction
//!   verdicts every policy consumes
//! - [`policy`] - interchangeable direction-selection strategies
//!
//! Everything is single-threaded, synchronous and deterministic: randomness
//! enters only through explicitly injected `rand::Rng` sources, so identical
//! seeds replay identical games.

pub mod core;
pub mod evaluator;
pub mod planner;
pub mod policy;
pub mod simulation;
pub mod spatial;

pub use crate::core::{Direction, GameConfig, Point, Result, SnakeError, Status};
pub use evaluator::{
    bfs_path_with_timing, direction_to_tail, evaluate_move, flood_fill_count, is_food_reachable,
    MoveEvaluation,
};
pub use simulation::{apply_direction, create_initial_state, step, toggle_pause, GameState};
