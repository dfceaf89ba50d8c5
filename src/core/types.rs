//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// A cell on the toroidal grid
///
/// Coordinates are kept in `[0, size)` by the wrap functions in
/// [`crate::spatial::torus`]; intermediate math may go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance, unwrapped (board metric, not torus metric)
    pub fn manhattan(&self, other: &Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Snake heading
///
/// `Up` decreases y, `Down` increases y (screen coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four headings in the fixed expansion order used by every search
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset along one axis
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True iff the two headings are 180° apart
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Game lifecycle status
///
/// Transitions are monotonic except the `Running ↔ Paused` cycle;
/// `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Ready,
    Running,
    Paused,
    GameOver,
}
