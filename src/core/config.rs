//! Game configuration with documented constants
//!
//! All tunable numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::{Deserialize, Serialize};

/// Number of fruits between obstacle spawns
///
/// Every time `fruits_eaten` reaches a multiple of this cadence, the kernel
/// asks the spawn planner for exactly one new obstacle. Lower values make the
/// board fill faster and shorten games.
pub const OBSTACLE_CADENCE: u32 = 5;

/// Configuration for a single game
///
/// A game is created once from a config and thereafter only replaced by new
/// immutable snapshots; the config itself is never consulted again by the
/// kernel (the grid size travels with every call).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the toroidal grid (cells per axis)
    ///
    /// All coordinates live in `[0, size)` on both axes. Must be positive;
    /// sizes below 3 leave no interior cells, so the obstacle planner will
    /// place nothing there.
    pub size: i32,

    /// Number of obstacles to seed at game start
    ///
    /// A budget, not a guarantee: the planner silently stops early when no
    /// candidate survives the dead-end check.
    pub obstacle_budget: u32,

    /// Starting snake length
    ///
    /// The snake is laid out horizontally at board center, head to the
    /// right, heading Right.
    pub initial_snake_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 20,
            obstacle_budget: 6,
            initial_snake_len: 3,
        }
    }
}

impl GameConfig {
    pub fn new(size: i32, obstacle_budget: u32) -> Self {
        Self {
            size,
            obstacle_budget,
            ..Self::default()
        }
    }
}
