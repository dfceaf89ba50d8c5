//! Strategy policies - direction selection over move verdicts
//!
//! A policy is a pure function from the current state to a heading, built
//! entirely on [`evaluate_move`]: it asks for a verdict in all four
//! directions and scores the non-None results. Since a verdict is only
//! returned for legal moves, policies never need to re-check legality.
//!
//! The closed set of policies is resolved by name once at configuration
//! time into a [`PolicyKind`] tagged variant; nothing downstream does
//! string lookups.

use crate::core::error::{Result, SnakeError};
use crate::core::types::Direction;
use crate::evaluator::{direction_to_tail, evaluate_move, MoveEvaluation};
use crate::simulation::state::GameState;

/// A direction-selection strategy
///
/// Implementations must be pure: same state and size, same answer. `None`
/// means no legal move exists (the snake is boxed in).
pub trait StrategyPolicy {
    fn name(&self) -> &'static str;
    fn choose(&self, state: &GameState, size: i32) -> Option<Direction>;
}

/// Verdicts for all four headings, in the fixed Up/Down/Left/Right order
fn all_verdicts(state: &GameState, size: i32) -> Vec<MoveEvaluation> {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| evaluate_move(state, size, dir))
        .collect()
}

/// Shortest safe path to food; falls back to most space
///
/// The workhorse policy: eat as fast as possible, but only along moves the
/// evaluator judges safe. When no safe path exists, maximize breathing
/// room.
pub struct Greedy;

impl StrategyPolicy for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&self, state: &GameState, size: i32) -> Option<Direction> {
        let verdicts = all_verdicts(state, size);
        verdicts
            .iter()
            .filter(|v| v.safe)
            .filter_map(|v| v.path_length.map(|len| (len, v)))
            .min_by_key(|&(len, v)| (len, usize::MAX - v.space))
            .map(|(_, v)| v.direction)
            .or_else(|| {
                verdicts
                    .iter()
                    .max_by_key(|v| v.space)
                    .map(|v| v.direction)
            })
    }
}

/// Chase food only when safe, otherwise chase the tail
///
/// Keeping the tail reachable is the strongest cheap survival signal; this
/// policy trades score for longevity.
pub struct Cautious;

impl StrategyPolicy for Cautious {
    fn name(&self) -> &'static str {
        "cautious"
    }

    fn choose(&self, state: &GameState, size: i32) -> Option<Direction> {
        let verdicts = all_verdicts(state, size);
        let safe_path = verdicts
            .iter()
            .filter(|v| v.safe)
            .filter_map(|v| v.path_length.map(|len| (len, v)))
            .min_by_key(|&(len, _)| len)
            .map(|(_, v)| v.direction);
        safe_path
            .or_else(|| direction_to_tail(state, size))
            .or_else(|| {
                verdicts
                    .iter()
                    .max_by_key(|v| v.space)
                    .map(|v| v.direction)
            })
    }
}

/// Maximize post-move breathing room, food distance as tie-break
pub struct RoomMax;

impl StrategyPolicy for RoomMax {
    fn name(&self) -> &'static str {
        "room-max"
    }

    fn choose(&self, state: &GameState, size: i32) -> Option<Direction> {
        all_verdicts(state, size)
            .into_iter()
            .max_by_key(|v| (v.space, v.safe, v.path_length.map(|len| usize::MAX - len)))
            .map(|v| v.direction)
    }
}

/// The closed set of built-in policies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Greedy,
    Cautious,
    RoomMax,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Greedy, PolicyKind::Cautious, PolicyKind::RoomMax];

    /// Resolve a policy by name, once, at configuration time
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "greedy" => Ok(PolicyKind::Greedy),
            "cautious" => Ok(PolicyKind::Cautious),
            "room-max" => Ok(PolicyKind::RoomMax),
            other => Err(SnakeError::UnknownPolicy(other.to_string())),
        }
    }

    pub fn build(self) -> Box<dyn StrategyPolicy> {
        match self {
            PolicyKind::Greedy => Box::new(Greedy),
            PolicyKind::Cautious => Box::new(Cautious),
            PolicyKind::RoomMax => Box::new(RoomMax),
        }
    }
}
