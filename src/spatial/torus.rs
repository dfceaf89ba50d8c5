//! Toroidal coordinate arithmetic
//!
//! The grid is `size × size` with edges wrapping modulo `size`, so opposite
//! edges are adjacent. Everything downstream (kernel, planner, evaluator)
//! goes through these functions rather than touching coordinates directly.

use crate::core::types::{Direction, Point};

/// Normalize a point onto the torus
///
/// Handles negative inputs: `wrap((-1, size), size) == (size-1, 0)`.
#[inline]
pub fn wrap(p: Point, size: i32) -> Point {
    Point {
        x: (p.x % size + size) % size,
        y: (p.y % size + size) % size,
    }
}

/// Unit step along one axis, unwrapped
#[inline]
pub fn step(p: Point, dir: Direction) -> Point {
    let (dx, dy) = dir.delta();
    Point {
        x: p.x + dx,
        y: p.y + dy,
    }
}

/// Unit step followed by toroidal normalization
#[inline]
pub fn advance(p: Point, dir: Direction, size: i32) -> Point {
    wrap(step(p, dir), size)
}

/// Injective cell identity over `[0, size)²`
///
/// Used for dense visited/free-time tables; no two distinct in-bounds
/// points share a key.
#[inline]
pub fn cell_key(p: Point, size: i32) -> usize {
    (p.y * size + p.x) as usize
}

/// The four orthogonal neighbors in the fixed order Up, Down, Left, Right
///
/// Every search expands in this order so tie-breaking is deterministic.
#[inline]
pub fn orthogonal_neighbors(p: Point, size: i32) -> [Point; 4] {
    [
        advance(p, Direction::Up, size),
        advance(p, Direction::Down, size),
        advance(p, Direction::Left, size),
        advance(p, Direction::Right, size),
    ]
}

/// Heading that takes `from` to its toroidally-adjacent neighbor `to`
///
/// Returns None when the two cells are not orthogonally adjacent on the
/// torus.
pub fn direction_between(from: Point, to: Point, size: i32) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&dir| advance(from, dir, size) == to)
}
