//! Spawn planner - food and obstacle placement
//!
//! Placement never creates new dead ends for the snake: obstacle candidates
//! are interior-only and rejected when they would strictly increase the
//! local dead-end count. Food prefers cells with breathing room. All scans
//! run in row-major order so results depend only on the injected rng draws,
//! never on hash-set iteration order.

use ahash::AHashSet;
use rand::Rng;

use crate::core::types::Point;
use crate::spatial::torus::orthogonal_neighbors;
use crate::spatial::BoardIndex;

/// Free orthogonal neighbors of a cell ("exit count")
fn exit_count(p: Point, size: i32, occupied: &AHashSet<Point>) -> usize {
    orthogonal_neighbors(p, size)
        .iter()
        .filter(|n| !occupied.contains(n))
        .count()
}

/// A dead end is a free cell with at most one free orthogonal neighbor
fn is_dead_end(p: Point, size: i32, occupied: &AHashSet<Point>) -> bool {
    !occupied.contains(&p) && exit_count(p, size, occupied) <= 1
}

/// Net change in dead-end cells if an obstacle were placed at `candidate`
///
/// Only the candidate and its four neighbors can change status, so the
/// delta is computed over that 5-cell window.
fn dead_end_delta(candidate: Point, size: i32, occupied: &AHashSet<Point>) -> i32 {
    let mut window = vec![candidate];
    window.extend(orthogonal_neighbors(candidate, size));

    let before = window
        .iter()
        .filter(|&&p| is_dead_end(p, size, occupied))
        .count() as i32;

    let mut hypothetical = occupied.clone();
    hypothetical.insert(candidate);
    let after = window
        .iter()
        .filter(|&&p| is_dead_end(p, size, &hypothetical))
        .count() as i32;

    after - before
}

/// Clamped uniform pool pick from a pre-drawn `[0,1)` value
fn pool_pick(pool_len: usize, draw: f64) -> usize {
    ((draw * pool_len as f64).floor() as usize).min(pool_len - 1)
}

/// Place food on a free cell
///
/// Prefers "safe" cells (at least two free orthogonal neighbors); falls
/// back to any free cell. Returns None when no free cell exists, which the
/// kernel interprets as game over.
pub fn place_food<R: Rng>(occupied: &AHashSet<Point>, size: i32, rng: &mut R) -> Option<Point> {
    let index = BoardIndex::new(size);
    let free: Vec<Point> = index
        .cells()
        .iter()
        .copied()
        .filter(|p| !occupied.contains(p))
        .collect();
    if free.is_empty() {
        return None;
    }

    let safe: Vec<Point> = free
        .iter()
        .copied()
        .filter(|&p| exit_count(p, size, occupied) >= 2)
        .collect();
    let pool = if safe.is_empty() { &free } else { &safe };

    Some(pool[pool_pick(pool.len(), rng.gen::<f64>())])
}

/// Place a single obstacle
///
/// Candidates are free interior cells whose placement would not strictly
/// increase the local dead-end count. `draw` selects among survivors:
/// `None` picks deterministically (minimum Manhattan distance to board
/// center, ties broken by smaller y then smaller x - the first-of-batch
/// rule), `Some(u)` picks uniformly from a pre-drawn `[0,1)` value.
///
/// Returns None when no candidate survives; callers treat that as a silent
/// early stop, not an error.
pub fn place_obstacle(
    occupied: &AHashSet<Point>,
    index: &BoardIndex,
    draw: Option<f64>,
) -> Option<Point> {
    let size = index.size();
    let candidates: Vec<Point> = index
        .interior_cells()
        .filter(|p| !occupied.contains(p))
        .filter(|&p| {
            let delta = dead_end_delta(p, size, occupied);
            if delta > 0 {
                tracing::trace!(?p, delta, "obstacle candidate rejected");
            }
            delta <= 0
        })
        .collect();
    if candidates.is_empty() {
        return None;
    }

    match draw {
        Some(u) => Some(candidates[pool_pick(candidates.len(), u)]),
        None => {
            let center = index.center();
            candidates
                .into_iter()
                .min_by_key(|p| (p.manhattan(&center), p.y, p.x))
        }
    }
}

/// Seed `count` obstacles against a growing occupied set (start of game)
///
/// The first placement is deterministic, the rest draw from the rng. May
/// return fewer than `count` points when the candidate pool dries up.
pub fn spawn_obstacles<R: Rng>(
    occupied: &AHashSet<Point>,
    index: &BoardIndex,
    count: u32,
    rng: &mut R,
) -> Vec<Point> {
    let mut placed = Vec::new();
    let mut occupied = occupied.clone();
    for i in 0..count {
        let draw = if i == 0 { None } else { Some(rng.gen::<f64>()) };
        let Some(p) = place_obstacle(&occupied, index, draw) else {
            break;
        };
        occupied.insert(p);
        placed.push(p);
    }
    placed
}
