//! Time-aware BFS and flood fill over the toroidal grid
//!
//! The pathfinder treats obstacle cells as permanently blocked and snake
//! body cells as blocked only until their free time - the tick at which the
//! segment vacates. Expansion order is the fixed Up, Down, Left, Right
//! tuple for deterministic tie-breaking.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::core::types::{Point, Tick};
use crate::spatial::torus::orthogonal_neighbors;

/// Ticks until each body cell vacates
///
/// The segment at index `i` (head-first) frees up after `len - i` ticks:
/// the tail (last index) vacates on the very next tick, the head last.
fn free_times(snake: &[Point]) -> AHashMap<Point, Tick> {
    let len = snake.len() as Tick;
    snake
        .iter()
        .enumerate()
        .map(|(i, &p)| (p, len - i as Tick))
        .collect()
}

/// Breadth-first shortest path that accounts for the snake moving
///
/// A neighbor reached at arrival tick `t` is traversable when it is not an
/// obstacle and either carries no free time or `t >= free_time` (the snake
/// will have moved past it by then). Each cell is considered exactly once:
/// a cell first reached before its free time is marked and never retried
/// at a later tick. Returns the full path inclusive of `start` and
/// `target`, or None when the queue exhausts first.
pub fn bfs_path_with_timing(
    start: Point,
    target: Point,
    size: i32,
    snake: &[Point],
    obstacles: &AHashSet<Point>,
) -> Option<Vec<Point>> {
    let timing = free_times(snake);

    let mut visited: AHashSet<Point> = AHashSet::new();
    let mut dist: AHashMap<Point, Tick> = AHashMap::new();
    let mut came_from: AHashMap<Point, Point> = AHashMap::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    dist.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return Some(reconstruct_path(&came_from, current));
        }
        let arrival = dist[&current] + 1;

        for neighbor in orthogonal_neighbors(current, size) {
            if !visited.insert(neighbor) || obstacles.contains(&neighbor) {
                continue;
            }
            if let Some(&free_at) = timing.get(&neighbor) {
                if arrival < free_at {
                    continue;
                }
            }
            dist.insert(neighbor, arrival);
            came_from.insert(neighbor, current);
            queue.push_back(neighbor);
        }
    }

    None
}

/// Reconstruct path from came_from map
fn reconstruct_path(came_from: &AHashMap<Point, Point>, mut current: Point) -> Vec<Point> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Count cells reachable from `start` over non-blocked cells
///
/// A lower-bound proxy for breathing room. The seed cell is expanded from
/// regardless of its own occupancy (the caller usually seeds at the snake
/// head, which sits inside the blocked set) but only counts when free.
pub fn flood_fill_count(start: Point, size: i32, blocked: &AHashSet<Point>) -> usize {
    let mut visited = AHashSet::new();
    visited.insert(start);
    let mut queue = VecDeque::new();
    queue.push_back(start);
    let mut count = usize::from(!blocked.contains(&start));

    while let Some(current) = queue.pop_front() {
        for neighbor in orthogonal_neighbors(current, size) {
            if !blocked.contains(&neighbor) && visited.insert(neighbor) {
                count += 1;
                queue.push_back(neighbor);
            }
        }
    }

    count
}
