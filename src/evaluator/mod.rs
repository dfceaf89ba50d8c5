pub mod pathfinding;
pub mod verdict;

pub use pathfinding::{bfs_path_with_timing, flood_fill_count};
pub use verdict::{direction_to_tail, evaluate_move, is_food_reachable, MoveEvaluation};
