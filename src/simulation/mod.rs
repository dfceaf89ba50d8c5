pub mod kernel;
pub mod state;

pub use kernel::{apply_direction, create_initial_state, step, toggle_pause};
pub use state::GameState;
