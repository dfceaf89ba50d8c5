pub mod index;
pub mod torus;

pub use index::BoardIndex;
