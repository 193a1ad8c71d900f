mod beam;
mod config;
mod grid;
mod rotation;

pub use beam::*;
pub use config::*;
pub use grid::*;
pub use rotation::*;
