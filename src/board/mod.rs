//! Board model: the card grid and its read-only view.

pub mod grid;
pub mod view;

pub use grid::{Board, MIN_CARDS};
pub use view::{BoardView, CellView};
