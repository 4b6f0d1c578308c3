//! **gridpath-core** — grid model for the gridpath shortest-path engine.
//!
//! This crate provides the passive half of the engine: grid coordinates,
//! the cell-state machine, the square [`Grid`] with its barrier border and
//! adjacency snapshot, and the [`PaintController`] that edits a grid into a
//! valid search input. The search itself lives in `gridpath-search`.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod paint;

pub use cell::CellState;
pub use error::{Error, NotReady, Placement, Result};
pub use geom::{Direction, Point};
pub use grid::{Frame, FrameCell, Grid};
pub use paint::{PaintController, Placed};
