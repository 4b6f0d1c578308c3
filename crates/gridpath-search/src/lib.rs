//! Stepwise shortest-path search for gridpath grids.
//!
//! The search is a uniform-cost (Dijkstra) search with unit edge weights and
//! a deterministic tie-break: equal-distance cells settle in the order they
//! were discovered. It runs on a single thread and yields to the caller
//! after every settled cell through a [`StepHook`], polling a
//! [`CancelPredicate`] once per iteration.
//!
//! Most callers drive everything through a [`Session`], which owns the grid,
//! the paint controller and a reusable [`SearchEngine`].
//!
//! ```
//! use gridpath_core::{CellState, Grid, Point};
//! use gridpath_search::{Outcome, Session, SessionConfig, Step};
//!
//! let mut s = Session::new(SessionConfig::default().with_rows(5)).unwrap();
//! s.place(Point::new(1, 1)).unwrap(); // start
//! s.place(Point::new(1, 3)).unwrap(); // end
//! let out = s.run(|_: &Grid, _: Step| {}, || false).unwrap();
//! assert_eq!(out, Outcome::Found);
//! assert_eq!(s.grid().state(Point::new(1, 2)), Ok(CellState::Path));
//! ```

mod cancel;
mod engine;
mod path;
mod session;
mod traits;

pub use cancel::CancelToken;
pub use engine::{Outcome, PathNode, SearchEngine, UNREACHABLE};
pub use path::reconstruct;
pub use session::{Session, SessionConfig};
pub use traits::{CancelPredicate, Step, StepHook};
