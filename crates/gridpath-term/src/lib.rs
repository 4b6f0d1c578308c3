//! Terminal front-end for gridpath.
//!
//! Paint a start, an end and barriers with the mouse, then watch the
//! uniform-cost search flood the grid one settled cell at a time.
//!
//! ```no_run
//! use gridpath_term::{TermApp, TermConfig};
//!
//! let mut app = TermApp::new(TermConfig::default().with_rows(20)).unwrap();
//! app.run().unwrap();
//! ```

mod app;
mod config;
mod driver;
pub mod palette;
mod scatter;

pub use app::TermApp;
pub use config::TermConfig;
pub use driver::{CELL_WIDTH, Input, STATUS_LINES, TermDriver, to_input, to_point};
pub use scatter::scatter_barriers;
