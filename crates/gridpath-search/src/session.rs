//! [`Session`]: one editable grid together with its paint controller and
//! search engine.

use gridpath_core::{CellState, Grid, NotReady, PaintController, Placed, Point, Result};

use crate::engine::{Outcome, SearchEngine};
use crate::traits::{CancelPredicate, StepHook};

/// Configuration for creating a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Rows (and columns) of the square grid, border included.
    pub rows: i32,
}

impl SessionConfig {
    pub const DEFAULT_ROWS: i32 = 50;

    /// Set the grid size (builder).
    pub fn with_rows(mut self, rows: i32) -> Self {
        self.rows = rows;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
        }
    }
}

/// Editing and search state for one grid.
///
/// A session moves through three phases: editing (place/erase allowed),
/// running (inside [`run`](Session::run)), and finished (painting frozen
/// until [`clear_search`](Session::clear_search) or [`clear`](Session::clear)).
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    paint: PaintController,
    engine: SearchEngine,
    outcome: Option<Outcome>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(config.rows)?,
            paint: PaintController::new(),
            engine: SearchEngine::new(),
            outcome: None,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn paint(&self) -> &PaintController {
        &self.paint
    }

    #[inline]
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Result of the last run, if any since the last clear.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether painting is frozen by a run.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.paint.is_started()
    }

    /// Primary paint action at `p`. See [`PaintController::place`].
    pub fn place(&mut self, p: Point) -> Result<Placed> {
        self.paint.place(&mut self.grid, p)
    }

    /// Paint a barrier at `p` without touching the endpoints.
    pub fn barrier(&mut self, p: Point) -> Result<Placed> {
        self.paint.barrier(&mut self.grid, p)
    }

    /// Secondary paint action at `p`. See [`PaintController::erase`].
    pub fn erase(&mut self, p: Point) -> Result<CellState> {
        self.paint.erase(&mut self.grid, p)
    }

    /// Recompute adjacency and search from the placed Start to the placed
    /// End.
    ///
    /// Painting is frozen from here on, whatever the outcome, until the
    /// session is cleared. If the search cannot start, nothing is frozen.
    pub fn run<H, C>(&mut self, on_step: H, should_cancel: C) -> Result<Outcome>
    where
        H: StepHook,
        C: CancelPredicate,
    {
        if self.paint.is_started() {
            return Err(NotReady::AlreadyStarted.into());
        }
        let start = self.paint.start().ok_or(NotReady::MissingStart)?;
        let end = self.paint.end().ok_or(NotReady::MissingEnd)?;

        self.grid.compute_adjacency();
        self.paint.freeze();
        match self
            .engine
            .run(&mut self.grid, start, end, on_step, should_cancel)
        {
            Ok(outcome) => {
                self.outcome = Some(outcome);
                Ok(outcome)
            }
            Err(e) => {
                self.paint.thaw();
                Err(e)
            }
        }
    }

    /// Drop Frontier/Visited/Path marks and unfreeze painting. Endpoints and
    /// barriers stay.
    pub fn clear_search(&mut self) {
        self.grid.clear_search_marks();
        self.paint.thaw();
        self.outcome = None;
    }

    /// Return every interior cell to Open and forget the endpoints.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.paint.forget_endpoints();
        self.paint.thaw();
        self.outcome = None;
    }
}
