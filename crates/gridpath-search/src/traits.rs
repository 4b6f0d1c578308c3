use gridpath_core::{Grid, Point};

/// What a step hook is told about the cell that was just settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub pos: Point,
    /// Hop distance from the start.
    pub cost: i32,
    /// Number of cells settled so far in this run, including this one.
    pub settled: usize,
}

/// Observer called once per settled cell, before the cell is marked visited.
///
/// The hook sees the grid read-only; use it to redraw, record, or pace an
/// animation.
pub trait StepHook {
    fn on_step(&mut self, grid: &Grid, step: Step);
}

impl<F: FnMut(&Grid, Step)> StepHook for F {
    fn on_step(&mut self, grid: &Grid, step: Step) {
        self(grid, step)
    }
}

/// Cancellation predicate polled once per search iteration.
pub trait CancelPredicate {
    fn should_cancel(&mut self) -> bool;
}

impl<F: FnMut() -> bool> CancelPredicate for F {
    fn should_cancel(&mut self) -> bool {
        self()
    }
}
