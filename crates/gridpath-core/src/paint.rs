//! Interactive editing: the [`PaintController`] turns place/erase commands
//! into grid mutations while keeping a single Start and a single End.

use crate::cell::CellState;
use crate::error::{Error, Placement, Result};
use crate::geom::Point;
use crate::grid::Grid;

/// What a [`PaintController::place`] call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placed {
    Start,
    End,
    Barrier,
    /// The target already held an endpoint or a barrier.
    Unchanged,
}

/// Tracks the current endpoints and whether painting is frozen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaintController {
    start: Option<Point>,
    end: Option<Point>,
    started: bool,
}

impl PaintController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Whether a search has started since the last clear.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Freeze painting. Called when a search run begins.
    pub fn freeze(&mut self) {
        self.started = true;
    }

    /// Unfreeze painting once the grid has been cleared of search marks.
    pub fn thaw(&mut self) {
        self.started = false;
    }

    /// Forget both endpoints without touching the grid.
    pub fn forget_endpoints(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Primary paint action.
    ///
    /// The first placement sets the Start, the next (on a different cell)
    /// sets the End, and any later placement on a non-endpoint cell paints a
    /// Barrier.
    pub fn place(&mut self, grid: &mut Grid, p: Point) -> Result<Placed> {
        grid.check(p)?;
        self.ensure_editable(p)?;

        match (self.start, self.end) {
            (None, _) => {
                Self::ensure_endpoint_target(grid, p)?;
                grid.set_state(p, CellState::Start)?;
                self.start = Some(p);
                Ok(Placed::Start)
            }
            (Some(s), None) => {
                if p == s {
                    return Err(Error::InvalidPlacement {
                        point: p,
                        reason: Placement::EndEqualsStart,
                    });
                }
                Self::ensure_endpoint_target(grid, p)?;
                grid.set_state(p, CellState::End)?;
                self.end = Some(p);
                Ok(Placed::End)
            }
            (Some(s), Some(e)) => {
                if p == s || p == e {
                    return Ok(Placed::Unchanged);
                }
                self.barrier(grid, p)
            }
        }
    }

    /// Paint a barrier at `p` regardless of whether the endpoints are set.
    ///
    /// Endpoint cells and existing barriers are left alone.
    pub fn barrier(&mut self, grid: &mut Grid, p: Point) -> Result<Placed> {
        let state = grid.state(p)?;
        self.ensure_editable(p)?;
        if state.is_barrier() || state.is_endpoint() {
            return Ok(Placed::Unchanged);
        }
        grid.set_state(p, CellState::Barrier)?;
        Ok(Placed::Barrier)
    }

    /// Secondary paint action: reset `p` to `Open`, dropping the endpoint
    /// reference if it pointed there. Returns the previous state.
    pub fn erase(&mut self, grid: &mut Grid, p: Point) -> Result<CellState> {
        grid.check(p)?;
        self.ensure_editable(p)?;
        let prev = grid.reset_cell(p)?;
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        Ok(prev)
    }

    fn ensure_editable(&self, p: Point) -> Result<()> {
        if self.started {
            return Err(Error::InvalidPlacement {
                point: p,
                reason: Placement::Frozen,
            });
        }
        Ok(())
    }

    fn ensure_endpoint_target(grid: &Grid, p: Point) -> Result<()> {
        if grid.is_border(p) {
            return Err(Error::InvalidPlacement {
                point: p,
                reason: Placement::Border,
            });
        }
        match grid.state(p)? {
            CellState::Open => Ok(()),
            other => Err(Error::InvalidPlacement {
                point: p,
                reason: Placement::Occupied(other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Grid, PaintController) {
        (Grid::new(5).unwrap(), PaintController::new())
    }

    #[test]
    fn place_sequence() {
        let (mut g, mut pc) = setup();
        assert_eq!(pc.place(&mut g, Point::new(1, 1)), Ok(Placed::Start));
        assert_eq!(pc.place(&mut g, Point::new(3, 3)), Ok(Placed::End));
        assert_eq!(pc.place(&mut g, Point::new(2, 2)), Ok(Placed::Barrier));
        assert_eq!(pc.place(&mut g, Point::new(2, 2)), Ok(Placed::Unchanged));
        assert_eq!(pc.place(&mut g, Point::new(1, 1)), Ok(Placed::Unchanged));
        assert_eq!(pc.place(&mut g, Point::new(3, 3)), Ok(Placed::Unchanged));

        assert_eq!(pc.start(), Some(Point::new(1, 1)));
        assert_eq!(pc.end(), Some(Point::new(3, 3)));
        assert_eq!(g.state(Point::new(1, 1)), Ok(CellState::Start));
        assert_eq!(g.state(Point::new(3, 3)), Ok(CellState::End));
        assert_eq!(g.state(Point::new(2, 2)), Ok(CellState::Barrier));
    }

    #[test]
    fn end_on_start_is_rejected() {
        let (mut g, mut pc) = setup();
        pc.place(&mut g, Point::new(1, 1)).unwrap();
        assert_eq!(
            pc.place(&mut g, Point::new(1, 1)),
            Err(Error::InvalidPlacement {
                point: Point::new(1, 1),
                reason: Placement::EndEqualsStart,
            })
        );
        assert_eq!(pc.end(), None);
        assert_eq!(g.state(Point::new(1, 1)), Ok(CellState::Start));
    }

    #[test]
    fn endpoints_never_on_border() {
        let (mut g, mut pc) = setup();
        let err = pc.place(&mut g, Point::new(0, 2)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPlacement {
                reason: Placement::Border,
                ..
            }
        ));
        assert_eq!(pc.start(), None);

        pc.place(&mut g, Point::new(2, 2)).unwrap();
        let err = pc.place(&mut g, Point::new(4, 4)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPlacement {
                reason: Placement::Border,
                ..
            }
        ));
        assert_eq!(pc.end(), None);
    }

    #[test]
    fn endpoint_on_barrier_is_rejected() {
        let (mut g, mut pc) = setup();
        pc.barrier(&mut g, Point::new(2, 2)).unwrap();
        assert_eq!(
            pc.place(&mut g, Point::new(2, 2)),
            Err(Error::InvalidPlacement {
                point: Point::new(2, 2),
                reason: Placement::Occupied(CellState::Barrier),
            })
        );
    }

    #[test]
    fn erase_clears_endpoint_refs() {
        let (mut g, mut pc) = setup();
        pc.place(&mut g, Point::new(1, 1)).unwrap();
        pc.place(&mut g, Point::new(3, 3)).unwrap();

        assert_eq!(pc.erase(&mut g, Point::new(1, 1)), Ok(CellState::Start));
        assert_eq!(pc.start(), None);
        assert_eq!(pc.end(), Some(Point::new(3, 3)));

        // Start is placed again before anything else.
        assert_eq!(pc.place(&mut g, Point::new(2, 1)), Ok(Placed::Start));

        assert_eq!(pc.erase(&mut g, Point::new(3, 3)), Ok(CellState::End));
        assert_eq!(pc.end(), None);
        assert_eq!(g.state(Point::new(3, 3)), Ok(CellState::Open));
    }

    #[test]
    fn erase_border_is_noop() {
        let (mut g, mut pc) = setup();
        assert_eq!(pc.erase(&mut g, Point::new(0, 0)), Ok(CellState::Barrier));
        assert_eq!(g.state(Point::new(0, 0)), Ok(CellState::Barrier));
    }

    #[test]
    fn frozen_rejects_everything() {
        let (mut g, mut pc) = setup();
        pc.place(&mut g, Point::new(1, 1)).unwrap();
        pc.freeze();
        let before = g.clone();

        for result in [
            pc.place(&mut g, Point::new(2, 2)).map(|_| ()),
            pc.barrier(&mut g, Point::new(2, 2)).map(|_| ()),
            pc.erase(&mut g, Point::new(1, 1)).map(|_| ()),
        ] {
            assert!(matches!(
                result,
                Err(Error::InvalidPlacement {
                    reason: Placement::Frozen,
                    ..
                })
            ));
        }
        assert_eq!(g, before);
        assert_eq!(pc.start(), Some(Point::new(1, 1)));

        pc.thaw();
        assert_eq!(pc.place(&mut g, Point::new(2, 2)), Ok(Placed::End));
    }

    #[test]
    fn out_of_bounds() {
        let (mut g, mut pc) = setup();
        assert!(matches!(
            pc.place(&mut g, Point::new(9, 9)),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            pc.erase(&mut g, Point::new(-1, 0)),
            Err(Error::OutOfBounds { .. })
        ));
    }
}
