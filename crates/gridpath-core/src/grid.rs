//! The [`Grid`] type: a square matrix of [`CellState`]s with a border ring of
//! barriers and an on-demand 4-way adjacency snapshot.
//!
//! A `Grid` is a plain value. Cells are addressed only by [`Point`], and
//! adjacency lists store coordinates, never references to other cells.

use crate::cell::CellState;
use crate::error::{Error, Result};
use crate::geom::Point;

/// A `rows x rows` grid of cell states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    adjacency: Vec<Vec<Point>>,
    rows: i32,
    adjacency_fresh: bool,
}

impl Grid {
    /// Smallest grid with an interior cell.
    pub const MIN_ROWS: i32 = 3;
    /// Largest accepted grid, about a million cells.
    pub const MAX_ROWS: i32 = 1024;

    /// Create a new grid. Every cell starts `Open`, then the outermost ring
    /// is marked `Barrier`.
    ///
    /// Fails with `InvalidSize` outside `MIN_ROWS..=MAX_ROWS`.
    pub fn new(rows: i32) -> Result<Self> {
        if !(Self::MIN_ROWS..=Self::MAX_ROWS).contains(&rows) {
            return Err(Error::InvalidSize(rows));
        }
        let len = (rows as usize) * (rows as usize);
        let mut grid = Self {
            cells: vec![CellState::Open; len],
            adjacency: vec![Vec::new(); len],
            rows,
            adjacency_fresh: false,
        };
        for i in 0..len {
            if grid.is_border(grid.point(i)) {
                grid.cells[i] = CellState::Barrier;
            }
        }
        Ok(grid)
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.rows
    }

    /// Whether `p` lies on the outermost ring.
    #[inline]
    pub fn is_border(&self, p: Point) -> bool {
        self.contains(p)
            && (p.row == 0 || p.col == 0 || p.row == self.rows - 1 || p.col == self.rows - 1)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        p.to_index(self.rows)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::from_index(idx, self.rows)
    }

    /// Like [`index`](Grid::index) but reports `OutOfBounds`.
    #[inline]
    pub fn check(&self, p: Point) -> Result<usize> {
        self.index(p).ok_or(Error::OutOfBounds {
            point: p,
            rows: self.rows,
        })
    }

    // -----------------------------------------------------------------------
    // State access
    // -----------------------------------------------------------------------

    /// State at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i])
    }

    /// State at `p`.
    pub fn state(&self, p: Point) -> Result<CellState> {
        let i = self.check(p)?;
        Ok(self.cells[i])
    }

    /// All cell states, row-major.
    #[inline]
    pub fn states(&self) -> &[CellState] {
        &self.cells
    }

    /// Move the cell at `p` to `next`.
    ///
    /// The transition must be legal (see [`CellState::can_become`]). Border
    /// cells only accept `Barrier`. Changing whether a cell is a barrier
    /// marks the adjacency snapshot stale.
    pub fn set_state(&mut self, p: Point, next: CellState) -> Result<()> {
        let i = self.check(p)?;
        let from = self.cells[i];
        if from == next {
            return Ok(());
        }
        if self.is_border(p) || !from.can_become(next) {
            return Err(Error::IllegalTransition {
                point: p,
                from,
                to: next,
            });
        }
        if from.is_barrier() != next.is_barrier() {
            self.adjacency_fresh = false;
        }
        self.cells[i] = next;
        Ok(())
    }

    /// Reset the cell at `p` to `Open`, returning its previous state.
    ///
    /// Border cells keep their barrier. Endpoint bookkeeping is the
    /// caller's job: if this returns `Start` or `End`, that endpoint is gone.
    pub fn reset_cell(&mut self, p: Point) -> Result<CellState> {
        let i = self.check(p)?;
        let prev = self.cells[i];
        if self.is_border(p) {
            return Ok(prev);
        }
        self.set_state(p, CellState::Open)?;
        Ok(prev)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Return Frontier, Visited and Path cells to `Open`.
    pub fn clear_search_marks(&mut self) {
        for s in self.cells.iter_mut() {
            if s.is_search_mark() {
                *s = CellState::Open;
            }
        }
    }

    /// Return every interior cell to `Open`.
    pub fn clear(&mut self) {
        for i in 0..self.cells.len() {
            if !self.is_border(self.point(i)) {
                self.cells[i] = CellState::Open;
            }
        }
        self.adjacency_fresh = false;
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Rebuild the adjacency snapshot.
    ///
    /// Each non-barrier cell lists its in-bounds, non-barrier neighbours in
    /// [`Direction::ALL`](crate::Direction::ALL) order. Barriers, border
    /// included, have no neighbours.
    pub fn compute_adjacency(&mut self) {
        for i in 0..self.cells.len() {
            let mut adj = std::mem::take(&mut self.adjacency[i]);
            adj.clear();
            if !self.cells[i].is_barrier() {
                let p = self.point(i);
                adj.extend(
                    p.neighbors_4()
                        .into_iter()
                        .filter(|&n| self.get(n).is_some_and(|s| !s.is_barrier())),
                );
            }
            self.adjacency[i] = adj;
        }
        self.adjacency_fresh = true;
    }

    /// Whether the adjacency snapshot reflects the current barriers.
    #[inline]
    pub fn is_adjacency_fresh(&self) -> bool {
        self.adjacency_fresh
    }

    /// Neighbours of `p` from the last snapshot. Empty outside the grid.
    pub fn adjacency(&self, p: Point) -> &[Point] {
        match self.index(p) {
            Some(i) => &self.adjacency[i],
            None => &[],
        }
    }

    // -----------------------------------------------------------------------
    // Iteration / diffing
    // -----------------------------------------------------------------------

    /// Row-major iterator over `(Point, CellState)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter { grid: self, idx: 0 }
    }

    /// Cells whose state differs from `prev`, a row-major snapshot as
    /// returned by [`states`](Grid::states).
    ///
    /// When `prev` has a different length every cell is reported.
    pub fn diff(&self, prev: &[CellState]) -> Frame {
        let full = prev.len() != self.cells.len();
        let cells = self
            .iter()
            .enumerate()
            .filter(|&(i, (_, s))| full || prev[i] != s)
            .map(|(_, (pos, state))| FrameCell { pos, state })
            .collect();
        Frame {
            cells,
            rows: self.rows,
        }
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, CellState)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    idx: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, CellState);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let s = *self.grid.cells.get(self.idx)?;
        let p = self.grid.point(self.idx);
        self.idx += 1;
        Some((p, s))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.grid.cells.len() - self.idx;
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridIter<'_> {}

// ---------------------------------------------------------------------------
// Frame / FrameCell
// ---------------------------------------------------------------------------

/// A single cell that changed between snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCell {
    pub pos: Point,
    pub state: CellState,
}

/// A set of cell changes (a diff frame).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub rows: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_marks_border() {
        let g = Grid::new(5).unwrap();
        assert_eq!(g.len(), 25);
        for (p, s) in g.iter() {
            let border = p.row == 0 || p.col == 0 || p.row == 4 || p.col == 4;
            assert_eq!(s.is_barrier(), border, "{p}");
        }
        assert_eq!(g.count(CellState::Open), 9);
    }

    #[test]
    fn too_small() {
        assert_eq!(Grid::new(2), Err(Error::InvalidSize(2)));
        assert_eq!(Grid::new(-1), Err(Error::InvalidSize(-1)));
        assert!(Grid::new(3).is_ok());
    }

    #[test]
    fn too_large() {
        assert_eq!(
            Grid::new(Grid::MAX_ROWS + 1),
            Err(Error::InvalidSize(Grid::MAX_ROWS + 1))
        );
        assert_eq!(Grid::new(200_000), Err(Error::InvalidSize(200_000)));
        assert_eq!(Grid::new(i32::MAX), Err(Error::InvalidSize(i32::MAX)));
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(7).unwrap();
        for i in 0..g.len() {
            assert_eq!(g.index(g.point(i)), Some(i));
        }
        assert_eq!(g.index(Point::new(7, 0)), None);
        assert_eq!(g.index(Point::new(0, -1)), None);
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let mut g = Grid::new(5).unwrap();
        let p = Point::new(5, 2);
        let err = Error::OutOfBounds { point: p, rows: 5 };
        assert_eq!(g.state(p), Err(err.clone()));
        assert_eq!(g.reset_cell(p), Err(err.clone()));
        assert_eq!(g.set_state(p, CellState::Barrier), Err(err));
        assert!(g.adjacency(p).is_empty());
    }

    #[test]
    fn illegal_transition_leaves_cell() {
        let mut g = Grid::new(5).unwrap();
        let p = Point::new(2, 2);
        let err = g.set_state(p, CellState::Visited).unwrap_err();
        assert_eq!(
            err,
            Error::IllegalTransition {
                point: p,
                from: CellState::Open,
                to: CellState::Visited,
            }
        );
        assert_eq!(g.state(p), Ok(CellState::Open));
    }

    #[test]
    fn border_cannot_be_repainted() {
        let mut g = Grid::new(5).unwrap();
        let p = Point::new(0, 2);
        assert!(g.set_state(p, CellState::Start).is_err());
        assert_eq!(g.reset_cell(p), Ok(CellState::Barrier));
        assert_eq!(g.state(p), Ok(CellState::Barrier));
    }

    #[test]
    fn adjacency_order_and_exclusion() {
        let mut g = Grid::new(5).unwrap();
        g.compute_adjacency();
        // Interior centre: all four, in down/up/right/left order.
        assert_eq!(
            g.adjacency(Point::new(2, 2)),
            &[
                Point::new(3, 2),
                Point::new(1, 2),
                Point::new(2, 3),
                Point::new(2, 1),
            ]
        );
        // Corner of the interior touches two border barriers.
        assert_eq!(
            g.adjacency(Point::new(1, 1)),
            &[Point::new(2, 1), Point::new(1, 2)]
        );
        // Border cells have no neighbours.
        assert!(g.adjacency(Point::new(0, 0)).is_empty());
    }

    #[test]
    fn left_and_up_edges_are_symmetric() {
        let mut g = Grid::new(4).unwrap();
        g.compute_adjacency();
        assert_eq!(g.adjacency(Point::new(1, 1)).len(), 2);
        assert_eq!(g.adjacency(Point::new(1, 2)).len(), 2);
        assert_eq!(g.adjacency(Point::new(2, 1)).len(), 2);
        assert_eq!(g.adjacency(Point::new(2, 2)).len(), 2);
    }

    #[test]
    fn barrier_edits_make_adjacency_stale() {
        let mut g = Grid::new(5).unwrap();
        assert!(!g.is_adjacency_fresh());
        g.compute_adjacency();
        assert!(g.is_adjacency_fresh());

        g.set_state(Point::new(2, 2), CellState::Start).unwrap();
        assert!(g.is_adjacency_fresh());

        g.set_state(Point::new(2, 3), CellState::Barrier).unwrap();
        assert!(!g.is_adjacency_fresh());
        g.compute_adjacency();
        assert!(!g.adjacency(Point::new(2, 2)).contains(&Point::new(2, 3)));
        // Barriers are not sources either.
        assert!(g.adjacency(Point::new(2, 3)).is_empty());

        g.reset_cell(Point::new(2, 3)).unwrap();
        assert!(!g.is_adjacency_fresh());
    }

    #[test]
    fn clear_search_marks_keeps_edits() {
        let mut g = Grid::new(5).unwrap();
        g.set_state(Point::new(1, 1), CellState::Start).unwrap();
        g.set_state(Point::new(1, 2), CellState::Barrier).unwrap();
        g.set_state(Point::new(2, 1), CellState::Frontier).unwrap();
        g.set_state(Point::new(2, 2), CellState::Frontier).unwrap();
        g.set_state(Point::new(2, 2), CellState::Visited).unwrap();
        g.set_state(Point::new(2, 2), CellState::Path).unwrap();

        g.clear_search_marks();
        assert_eq!(g.state(Point::new(1, 1)), Ok(CellState::Start));
        assert_eq!(g.state(Point::new(1, 2)), Ok(CellState::Barrier));
        assert_eq!(g.state(Point::new(2, 1)), Ok(CellState::Open));
        assert_eq!(g.state(Point::new(2, 2)), Ok(CellState::Open));

        g.clear();
        assert_eq!(g.count(CellState::Open), 9);
        assert_eq!(g.count(CellState::Barrier), 16);
    }

    #[test]
    fn diff_reports_changes() {
        let mut g = Grid::new(4).unwrap();
        let before = g.states().to_vec();
        g.set_state(Point::new(1, 2), CellState::Barrier).unwrap();
        let frame = g.diff(&before);
        assert_eq!(
            frame.cells,
            vec![FrameCell {
                pos: Point::new(1, 2),
                state: CellState::Barrier,
            }]
        );
        assert_eq!(g.diff(&[]).cells.len(), 16);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (3i32..12).prop_flat_map(|rows| {
            let n = (rows * rows) as usize;
            prop::collection::vec(any::<bool>(), n).prop_map(move |walls| {
                let mut g = Grid::new(rows).unwrap();
                for (i, wall) in walls.into_iter().enumerate() {
                    if wall {
                        let p = g.point(i);
                        if !g.is_border(p) {
                            g.set_state(p, CellState::Barrier).unwrap();
                        }
                    }
                }
                g
            })
        })
    }

    proptest! {
        #[test]
        fn adjacency_never_leaves_grid_or_enters_barrier(mut g in arb_grid()) {
            g.compute_adjacency();
            for (p, s) in g.iter() {
                for &n in g.adjacency(p) {
                    prop_assert!(g.contains(n));
                    prop_assert!(!g.state(n).unwrap().is_barrier());
                    prop_assert_eq!((n.row - p.row).abs() + (n.col - p.col).abs(), 1);
                }
                if s.is_barrier() {
                    prop_assert!(g.adjacency(p).is_empty());
                }
            }
        }

        #[test]
        fn border_is_always_barrier(rows in 3i32..40) {
            let g = Grid::new(rows).unwrap();
            for (p, s) in g.iter() {
                if g.is_border(p) {
                    prop_assert_eq!(s, CellState::Barrier);
                }
            }
        }

        #[test]
        fn reset_interior_is_open_and_idempotent(mut g in arb_grid(), r in 0i32..12, c in 0i32..12) {
            let p = Point::new(r % g.rows(), c % g.rows());
            prop_assume!(!g.is_border(p));
            g.reset_cell(p).unwrap();
            prop_assert_eq!(g.state(p).unwrap(), CellState::Open);
            g.reset_cell(p).unwrap();
            prop_assert_eq!(g.state(p).unwrap(), CellState::Open);
        }
    }
}
