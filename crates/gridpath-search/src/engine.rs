use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::{CellState, Grid, NotReady, Point, Result};

use crate::path::reconstruct;
use crate::traits::{CancelPredicate, Step, StepHook};

/// Sentinel value meaning "unreachable" in distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel predecessor index for cells with no parent.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// A position with its hop distance, recorded in settle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The end was settled and the path marked.
    Found,
    /// The frontier ran dry; no path exists.
    NotReached,
    /// The cancel predicate fired. The grid keeps its partial marks.
    Cancelled,
}

// ---------------------------------------------------------------------------
// Frontier entry
// ---------------------------------------------------------------------------

/// Frontier entry ordered by `(dist, seq)` for use in `BinaryHeap`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Entry {
    idx: usize,
    dist: i32,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (dist, seq) first.
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Stepwise uniform-cost search with unit edge weights.
///
/// The engine owns the per-run working state (distance and predecessor
/// maps, the frontier, the enqueued set) and keeps it after a run so the
/// caller can inspect it. Buffers are reused across runs and resized when
/// the grid size changes.
#[derive(Debug, Default)]
pub struct SearchEngine {
    distance: Vec<i32>,
    predecessor: Vec<usize>,
    enqueued: Vec<bool>,
    frontier: BinaryHeap<Entry>,
    seq: u64,
    // Side of the grid the caches were sized for, so distance/predecessor
    // queries still work after the grid is handed back.
    rows: i32,
    settled: Vec<PathNode>,
    path: Vec<Point>,
    // scratch buffer for neighbour lists
    nbuf: Vec<Point>,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a search from `start` to `end`, marking cells as it goes.
    ///
    /// `on_step` is called after every settled cell; `should_cancel` is
    /// polled at the top of every iteration. Both are the only points where
    /// control returns to the caller.
    ///
    /// Fails with `SearchNotReady` if the endpoints are missing, equal, or
    /// not marked Start/End on the grid, if the adjacency snapshot is stale,
    /// or if marks from an earlier run are still on the grid.
    pub fn run<H, C>(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        mut on_step: H,
        mut should_cancel: C,
    ) -> Result<Outcome>
    where
        H: StepHook,
        C: CancelPredicate,
    {
        let (si, ei) = Self::check_ready(grid, start, end)?;
        self.reset(grid);
        log::debug!(
            "search {} -> {} on {}x{} grid",
            start,
            end,
            grid.rows(),
            grid.rows()
        );

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let result = self.search(grid, si, ei, &mut nbuf, &mut on_step, &mut should_cancel);
        self.nbuf = nbuf;

        if let Ok(outcome) = &result {
            log::debug!(
                "search finished: {:?} after {} settled, path length {}",
                outcome,
                self.settled.len(),
                self.path.len()
            );
        }
        result
    }

    fn search<H, C>(
        &mut self,
        grid: &mut Grid,
        si: usize,
        ei: usize,
        nbuf: &mut Vec<Point>,
        on_step: &mut H,
        should_cancel: &mut C,
    ) -> Result<Outcome>
    where
        H: StepHook,
        C: CancelPredicate,
    {
        let start = grid.point(si);
        let end = grid.point(ei);

        self.distance[si] = 0;
        self.frontier.push(Entry {
            idx: si,
            dist: 0,
            seq: 0,
        });
        self.enqueued[si] = true;

        while !self.frontier.is_empty() {
            if should_cancel.should_cancel() {
                log::debug!("search cancelled after {} settled", self.settled.len());
                return Ok(Outcome::Cancelled);
            }

            let Some(current) = self.frontier.pop() else {
                break;
            };
            let ci = current.idx;
            self.enqueued[ci] = false;
            let current_dist = self.distance[ci];
            let cp = grid.point(ci);
            self.settled.push(PathNode {
                pos: cp,
                cost: current_dist,
            });
            log::trace!("settle {} at distance {}", cp, current_dist);

            if ci == ei {
                grid.set_state(end, CellState::End)?;
                self.path = reconstruct(grid, start, end, &self.predecessor)?;
                grid.set_state(start, CellState::Start)?;
                return Ok(Outcome::Found);
            }

            nbuf.clear();
            nbuf.extend_from_slice(grid.adjacency(cp));
            let tentative = current_dist + 1;

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if tentative >= self.distance[ni] {
                    continue;
                }
                self.predecessor[ni] = ci;
                self.distance[ni] = tentative;
                // Already queued: the lower distance is picked up when the
                // entry pops. Only sound while every edge costs 1.
                if self.enqueued[ni] {
                    continue;
                }
                self.seq += 1;
                self.frontier.push(Entry {
                    idx: ni,
                    dist: tentative,
                    seq: self.seq,
                });
                self.enqueued[ni] = true;
                if grid.get(np) == Some(CellState::Open) {
                    grid.set_state(np, CellState::Frontier)?;
                }
            }

            on_step.on_step(
                grid,
                Step {
                    pos: cp,
                    cost: current_dist,
                    settled: self.settled.len(),
                },
            );

            if ci != si {
                grid.set_state(cp, CellState::Visited)?;
            }
        }

        Ok(Outcome::NotReached)
    }

    fn check_ready(grid: &Grid, start: Point, end: Point) -> Result<(usize, usize)> {
        let si = grid.check(start)?;
        let ei = grid.check(end)?;
        if si == ei {
            return Err(NotReady::SameEndpoints.into());
        }
        for (p, expected) in [(start, CellState::Start), (end, CellState::End)] {
            if grid.get(p) != Some(expected) {
                return Err(NotReady::EndpointMismatch { point: p, expected }.into());
            }
        }
        if !grid.is_adjacency_fresh() {
            return Err(NotReady::StaleAdjacency.into());
        }
        if grid.states().iter().any(|s| s.is_search_mark()) {
            return Err(NotReady::DirtyGrid.into());
        }
        Ok((si, ei))
    }

    /// Reset the working state for `grid`, reallocating only on resize.
    fn reset(&mut self, grid: &Grid) {
        let len = grid.len();
        self.rows = grid.rows();
        self.distance.clear();
        self.distance.resize(len, UNREACHABLE);
        self.predecessor.clear();
        self.predecessor.resize(len, NO_PARENT);
        self.enqueued.clear();
        self.enqueued.resize(len, false);
        self.frontier.clear();
        self.seq = 0;
        self.settled.clear();
        self.path.clear();
    }

    // -----------------------------------------------------------------------
    // Results of the last run
    // -----------------------------------------------------------------------

    /// Hop distance to `p` from the last run's start, or [`UNREACHABLE`].
    pub fn distance_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.distance[i],
            None => UNREACHABLE,
        }
    }

    /// The cell `p` was reached from in the last run.
    pub fn predecessor_of(&self, p: Point) -> Option<Point> {
        let i = self.idx(p)?;
        match self.predecessor[i] {
            NO_PARENT => None,
            pi => Some(self.point(pi)),
        }
    }

    /// Cells in the order they were settled, with their distances.
    pub fn settled(&self) -> &[PathNode] {
        &self.settled
    }

    /// The path of the last `Found` run, start and end included.
    /// Empty for any other outcome.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        p.to_index(self.rows)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::from_index(idx, self.rows)
    }
}
