use gridpath_core::{CellState, Grid, NotReady, Point, Result};

use crate::engine::NO_PARENT;

/// Walk `predecessor` back from `end` to `start`, marking every cell in
/// between as `Path`.
///
/// `predecessor` is indexed like the grid's cells and holds the flat index
/// of each cell's parent. Start and End keep their states. Returns the full
/// path from `start` to `end`, both included.
///
/// The chain must lead to `start`; that holds after a `Found` run because
/// each parent was settled at a strictly smaller distance. A chain that
/// stops early yields `SearchNotReady(BrokenChain)` with the cells walked so
/// far already marked.
pub fn reconstruct(
    grid: &mut Grid,
    start: Point,
    end: Point,
    predecessor: &[usize],
) -> Result<Vec<Point>> {
    let si = grid.check(start)?;
    let ei = grid.check(end)?;

    let mut path = vec![end];
    let mut ci = ei;
    while ci != si {
        let parent = match predecessor.get(ci) {
            Some(&pi) if pi != NO_PARENT && pi < grid.len() && path.len() <= grid.len() => pi,
            _ => return Err(NotReady::BrokenChain(grid.point(ci)).into()),
        };
        if parent != si {
            let p = grid.point(parent);
            grid.set_state(p, CellState::Path)?;
            path.push(p);
        }
        ci = parent;
    }
    path.push(start);
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Error;

    /// Grid with Start at (1, 1), End at (1, 3) and a settled middle cell.
    fn settled_line() -> (Grid, Vec<usize>) {
        let mut g = Grid::new(5).unwrap();
        g.set_state(Point::new(1, 1), CellState::Start).unwrap();
        g.set_state(Point::new(1, 3), CellState::End).unwrap();
        g.set_state(Point::new(1, 2), CellState::Frontier).unwrap();
        g.set_state(Point::new(1, 2), CellState::Visited).unwrap();

        let mut pred = vec![NO_PARENT; g.len()];
        let idx = |p: Point| g.index(p).unwrap();
        pred[idx(Point::new(1, 2))] = idx(Point::new(1, 1));
        pred[idx(Point::new(1, 3))] = idx(Point::new(1, 2));
        (g, pred)
    }

    #[test]
    fn marks_only_interior_of_path() {
        let (mut g, pred) = settled_line();
        let path = reconstruct(&mut g, Point::new(1, 1), Point::new(1, 3), &pred).unwrap();
        assert_eq!(
            path,
            vec![Point::new(1, 1), Point::new(1, 2), Point::new(1, 3)]
        );
        assert_eq!(g.state(Point::new(1, 1)), Ok(CellState::Start));
        assert_eq!(g.state(Point::new(1, 2)), Ok(CellState::Path));
        assert_eq!(g.state(Point::new(1, 3)), Ok(CellState::End));
    }

    #[test]
    fn adjacent_endpoints_mark_nothing() {
        let mut g = Grid::new(4).unwrap();
        g.set_state(Point::new(1, 1), CellState::Start).unwrap();
        g.set_state(Point::new(1, 2), CellState::End).unwrap();
        let mut pred = vec![NO_PARENT; g.len()];
        pred[g.index(Point::new(1, 2)).unwrap()] = g.index(Point::new(1, 1)).unwrap();

        let path = reconstruct(&mut g, Point::new(1, 1), Point::new(1, 2), &pred).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(g.count(CellState::Path), 0);
    }

    #[test]
    fn broken_chain_is_reported() {
        let (mut g, mut pred) = settled_line();
        let mid = g.index(Point::new(1, 2)).unwrap();
        pred[mid] = NO_PARENT;
        assert_eq!(
            reconstruct(&mut g, Point::new(1, 1), Point::new(1, 3), &pred),
            Err(Error::SearchNotReady(NotReady::BrokenChain(Point::new(1, 2))))
        );
    }
}
