//! Random barrier placement.

use gridpath_core::{CellState, Placed, Point, Result};
use gridpath_search::Session;
use rand::{Rng, RngExt};

/// Turn each open interior cell into a barrier with probability `density`.
///
/// Endpoints and existing barriers are left alone. Returns the number of
/// barriers added; fails like any other paint command while the session is
/// frozen.
pub fn scatter_barriers<R: Rng>(session: &mut Session, rng: &mut R, density: f64) -> Result<usize> {
    let grid = session.grid();
    let candidates: Vec<Point> = grid
        .iter()
        .filter(|&(p, s)| s == CellState::Open && !grid.is_border(p))
        .map(|(p, _)| p)
        .collect();

    let mut placed = 0;
    for p in candidates {
        if rng.random_range(0.0..1.0) < density && session.barrier(p)? == Placed::Barrier {
            placed += 1;
        }
    }
    log::debug!("scattered {} barriers at density {:.2}", placed, density);
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::{Error, Grid, Placement};
    use gridpath_search::{SessionConfig, Step};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session {
        let mut s = Session::new(SessionConfig::default().with_rows(8)).unwrap();
        s.place(Point::new(1, 1)).unwrap();
        s.place(Point::new(6, 6)).unwrap();
        s
    }

    #[test]
    fn density_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut s = session();
        assert_eq!(scatter_barriers(&mut s, &mut rng, 0.0), Ok(0));

        let mut s = session();
        // 6x6 interior minus the two endpoints.
        assert_eq!(scatter_barriers(&mut s, &mut rng, 1.0), Ok(34));
        assert_eq!(s.grid().state(Point::new(1, 1)), Ok(CellState::Start));
        assert_eq!(s.grid().state(Point::new(6, 6)), Ok(CellState::End));
        assert_eq!(s.grid().count(CellState::Open), 0);
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = session();
        let mut b = session();
        scatter_barriers(&mut a, &mut StdRng::seed_from_u64(7), 0.3).unwrap();
        scatter_barriers(&mut b, &mut StdRng::seed_from_u64(7), 0.3).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn frozen_session_is_untouched() {
        let mut s = session();
        // Cancelled before the first settle: frozen, but still all open.
        s.run(|_: &Grid, _: Step| {}, || true).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            scatter_barriers(&mut s, &mut rng, 1.0),
            Err(Error::InvalidPlacement {
                reason: Placement::Frozen,
                ..
            })
        ));
    }
}
