//! Error types shared by the grid, the paint controller and the search.

use std::fmt;

use thiserror::Error;

use crate::cell::CellState;
use crate::geom::Point;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("coordinate {point} is outside the {rows}x{rows} grid")]
    OutOfBounds { point: Point, rows: i32 },

    #[error("invalid placement at {point}: {reason}")]
    InvalidPlacement { point: Point, reason: Placement },

    #[error("search not ready: {0}")]
    SearchNotReady(NotReady),

    #[error("illegal transition at {point}: {from} -> {to}")]
    IllegalTransition {
        point: Point,
        from: CellState,
        to: CellState,
    },

    #[error("grid of {0} rows is out of range, need 3 to 1024")]
    InvalidSize(i32),
}

/// Why a paint command was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Painting is frozen while a search is running or finished.
    Frozen,
    /// The End may not share a cell with the Start.
    EndEqualsStart,
    /// The border ring is always barrier.
    Border,
    /// The target cell already holds this state.
    Occupied(CellState),
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frozen => f.write_str("painting is frozen until the search is cleared"),
            Self::EndEqualsStart => f.write_str("end must differ from start"),
            Self::Border => f.write_str("border cells are always barriers"),
            Self::Occupied(s) => write!(f, "cell is already {s}"),
        }
    }
}

/// Why a search could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotReady {
    MissingStart,
    MissingEnd,
    SameEndpoints,
    /// The coordinate given as an endpoint does not hold that endpoint state.
    EndpointMismatch { point: Point, expected: CellState },
    /// Barriers changed since adjacency was last computed.
    StaleAdjacency,
    /// Frontier, Visited or Path marks from an earlier run are still present.
    DirtyGrid,
    /// The session already ran; clear it first.
    AlreadyStarted,
    /// A predecessor chain did not lead back to the start.
    BrokenChain(Point),
}

impl fmt::Display for NotReady {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("no start placed"),
            Self::MissingEnd => f.write_str("no end placed"),
            Self::SameEndpoints => f.write_str("start and end are the same cell"),
            Self::EndpointMismatch { point, expected } => {
                write!(f, "cell {point} does not hold {expected}")
            }
            Self::StaleAdjacency => f.write_str("adjacency is stale, recompute it"),
            Self::DirtyGrid => f.write_str("grid still holds marks from a previous run"),
            Self::AlreadyStarted => f.write_str("a search already ran, clear it first"),
            Self::BrokenChain(p) => write!(f, "predecessor chain breaks at {p}"),
        }
    }
}

impl From<NotReady> for Error {
    fn from(reason: NotReady) -> Self {
        Self::SearchNotReady(reason)
    }
}
