//! The [`CellState`] tag and its transition rules.

use std::fmt;

/// The state held by a single grid cell.
///
/// States carry meaning only; colours and glyphs are chosen by whatever
/// front-end draws the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Empty, traversable.
    #[default]
    Open,
    /// Impassable. Excluded from adjacency as source and destination.
    Barrier,
    Start,
    End,
    /// Discovered by a running search but not yet settled.
    Frontier,
    /// Settled by a search.
    Visited,
    /// Part of the reconstructed shortest path.
    Path,
}

impl CellState {
    pub const ALL: [CellState; 7] = [
        Self::Open,
        Self::Barrier,
        Self::Start,
        Self::End,
        Self::Frontier,
        Self::Visited,
        Self::Path,
    ];

    /// Whether `self -> next` is a legal transition.
    ///
    /// Any state may return to `Open`. `Start -> Start` and `End -> End` are
    /// allowed so a finished search can re-assert its endpoints.
    pub const fn can_become(self, next: CellState) -> bool {
        use CellState::*;
        matches!(
            (self, next),
            (_, Open)
                | (Open, Barrier | Start | End | Frontier)
                | (Frontier, Visited)
                | (Visited, Path)
                | (Start, Start)
                | (End, End)
        )
    }

    #[inline]
    pub const fn is_barrier(self) -> bool {
        matches!(self, Self::Barrier)
    }

    /// Start or End.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// States written by a search run: Frontier, Visited or Path.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Frontier | Self::Visited | Self::Path)
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Barrier => "barrier",
            Self::Start => "start",
            Self::End => "end",
            Self::Frontier => "frontier",
            Self::Visited => "visited",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
