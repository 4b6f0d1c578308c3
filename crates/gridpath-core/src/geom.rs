//! Grid coordinates: [`Point`] and [`Direction`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A grid coordinate. `row` grows down, `col` grows right.
///
/// Ordering is row-major, matching the iteration order of
/// [`Grid::iter`](crate::Grid::iter).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Row-major index of this point in a `side x side` square, or `None`
    /// if it lies outside.
    #[inline]
    pub const fn to_index(self, side: i32) -> Option<usize> {
        if self.row < 0 || self.col < 0 || self.row >= side || self.col >= side {
            return None;
        }
        Some(self.row as usize * side as usize + self.col as usize)
    }

    /// Inverse of [`to_index`](Point::to_index).
    #[inline]
    pub const fn from_index(idx: usize, side: i32) -> Self {
        let w = side as usize;
        Self::new((idx / w) as i32, (idx % w) as i32)
    }

    /// The neighbour one step away in direction `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let d = dir.delta();
        self.shift(d.row, d.col)
    }

    /// The four cardinal neighbours in search priority order
    /// (down, up, right, left). Bounds are not checked.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Direction::ALL.map(|d| self.step(d))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// All directions, in the order adjacency lists are built.
    pub const ALL: [Direction; 4] = [Self::Down, Self::Up, Self::Right, Self::Left];

    /// Unit offset for this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::Down => Point::new(1, 0),
            Self::Up => Point::new(-1, 0),
            Self::Right => Point::new(0, 1),
            Self::Left => Point::new(0, -1),
        }
    }
}
