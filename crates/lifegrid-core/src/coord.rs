//! Two-dimensional integer grid coordinates.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// An immutable point on the grid.
///
/// `x` is the column and `y` the row. Any `i32` pair is a legal value;
/// checking that a point lies inside a grid is the job of
/// [`Generation`](crate::Generation).
///
/// Ordering is row-major (`y` first, then `x`), which is the order cells
/// are rendered in and the canonical order generations keep their live
/// cells in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Coordinates {
    x: i32,
    y: i32,
}

impl Coordinates {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a point at column `x`, row `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column component.
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Row component.
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Component-wise sum. Overflow wraps, so a point near `i32::MAX`
    /// lands far outside any grid instead of panicking.
    pub const fn add(self, other: Self) -> Self {
        Self {
            x: self.x.wrapping_add(other.x),
            y: self.y.wrapping_add(other.y),
        }
    }
}

impl Add for Coordinates {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Coordinates::add(self, rhs)
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Ord for Coordinates {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coordinates {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_is_component_wise() {
        let a = Coordinates::new(2, -3);
        let b = Coordinates::new(-1, 5);
        assert_eq!(a.add(b), Coordinates::new(1, 2));
        assert_eq!(a + b, Coordinates::new(1, 2));
    }

    #[test]
    fn add_wraps_instead_of_overflowing() {
        let edge = Coordinates::new(i32::MAX, 0);
        let moved = edge + Coordinates::new(1, 0);
        assert_eq!(moved.x(), i32::MIN);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![
            Coordinates::new(2, 1),
            Coordinates::new(0, 2),
            Coordinates::new(1, 0),
            Coordinates::new(0, 1),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                Coordinates::new(1, 0),
                Coordinates::new(0, 1),
                Coordinates::new(2, 1),
                Coordinates::new(0, 2),
            ]
        );
    }

    #[test]
    fn display_matches_tuple_form() {
        assert_eq!(Coordinates::new(3, -4).to_string(), "(3,-4)");
    }

    proptest! {
        #[test]
        fn add_commutes(ax in -1000i32..1000, ay in -1000i32..1000,
                        bx in -1000i32..1000, by in -1000i32..1000) {
            let a = Coordinates::new(ax, ay);
            let b = Coordinates::new(bx, by);
            prop_assert_eq!(a + b, b + a);
            prop_assert_eq!(a + Coordinates::ORIGIN, a);
        }
    }
}
