//! The 2-component integer vector and its `Indices`/`Extents` roles.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A pair of `i32` components used throughout the grid layer.
///
/// The same representation serves two roles, distinguished by alias:
/// [`Indices`] locates a single cell, [`Extents`] measures a region.
/// Arithmetic is componentwise; comparisons are AND-reductions over both
/// components, so e.g. `a.all_lt(b)` holds only when *both* components of
/// `a` are strictly below the corresponding components of `b`.
///
/// # Examples
///
/// ```
/// use planar_core::{Extents, Indices};
///
/// let pt = Indices::new(3, 4) + Indices::new(1, 1);
/// assert_eq!(pt, Indices::new(4, 5));
/// assert!(pt.all_lt(Extents::new(5, 6)));
/// assert!(!pt.all_lt(Extents::new(5, 5)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    /// Horizontal component (column axis).
    pub x: i32,
    /// Vertical component (row axis).
    pub y: i32,
}

/// A point locating a single cell.
pub type Indices = Coordinates;

/// A size vector: width (`x`) by height (`y`).
pub type Extents = Coordinates;

impl Coordinates {
    /// The origin / zero-size vector.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Construct from components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Both components set to `v`.
    pub const fn splat(v: i32) -> Self {
        Self { x: v, y: v }
    }

    /// `true` if both components are `>=` the corresponding components of `other`.
    pub const fn all_ge(self, other: Self) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    /// `true` if both components are `>` the corresponding components of `other`.
    pub const fn all_gt(self, other: Self) -> bool {
        self.x > other.x && self.y > other.y
    }

    /// `true` if both components are `<=` the corresponding components of `other`.
    pub const fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// `true` if both components are `<` the corresponding components of `other`.
    pub const fn all_lt(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y
    }

    /// Componentwise absolute value.
    pub const fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Componentwise minimum.
    pub fn min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Componentwise maximum.
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Product of the components, widened to `i64`.
    ///
    /// For an `Extents` this is the cell count of the region; widening keeps
    /// buffer sizing for large grids overflow-free.
    pub const fn area(self) -> i64 {
        self.x as i64 * self.y as i64
    }
}

impl Add for Coordinates {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Coordinates {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Coordinates {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign for Coordinates {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Coordinates {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<i32> for Coordinates {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl MulAssign<i32> for Coordinates {
    fn mul_assign(&mut self, rhs: i32) {
        *self = *self * rhs;
    }
}

impl Div<i32> for Coordinates {
    type Output = Self;

    fn div(self, rhs: i32) -> Self {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl DivAssign<i32> for Coordinates {
    fn div_assign(&mut self, rhs: i32) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
