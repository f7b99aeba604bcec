//! Origin/extents pairs describing addressable regions.

use crate::error::GridError;
use crate::{Extents, Indices};
use std::fmt;

/// An origin plus extents, describing a rectangular addressable region.
///
/// Both storage grids and views speak in terms of `Bounds`: a storage grid
/// owns the region `[0, extents)`, while a view carries bounds relative to
/// its parent. The region is half-open: a point `p` is within bounds iff
/// `p >= origin` and `p < origin + extents`, componentwise.
///
/// Invariant: extents are never negative. Runtime construction goes through
/// [`Bounds::new`], which rejects negative extents; the const constructors
/// ([`Bounds::fixed`], [`Bounds::sized`]) turn a negative extent into a
/// compile-time error when evaluated in const context.
///
/// # Examples
///
/// ```
/// use planar_core::{Bounds, Extents, Indices};
///
/// let b = Bounds::new(Indices::new(2, 3), Extents::new(4, 4)).unwrap();
/// assert!(b.within(Indices::new(2, 3)));
/// assert!(b.within(Indices::new(5, 6)));
/// assert!(!b.within(Indices::new(6, 6)));
/// assert_eq!(b.center(), Indices::new(4, 5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    origin: Indices,
    extents: Extents,
}

impl Bounds {
    /// Construct bounds from an origin and extents.
    ///
    /// Returns [`GridError::NegativeExtents`] if either extent is negative.
    pub fn new(origin: Indices, extents: Extents) -> Result<Self, GridError> {
        if !extents.all_ge(Extents::ZERO) {
            return Err(GridError::NegativeExtents { extents });
        }
        Ok(Self { origin, extents })
    }

    /// Bounds anchored at the origin with the given extents.
    pub fn from_extents(extents: Extents) -> Result<Self, GridError> {
        Self::new(Indices::ZERO, extents)
    }

    /// Bounds with origin and extents both fixed at compile time.
    ///
    /// Evaluating this in const context with a negative `W` or `H` fails
    /// the build; at runtime it panics.
    pub const fn fixed<const X: i32, const Y: i32, const W: i32, const H: i32>() -> Self {
        assert!(W >= 0 && H >= 0, "Bounds::fixed: negative extents");
        Self {
            origin: Indices::new(X, Y),
            extents: Extents::new(W, H),
        }
    }

    /// Bounds with compile-time extents anchored at a runtime origin.
    pub const fn sized<const W: i32, const H: i32>(origin: Indices) -> Self {
        assert!(W >= 0 && H >= 0, "Bounds::sized: negative extents");
        Self {
            origin,
            extents: Extents::new(W, H),
        }
    }

    /// Constructor for callers that have already validated extents.
    ///
    /// The caller must ensure both extents are non-negative; this is
    /// debug-asserted. Grid backends use this on their own extents, which
    /// are validated once at construction.
    pub const fn new_unchecked(origin: Indices, extents: Extents) -> Self {
        debug_assert!(extents.x >= 0 && extents.y >= 0);
        Self { origin, extents }
    }

    /// The bottom-left corner of the region.
    pub const fn origin(self) -> Indices {
        self.origin
    }

    /// The size of the region.
    pub const fn extents(self) -> Extents {
        self.extents
    }

    /// The center point, `origin + extents / 2`.
    pub fn center(self) -> Indices {
        self.origin + self.extents / 2
    }

    /// `true` if the extents are zero on both axes.
    pub const fn is_empty(self) -> bool {
        self.extents.x == 0 && self.extents.y == 0
    }

    /// Number of cells in the region.
    pub const fn area(self) -> i64 {
        self.extents.area()
    }

    /// `true` if `pt` falls inside the region (half-open on both axes).
    pub fn within(self, pt: Indices) -> bool {
        pt.all_ge(self.origin) && pt.all_lt(self.origin + self.extents)
    }

    /// `true` if `other` lies entirely inside `self`.
    pub fn contains(self, other: Self) -> bool {
        other.origin.all_ge(self.origin)
            && (other.origin + other.extents).all_le(self.origin + self.extents)
    }

    /// `true` if the two regions share at least one cell.
    ///
    /// Tested independently per axis: the half-open intervals
    /// `[origin, origin + extents)` must intersect on *both* axes.
    /// Empty bounds overlap nothing.
    pub fn overlaps(self, other: Self) -> bool {
        self.origin.all_lt(other.origin + other.extents)
            && other.origin.all_lt(self.origin + self.extents)
    }

    /// The same extents shifted by `offset`.
    pub fn translated(self, offset: Indices) -> Self {
        Self {
            origin: self.origin + offset,
            extents: self.extents,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[({}) + ({})]", self.origin, self.extents)
    }
}
