//! Axis-aligned query rectangles.

use crate::coord::{Coord, Scalar};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Bound;
use thiserror::Error;

/// One of the two plane axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Which edges of a rectangle count as inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Containment {
    /// `min <= v < max` on both axes. A zero-width or zero-height rectangle
    /// contains nothing.
    #[default]
    HalfOpen,
    /// `min <= v <= max` on both axes. A zero-width rectangle covers exactly
    /// one column, a zero-height rectangle exactly one row.
    Closed,
}

/// Error returned when a rectangle cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RectError {
    #[error("{axis} extent must be non-negative, got {value}")]
    NegativeExtent { axis: Axis, value: String },
    #[error("{axis} extent is NaN")]
    NanExtent { axis: Axis },
    #[error("rectangle corner has a NaN coordinate")]
    NanOrigin,
    #[error("{axis} edge overflows: origin {origin} + extent {extent}")]
    Overflow {
        axis: Axis,
        origin: String,
        extent: String,
    },
}

/// An axis-aligned rectangle, built from an origin (minimum corner) and
/// non-negative extents, or from two corners.
///
/// Both corners are stored, so a rectangle spanning a whole integer axis
/// keeps its exact maximum even when the width would overflow. Deserializing
/// goes through [`Rect::from_corners`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect<T> {
    min: Coord<T>,
    max: Coord<T>,
}

fn check_extent<T: Scalar>(axis: Axis, value: T) -> Result<(), RectError> {
    if value.is_nan() {
        return Err(RectError::NanExtent { axis });
    }
    if value < T::ZERO {
        return Err(RectError::NegativeExtent {
            axis,
            value: format!("{:?}", value),
        });
    }
    Ok(())
}

fn checked_edge<T: Scalar>(axis: Axis, origin: T, extent: T) -> Result<T, RectError> {
    origin
        .checked_offset(extent)
        .ok_or_else(|| RectError::Overflow {
            axis,
            origin: format!("{:?}", origin),
            extent: format!("{:?}", extent),
        })
}

impl<T: Scalar> Rect<T> {
    /// Create a rectangle from its origin and extents.
    ///
    /// Negative or NaN extents and NaN origins are rejected, as are integer
    /// extents whose far edge does not fit the type; use
    /// [`Rect::from_corners`] to reach the type's maximum. Infinite extents
    /// are allowed and give an unbounded rectangle along that axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridmap_types::{Coord, Rect};
    ///
    /// let board = Rect::new(Coord::new(0, 0), 8, 8).unwrap();
    /// assert_eq!(board.max(), Coord::new(8, 8));
    ///
    /// assert!(Rect::new(Coord::new(0.0, 0.0), -1.0, 2.0).is_err());
    /// ```
    pub fn new(origin: Coord<T>, width: T, height: T) -> Result<Self, RectError> {
        if origin.is_nan() {
            return Err(RectError::NanOrigin);
        }
        check_extent(Axis::X, width)?;
        check_extent(Axis::Y, height)?;
        let max_x = checked_edge(Axis::X, origin.x, width)?;
        let max_y = checked_edge(Axis::Y, origin.y, height)?;
        Ok(Self {
            min: origin,
            max: Coord::new(max_x, max_y),
        })
    }

    /// Create the smallest rectangle spanning two corners, in any order.
    pub fn from_corners(a: Coord<T>, b: Coord<T>) -> Result<Self, RectError> {
        if a.is_nan() || b.is_nan() {
            return Err(RectError::NanOrigin);
        }
        let (min_x, max_x) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
        let (min_y, max_y) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
        Ok(Self {
            min: Coord::new(min_x, min_y),
            max: Coord::new(max_x, max_y),
        })
    }

    pub fn origin(&self) -> Coord<T> {
        self.min
    }

    /// Extent along x (saturating for integers).
    pub fn width(&self) -> T {
        T::span(self.min.x, self.max.x)
    }

    /// Extent along y (saturating for integers).
    pub fn height(&self) -> T {
        T::span(self.min.y, self.max.y)
    }

    /// The minimum corner; same as [`Rect::origin`].
    pub fn min(&self) -> Coord<T> {
        self.min
    }

    /// The maximum corner. For [`Rect::new`] this is `origin + extent`.
    pub fn max(&self) -> Coord<T> {
        self.max
    }

    /// Check whether a coordinate lies inside under the given convention.
    pub fn contains(&self, coord: &Coord<T>, containment: Containment) -> bool {
        let (min, max) = (self.min, self.max);
        match containment {
            Containment::HalfOpen => {
                coord.x >= min.x && coord.x < max.x && coord.y >= min.y && coord.y < max.y
            }
            Containment::Closed => {
                coord.x >= min.x && coord.x <= max.x && coord.y >= min.y && coord.y <= max.y
            }
        }
    }

    /// Key bounds covering this rectangle along one axis.
    ///
    /// Returns `None` when the range is empty, so the result can be handed to
    /// `BTreeMap::range` without tripping its ordering assertions.
    pub fn key_range(
        &self,
        axis: Axis,
        containment: Containment,
    ) -> Option<(Bound<T::Key>, Bound<T::Key>)> {
        let (lo_key, hi_key) = match axis {
            Axis::X => (self.min.x.to_key(), self.max.x.to_key()),
            Axis::Y => (self.min.y.to_key(), self.max.y.to_key()),
        };
        match containment {
            Containment::HalfOpen if lo_key < hi_key => {
                Some((Bound::Included(lo_key), Bound::Excluded(hi_key)))
            }
            Containment::Closed if lo_key <= hi_key => {
                Some((Bound::Included(lo_key), Bound::Included(hi_key)))
            }
            _ => None,
        }
    }
}

impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for Rect<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Corners<T> {
            min: Coord<T>,
            max: Coord<T>,
        }

        let Corners { min, max } = Corners::deserialize(deserializer)?;
        Rect::from_corners(min, max).map_err(serde::de::Error::custom)
    }
}

impl<T: Scalar + geo::CoordNum> From<geo::Rect<T>> for Rect<T> {
    fn from(rect: geo::Rect<T>) -> Self {
        Self {
            min: rect.min().into(),
            max: rect.max().into(),
        }
    }
}
