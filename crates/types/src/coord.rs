//! Grid coordinates and the scalar types they are built from.
//!
//! Every axis value is turned into a totally ordered key before it reaches a
//! backing map. Integers are their own keys. Floats are wrapped so that `-0.0`
//! and `0.0` share a key and every NaN shares a key; otherwise float keys are
//! compared bit-exactly through `total_cmp`, with no epsilon or quantisation.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// A numeric type usable as a grid axis.
///
/// Two scalars address the same cell exactly when their keys are equal.
pub trait Scalar: Copy + PartialOrd + Debug + 'static {
    /// Totally ordered form stored in the backing maps.
    type Key: Ord + Copy + Debug;

    const ZERO: Self;

    fn to_key(self) -> Self::Key;

    fn from_key(key: Self::Key) -> Self;

    /// True for NaN. Always false for integers.
    fn is_nan(self) -> bool;

    /// `self + extent`, or `None` if an integer add overflows. Floats never
    /// fail; `-inf + inf` yields `+inf`.
    fn checked_offset(self, extent: Self) -> Option<Self>;

    /// `hi - lo` for `lo <= hi`, saturating at the upper end of the type.
    fn span(lo: Self, hi: Self) -> Self;
}

macro_rules! impl_int_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                type Key = $t;

                const ZERO: Self = 0;

                #[inline]
                fn to_key(self) -> Self::Key {
                    self
                }

                #[inline]
                fn from_key(key: Self::Key) -> Self {
                    key
                }

                #[inline]
                fn is_nan(self) -> bool {
                    false
                }

                #[inline]
                fn checked_offset(self, extent: Self) -> Option<Self> {
                    self.checked_add(extent)
                }

                #[inline]
                fn span(lo: Self, hi: Self) -> Self {
                    hi.saturating_sub(lo)
                }
            }
        )*
    };
}

impl_int_scalar!(i32, i64, u32, u64);

macro_rules! impl_float_scalar {
    ($key:ident, $t:ty) => {
        /// Totally ordered map key for a float axis value.
        ///
        /// Canonicalises `-0.0` to `0.0` and every NaN to a single positive
        /// NaN, which sorts above `+inf`.
        #[derive(Debug, Clone, Copy)]
        pub struct $key($t);

        impl $key {
            #[inline]
            pub fn new(value: $t) -> Self {
                if value.is_nan() {
                    Self(<$t>::NAN)
                } else if value == 0.0 {
                    Self(0.0)
                } else {
                    Self(value)
                }
            }

            #[inline]
            pub fn get(self) -> $t {
                self.0
            }
        }

        impl PartialEq for $key {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for $key {}

        impl PartialOrd for $key {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $key {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Hash for $key {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.to_bits().hash(state);
            }
        }

        impl Scalar for $t {
            type Key = $key;

            const ZERO: Self = 0.0;

            #[inline]
            fn to_key(self) -> Self::Key {
                $key::new(self)
            }

            #[inline]
            fn from_key(key: Self::Key) -> Self {
                key.get()
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn checked_offset(self, extent: Self) -> Option<Self> {
                let end = self + extent;
                // -inf + inf
                Some(if end.is_nan() { <$t>::INFINITY } else { end })
            }

            #[inline]
            fn span(lo: Self, hi: Self) -> Self {
                if lo == hi {
                    return 0.0;
                }
                let span = hi - lo;
                // -inf to +inf
                if span.is_nan() { <$t>::INFINITY } else { span }
            }
        }
    };
}

impl_float_scalar!(F32Key, f32);
impl_float_scalar!(F64Key, f64);

/// A cell address on the plane.
///
/// `PartialEq` is plain numeric equality of the fields. Map identity is
/// decided by [`Scalar::Key`], see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord<T> {
    pub x: T,
    pub y: T,
}

impl<T> Coord<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Coord<T> {
    /// True if either axis is NaN. Such a coordinate can be stored and looked
    /// up, but no rectangle contains it.
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Whether two coordinates address the same cell.
    pub fn same_cell(&self, other: &Self) -> bool {
        self.x.to_key() == other.x.to_key() && self.y.to_key() == other.y.to_key()
    }
}

impl<T> From<(T, T)> for Coord<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Coord<T>> for (T, T) {
    fn from(coord: Coord<T>) -> Self {
        (coord.x, coord.y)
    }
}

impl<T: geo::CoordNum> From<geo::Coord<T>> for Coord<T> {
    fn from(coord: geo::Coord<T>) -> Self {
        Self {
            x: coord.x,
            y: coord.y,
        }
    }
}

impl<T: geo::CoordNum> From<geo::Point<T>> for Coord<T> {
    fn from(point: geo::Point<T>) -> Self {
        point.0.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_zero_shares_key() {
        assert_eq!((-0.0f64).to_key(), 0.0f64.to_key());
        assert!(Coord::new(-0.0, 1.0).same_cell(&Coord::new(0.0, 1.0)));
    }

    #[test]
    fn test_nan_keys_collapse() {
        let a = f64::NAN.to_key();
        let b = (-f64::NAN).to_key();
        assert_eq!(a, b);
        assert!(a > f64::INFINITY.to_key());
    }

    #[test]
    fn test_close_floats_are_distinct() {
        let a = 0.1f64 + 0.2;
        assert_ne!(a.to_key(), 0.3f64.to_key());
    }

    #[test]
    fn test_float_key_order() {
        let mut keys: Vec<F64Key> = [3.0, -1.5, f64::NEG_INFINITY, 0.0, 2.25]
            .into_iter()
            .map(Scalar::to_key)
            .collect();
        keys.sort();
        let values: Vec<f64> = keys.into_iter().map(f64::from_key).collect();
        assert_eq!(values, vec![f64::NEG_INFINITY, -1.5, 0.0, 2.25, 3.0]);
    }

    #[test]
    fn test_integer_offset_overflow() {
        assert_eq!(i32::MAX.checked_offset(10), None);
        assert_eq!((i32::MAX - 1).checked_offset(1), Some(i32::MAX));
        assert_eq!(5u32.checked_offset(3), Some(8));
        assert_eq!(i32::span(i32::MIN, i32::MAX), i32::MAX);
    }

    #[test]
    fn test_float_offset_of_opposite_infinities() {
        assert_eq!(
            f64::NEG_INFINITY.checked_offset(f64::INFINITY),
            Some(f64::INFINITY)
        );
    }

    #[test]
    fn test_float_span_between_equal_infinities_is_zero() {
        assert_eq!(f64::span(f64::INFINITY, f64::INFINITY), 0.0);
        assert_eq!(f32::span(f32::NEG_INFINITY, f32::NEG_INFINITY), 0.0);
        assert_eq!(f64::span(f64::NEG_INFINITY, f64::INFINITY), f64::INFINITY);
        assert_eq!(f64::span(1.5, 4.0), 2.5);
    }

    #[test]
    fn test_geo_conversions() {
        let c: Coord<f64> = geo::coord! { x: 1.5, y: -2.0 }.into();
        assert_eq!(c, Coord::new(1.5, -2.0));

        let p: Coord<i32> = geo::Point::new(3, 4).into();
        assert_eq!(p, Coord::new(3, 4));
    }

    #[test]
    fn test_tuple_roundtrip() {
        let c = Coord::from((7i64, 9i64));
        let (x, y) = c.into();
        assert_eq!((x, y), (7, 9));
    }
}
