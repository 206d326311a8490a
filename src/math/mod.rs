//! Rounded coordinates
//!
//! Upstream geometry carries floating-point noise, so every coordinate is
//! rounded to [`DECIMALS`] decimal places before it is compared. The rounded
//! value is stored as an integer count of hundredths, which makes equality,
//! ordering and hashing exact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places coordinates are rounded to
pub const DECIMALS: i32 = 2;

/// 10^DECIMALS
const SCALE: f64 = 100.0;

/// Largest magnitude (in source units) a coordinate may have
const MAX_ABS: f64 = 1.0e12;

/// A coordinate rounded to two decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coord(i64);

impl Coord {
    /// The origin coordinate
    pub const ZERO: Coord = Coord(0);

    /// Round a raw value. Returns `None` for NaN, infinities and values
    /// too large to be a building coordinate.
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() > MAX_ABS {
            return None;
        }
        Some(Self((value * SCALE).round() as i64))
    }

    /// Build from an integer count of hundredths
    pub fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// The rounded value in source units
    pub fn value(self) -> f64 {
        self.0 as f64 / SCALE
    }

    /// The rounded value as an integer count of hundredths
    pub fn hundredths(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Midpoint of two coordinates, rounded again
    pub fn midpoint(a: Coord, b: Coord) -> Coord {
        Coord(((a.0 + b.0) as f64 / 2.0).round() as i64)
    }

    /// Difference `self - other` in source units
    pub fn span_to(self, other: Coord) -> f64 {
        (other.0 - self.0) as f64 / SCALE
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Round a raw value to [`DECIMALS`] places, keeping it as `f64`
pub fn round(value: f64) -> f64 {
    (value * SCALE).round() / SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_absorbs_noise() {
        let a = Coord::new(4999.999_999).unwrap();
        let b = Coord::new(5000.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.value(), 5000.0);
    }

    #[test]
    fn test_two_hundredths_apart_differ() {
        let a = Coord::new(5000.02).unwrap();
        let b = Coord::new(5000.0).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.hundredths() - b.hundredths(), 2);
        assert_eq!(Coord::from_hundredths(500_002), a);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Coord::new(f64::NAN).is_none());
        assert!(Coord::new(f64::INFINITY).is_none());
        assert!(Coord::new(1.0e15).is_none());
    }

    #[test]
    fn test_midpoint() {
        let a = Coord::new(0.0).unwrap();
        let b = Coord::new(5000.0).unwrap();
        assert_eq!(Coord::midpoint(a, b).value(), 2500.0);
        let c = Coord::new(0.01).unwrap();
        assert_eq!(Coord::midpoint(Coord::ZERO, c).hundredths(), 1);
    }

    #[test]
    fn test_ordering_and_span() {
        let a = Coord::new(-250.5).unwrap();
        let b = Coord::new(1200.25).unwrap();
        assert!(a < b);
        assert!((a.span_to(b) - 1450.75).abs() < 1e-9);
        assert_eq!(round(1.234_9), 1.23);
    }
}
