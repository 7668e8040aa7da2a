use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::common::unit::{EMUS_PER_CM, EMUS_PER_INCH, EMUS_PER_PT};

/// Length measurement with units.
///
/// Represents a measurement value used for dimensions, positions, etc.
/// Presentation containers primarily use EMUs (English Metric Units), and
/// storing lengths as integer EMUs keeps layout arithmetic exact: identical
/// inputs always produce bit-identical geometry.
///
/// # Examples
///
/// ```rust
/// use deckgen::common::Length;
///
/// // Create from EMUs
/// let length = Length::from_emus(914400); // 1 inch
///
/// // Convert to different units
/// let inches = length.inches();
/// let cm = length.cm();
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Length {
    /// Value in EMUs (English Metric Units)
    /// 1 inch = 914,400 EMUs
    /// 1 cm = 360,000 EMUs
    emus: i64,
}

impl Length {
    /// A zero-valued length.
    pub const ZERO: Length = Length { emus: 0 };

    /// Create a length from EMUs (English Metric Units).
    ///
    /// EMUs are the native unit used in presentation containers.
    /// - 1 inch = 914,400 EMUs
    /// - 1 cm = 360,000 EMUs
    /// - 1 pt = 12,700 EMUs
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self {
            emus: (inches * EMUS_PER_INCH as f64) as i64,
        }
    }

    /// Create a length from centimeters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deckgen::common::Length;
    ///
    /// let length = Length::from_cm(2.54); // ~1 inch
    /// ```
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self {
            emus: (cm * EMUS_PER_CM as f64) as i64,
        }
    }

    /// Create a length from points (1/72 inch).
    ///
    /// Font metrics are point-denominated, so this is the bridge from
    /// font-derived heights into canvas geometry.
    #[inline]
    pub fn from_points(points: f64) -> Self {
        Self {
            emus: (points * EMUS_PER_PT as f64) as i64,
        }
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    /// Convert to centimeters.
    #[inline]
    pub fn cm(&self) -> f64 {
        self.emus as f64 / EMUS_PER_CM as f64
    }

    /// Convert to points (1/72 inch).
    #[inline]
    pub fn points(&self) -> f64 {
        self.emus as f64 / EMUS_PER_PT as f64
    }

    /// Scale by an integer factor (e.g. line count times line height).
    #[inline]
    pub const fn scaled(&self, factor: i64) -> Self {
        Self {
            emus: self.emus * factor,
        }
    }
}

impl Add for Length {
    type Output = Length;

    #[inline]
    fn add(self, rhs: Length) -> Length {
        Length::from_emus(self.emus + rhs.emus)
    }
}

impl Sub for Length {
    type Output = Length;

    #[inline]
    fn sub(self, rhs: Length) -> Length {
        Length::from_emus(self.emus - rhs.emus)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}cm", self.cm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let one_inch = Length::from_inches(1.0);
        assert_eq!(one_inch.emus(), 914_400);
        assert!((one_inch.cm() - 2.54).abs() < 1e-9);
        assert!((one_inch.points() - 72.0).abs() < 1e-9);

        let one_pt = Length::from_points(1.0);
        assert_eq!(one_pt.emus(), 12_700);
    }

    #[test]
    fn test_arithmetic() {
        let a = Length::from_cm(1.0);
        let b = Length::from_cm(0.5);
        assert_eq!((a + b).emus(), Length::from_cm(1.5).emus());
        assert_eq!((a - b).emus(), b.emus());
        assert_eq!(a.scaled(3).emus(), Length::from_cm(3.0).emus());
    }

    #[test]
    fn test_ordering() {
        assert!(Length::from_cm(1.0) < Length::from_inches(1.0));
        assert_eq!(Length::from_points(72.0), Length::from_inches(1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::from_cm(2.5).to_string(), "2.50cm");
    }
}
