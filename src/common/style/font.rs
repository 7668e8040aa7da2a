use serde::{Deserialize, Serialize};

use super::color::RGBColor;

/// Font styling for a laid-out text box.
///
/// Only the properties the layout engine actually decides are carried here;
/// family resolution is the job of the [`FontRegistry`](crate::fonts::FontRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font size in points
    pub size_pt: f64,
    /// Bold weight
    pub bold: bool,
    /// Explicit color, if the writer should override the template default
    pub color: Option<RGBColor>,
}

impl FontSpec {
    /// Create a new font spec.
    #[inline]
    pub const fn new(size_pt: f64, bold: bool, color: Option<RGBColor>) -> Self {
        Self {
            size_pt,
            bold,
            color,
        }
    }

    /// A regular-weight font at the given size with no color override.
    #[inline]
    pub const fn regular(size_pt: f64) -> Self {
        Self::new(size_pt, false, None)
    }

    /// A bold font at the given size with no color override.
    #[inline]
    pub const fn bold(size_pt: f64) -> Self {
        Self::new(size_pt, true, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let spec = FontSpec::bold(36.0);
        assert_eq!(spec.size_pt, 36.0);
        assert!(spec.bold);
        assert_eq!(spec.color, None);

        let spec = FontSpec::regular(24.0);
        assert!(!spec.bold);
    }
}
