use serde::{Deserialize, Serialize};

use super::len::Length;

/// An axis-aligned box on the slide canvas.
///
/// Positions grow rightward and downward from the canvas origin, matching the
/// coordinate system of presentation containers.
///
/// # Examples
///
/// ```rust
/// use deckgen::common::{Length, Rect};
///
/// let rect = Rect::new(
///     Length::from_cm(0.6),
///     Length::from_cm(1.0),
///     Length::from_cm(31.8),
///     Length::from_cm(1.4),
/// );
/// assert!(rect.bottom() > rect.top);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the canvas top to the box top
    pub top: Length,
    /// Distance from the canvas left edge to the box left edge
    pub left: Length,
    /// Box width
    pub width: Length,
    /// Box height
    pub height: Length,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(top: Length, left: Length, width: Length, height: Length) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Distance from the canvas top to the box bottom edge.
    #[inline]
    pub fn bottom(&self) -> Length {
        self.top + self.height
    }

    /// Distance from the canvas left edge to the box right edge.
    #[inline]
    pub fn right(&self) -> Length {
        self.left + self.width
    }
}
