//! Common style and geometry types.
//!
//! This module provides the value types shared by the layout engine and the
//! external presentation writer: lengths, boxes, colors, and font styling.

// Submodule declarations
pub mod color;
pub mod font;
pub mod len;
pub mod rect;

// Re-exports
pub use color::RGBColor;
pub use font::FontSpec;
pub use len::Length;
pub use rect::Rect;
