//! Common types and utilities shared across the crate.
//!
//! This module provides the unit system, geometry and style value types, and
//! the crate-wide error type consumed by both the layout engine and external
//! writers.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{FontSpec, Length, RGBColor, Rect};
