//! The slide layout engine.
//!
//! Given arbitrary-length title and body text and a fixed-size canvas, this
//! module computes non-overlapping geometry for the title and body boxes and
//! a bounded body font size, without native text measurement. Line wrap is
//! estimated from character counts ([`metrics`]), title height follows the
//! estimate ([`title`]), body font size shrinks with the square root of the
//! content/capacity ratio ([`scale`]), and [`compose`] ties the pieces into
//! the per-slide layout package.
//!
//! Everything here is pure and synchronous: no I/O, no shared mutable state,
//! and bit-identical output for identical input.
//!
//! # Example
//!
//! ```rust
//! use deckgen::{LayoutConfig, SlideSpec, compose_slide_layout};
//!
//! let slide = SlideSpec::new("Introduction")
//!     .with_content(["First point", "Second **key** point"]);
//! let layout = compose_slide_layout(&slide, &LayoutConfig::default());
//!
//! let title = layout.title.unwrap();
//! let body = layout.body.unwrap();
//! assert!(body.rect.top > title.rect.bottom());
//! ```

// Submodule declarations
pub mod compose;
pub mod config;
pub mod metrics;
pub mod scale;
pub mod title;

// Re-exports
pub use compose::{
    BodyLayout, SlideLayout, compose_slide_layout, compose_slide_layout_for_regions, layout_deck,
    layout_deck_parallel,
};
pub use config::LayoutConfig;
pub use metrics::estimate_lines;
pub use scale::compute_body_font_size;
pub use title::{TitleLayout, compute_title_layout};
