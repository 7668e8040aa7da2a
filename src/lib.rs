//! Deckgen - a deterministic layout engine for generated slide decks
//!
//! This library turns a structured deck outline (title, per-slide title and
//! bullet lines, speaker notes) into per-slide geometry an external
//! presentation writer can render: a title box, a non-overlapping body box,
//! a bounded body font size, and styled text runs.
//!
//! No native text-measurement API is available ahead of render time, so the
//! engine estimates line-wrap behavior from character counts and scales the
//! body font under a character-capacity heuristic. The invariants hold for
//! any input length: boxes never overlap, margins are respected, and the
//! body font size stays within its configured bounds.
//!
//! # Features
//!
//! - **Deck model**: lenient JSON decoding of generator output
//! - **Title geometry**: wrap-estimated height, top-anchored growth
//! - **Body scaling**: square-root font scaling against box capacity
//! - **Rich text**: `**emphasis**` segmentation into styled runs
//! - **Region selection**: deterministic title/body placeholder choice
//! - **Determinism**: identical inputs yield bit-identical layouts
//!
//! # Example - Laying out a deck
//!
//! ```rust
//! use deckgen::{Deck, LayoutConfig, layout_deck};
//!
//! # fn main() -> Result<(), deckgen::Error> {
//! let deck = Deck::from_json(
//!     r#"{
//!         "title": "Quarterly Review",
//!         "slides": [
//!             {
//!                 "title": "Highlights",
//!                 "content": ["Revenue up **18 percent**", "Churn flat"],
//!                 "notes": "Pause here for questions."
//!             }
//!         ]
//!     }"#,
//! )?;
//!
//! let config = LayoutConfig::default();
//! for layout in layout_deck(&deck, &config) {
//!     let title = layout.title.unwrap();
//!     let body = layout.body.unwrap();
//!     println!("title box: {:.2}cm tall", title.rect.height.cm());
//!     println!("body font: {}pt", body.font_size_pt);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Resolving template regions
//!
//! ```rust
//! use deckgen::{PlaceholderRole, select_title_and_body};
//!
//! // Regions as a template offers them, with opaque writer handles
//! let regions = [
//!     (PlaceholderRole::Title, "ph-0"),
//!     (PlaceholderRole::Object, "ph-1"),
//! ];
//! let selection = select_title_and_body(&regions);
//! assert_eq!(selection.title, Some(0));
//! assert_eq!(selection.body, Some(1));
//! ```

/// Common value types: lengths, boxes, colors, fonts, and errors.
pub mod common;

/// The deck outline model consumed from the content generator.
pub mod deck;

/// Immutable font family registry.
pub mod fonts;

/// The layout engine: metrics, title geometry, font scaling, composition.
pub mod layout;

/// Template region roles and title/body selection.
pub mod placeholder;

/// Inline-emphasis segmentation into styled runs.
pub mod richtext;

// Re-export commonly used types for convenience
pub use common::{Error, FontSpec, Length, RGBColor, Rect, Result};
pub use deck::{Deck, SlideSpec};
pub use fonts::FontRegistry;
pub use layout::{
    BodyLayout, LayoutConfig, SlideLayout, TitleLayout, compose_slide_layout,
    compose_slide_layout_for_regions, layout_deck, layout_deck_parallel,
};
pub use placeholder::{PlaceholderRole, RegionSelection, select_title_and_body};
pub use richtext::{TextRun, segment};
