//! Slide layout composition.
//!
//! Combines title geometry, body geometry, and body font scaling into the
//! full non-overlapping layout for one slide. The ordering is fixed: title
//! first (its height depends only on its own text), then the body box is
//! derived from whatever vertical space remains, then the body font size is
//! scaled to the body box capacity.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::{Length, Rect};
use crate::deck::{Deck, SlideSpec};
use crate::layout::config::LayoutConfig;
use crate::layout::scale::{compute_body_font_size, total_chars};
use crate::layout::title::{TitleLayout, compute_title_layout};
use crate::richtext::{TextRun, segment};

/// Computed geometry, font size, and styled lines for a slide's body box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyLayout {
    /// Body box position and size
    pub rect: Rect,
    /// Body font size in points, within the configured bounds
    pub font_size_pt: f64,
    /// Styled runs per content line, in content order
    pub lines: Vec<Vec<TextRun>>,
}

/// The full layout package for one slide, handed to the presentation writer.
///
/// Either box may be absent when the template offers no matching region
/// (see [`select_title_and_body`](crate::placeholder::select_title_and_body));
/// a title-only slide is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideLayout {
    /// Title box, or `None` when the template offers no title region
    pub title: Option<TitleLayout>,
    /// Body box, or `None` when the template offers no body region
    pub body: Option<BodyLayout>,
    /// Speaker notes carried through unchanged
    pub notes: Option<String>,
    /// Set when the title grew so tall that the body was clamped to its
    /// minimum height and may intrude on the bottom margin. A degradation,
    /// not a fault: callers may surface it as a warning.
    pub degraded: bool,
}

/// Compute the full layout for one slide, assuming both regions exist.
pub fn compose_slide_layout(slide: &SlideSpec, cfg: &LayoutConfig) -> SlideLayout {
    compose_slide_layout_for_regions(slide, cfg, true, true)
}

/// Compute the layout for one slide against the regions a template offers.
///
/// With no title region, body-top math starts from the configured top
/// offset. With no body region, the body is skipped entirely. Pure and
/// deterministic: identical inputs always yield identical layouts.
pub fn compose_slide_layout_for_regions(
    slide: &SlideSpec,
    cfg: &LayoutConfig,
    has_title: bool,
    has_body: bool,
) -> SlideLayout {
    let title = has_title.then(|| compute_title_layout(&slide.title, cfg));

    let body_top = match &title {
        Some(t) => t.rect.bottom() + cfg.title_body_gap,
        None => cfg.title_top,
    };

    let mut degraded = false;
    let body = has_body.then(|| {
        let available = cfg.canvas_height - body_top - cfg.bottom_margin;
        let height = if available < cfg.min_body_height {
            // The title consumed too much vertical space. Emit the body at
            // the minimum height anyway rather than failing; the title is
            // never shrunk to compensate.
            degraded = true;
            cfg.min_body_height
        } else {
            available
        };

        let rect = Rect::new(body_top, cfg.side_margin, cfg.content_width(), height);
        let capacity = effective_capacity(height, cfg);
        let font_size_pt = compute_body_font_size(
            total_chars(&slide.content),
            cfg.body_max_font_pt,
            cfg.body_min_font_pt,
            capacity,
        );
        let lines = slide.content.iter().map(|line| segment(line)).collect();

        BodyLayout {
            rect,
            font_size_pt,
            lines,
        }
    });

    SlideLayout {
        title,
        body,
        notes: slide.notes.clone(),
        degraded,
    }
}

/// Scale the configured base capacity to the body box actually available.
///
/// The base capacity is calibrated for the nominal body box: full content
/// width below a one-line title. When a wrapped title squeezes the body, the
/// budget shrinks in proportion so the font scaler reacts to the real box.
fn effective_capacity(body_height: Length, cfg: &LayoutConfig) -> usize {
    let nominal_top = cfg.title_top + TitleLayout::line_height(cfg) + cfg.title_body_gap;
    let nominal_height = cfg.canvas_height - nominal_top - cfg.bottom_margin;
    if nominal_height.emus() <= 0 {
        return cfg.base_capacity.max(1);
    }

    let ratio = body_height.emus() as f64 / nominal_height.emus() as f64;
    ((cfg.base_capacity as f64 * ratio).floor() as usize).max(1)
}

/// Lay out every slide of a deck, in order.
pub fn layout_deck(deck: &Deck, cfg: &LayoutConfig) -> Vec<SlideLayout> {
    deck.slides
        .iter()
        .map(|slide| compose_slide_layout(slide, cfg))
        .collect()
}

/// Lay out every slide of a deck in parallel.
///
/// Each slide's layout depends only on its own text and the shared immutable
/// configuration, so slides are laid out concurrently. Output order and
/// values are identical to [`layout_deck`].
pub fn layout_deck_parallel(deck: &Deck, cfg: &LayoutConfig) -> Vec<SlideLayout> {
    deck.slides
        .par_iter()
        .map(|slide| compose_slide_layout(slide, cfg))
        .collect()
}
