//! Title box geometry.

use serde::{Deserialize, Serialize};

use crate::common::{FontSpec, Length, Rect};
use crate::layout::config::LayoutConfig;
use crate::layout::metrics::estimate_lines;

/// Computed geometry and styling for a slide's title box.
///
/// The box is anchored at the configured top offset and side margin, and text
/// inside it is anchored to the box top: when a long title wraps, the extra
/// height grows downward only and the top edge never moves. That property is
/// what lets the body box be positioned relative to the title bottom without
/// a second pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleLayout {
    /// Title box position and size
    pub rect: Rect,
    /// Title font styling
    pub font: FontSpec,
}

impl TitleLayout {
    /// Height of a single title line under the given configuration.
    #[inline]
    pub fn line_height(cfg: &LayoutConfig) -> Length {
        Length::from_points(cfg.title_font_pt * cfg.line_height_factor)
    }
}

/// Compute the title box layout for the given title text.
///
/// Width and position are fixed by the configuration; only the height varies,
/// with the estimated wrap count. Defined for any string, including empty
/// titles (which still reserve one line of height).
pub fn compute_title_layout(title_text: &str, cfg: &LayoutConfig) -> TitleLayout {
    // Width and position first; the height estimate depends on the width.
    let width = cfg.content_width();
    let left = cfg.side_margin;
    let top = cfg.title_top;

    let char_count = title_text.chars().count();
    let lines = estimate_lines(char_count, cfg.title_font_pt, width, cfg.char_width_factor);
    let height = TitleLayout::line_height(cfg).scaled(lines as i64);

    TitleLayout {
        rect: Rect::new(top, left, width, height),
        font: FontSpec::new(cfg.title_font_pt, cfg.title_bold, cfg.title_color),
    }
}
