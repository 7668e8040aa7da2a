//! Layout configuration.
//!
//! Every heuristic constant the engine relies on lives here as a named,
//! overridable field. The defaults were calibrated against Latin/Vietnamese
//! proportional-sans text on the 16:9 canvas; none of them is derived from
//! first principles, so callers targeting other scripts or fonts should
//! expect to re-tune.

use serde::{Deserialize, Serialize};

use crate::common::{Error, Length, RGBColor, Result};

/// Tunable constants for slide layout.
///
/// # Examples
///
/// ```rust
/// use deckgen::LayoutConfig;
///
/// // Create with defaults
/// let config = LayoutConfig::default();
///
/// // Or customize
/// let config = LayoutConfig::new()
///     .with_title_font_pt(40.0)
///     .with_body_font_bounds(22.0, 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas width (default: the 16:9 slide surface, 33.867 cm)
    pub canvas_width: Length,
    /// Canvas height (default: 19.05 cm)
    pub canvas_height: Length,
    /// Margin kept clear on both the left and right canvas edges
    pub side_margin: Length,
    /// Fixed top offset of the title box
    pub title_top: Length,
    /// Vertical spacing enforced between the title box and the body box
    pub title_body_gap: Length,
    /// Margin reserved at the foot of the canvas
    pub bottom_margin: Length,
    /// Floor for the body box height when a tall title squeezes it
    pub min_body_height: Length,
    /// Title font size in points
    pub title_font_pt: f64,
    /// Title font weight
    pub title_bold: bool,
    /// Explicit title color, if the writer should override the template
    pub title_color: Option<RGBColor>,
    /// Body font size ceiling in points
    pub body_max_font_pt: f64,
    /// Body font size floor in points
    pub body_min_font_pt: f64,
    /// Character count that fits the nominal body box at the maximum font size
    pub base_capacity: usize,
    /// Average character width as a fraction of the font size
    pub char_width_factor: f64,
    /// Line height as a multiple of the font size (tight leading)
    pub line_height_factor: f64,
    /// Accent color for emphasized text runs. [`TextRun`](crate::richtext::TextRun)
    /// carries only text and weight; the external writer reads this field and
    /// applies the color to every run marked bold.
    pub accent_color: RGBColor,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: Length::from_emus(12_192_000),
            canvas_height: Length::from_emus(6_858_000),
            side_margin: Length::from_cm(1.0),
            title_top: Length::from_cm(0.6),
            title_body_gap: Length::from_cm(0.4),
            bottom_margin: Length::from_cm(1.0),
            min_body_height: Length::from_cm(2.0),
            title_font_pt: 36.0,
            title_bold: true,
            title_color: None,
            body_max_font_pt: 24.0,
            body_min_font_pt: 10.0,
            base_capacity: 300,
            char_width_factor: 0.55,
            line_height_factor: 1.1,
            accent_color: RGBColor::new(31, 78, 121),
        }
    }
}

impl LayoutConfig {
    /// Create a new `LayoutConfig` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas dimensions.
    #[inline]
    pub fn with_canvas(mut self, width: Length, height: Length) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the left/right margin.
    #[inline]
    pub fn with_side_margin(mut self, margin: Length) -> Self {
        self.side_margin = margin;
        self
    }

    /// Set the fixed top offset of the title box.
    #[inline]
    pub fn with_title_top(mut self, top: Length) -> Self {
        self.title_top = top;
        self
    }

    /// Set the title-to-body gap.
    #[inline]
    pub fn with_title_body_gap(mut self, gap: Length) -> Self {
        self.title_body_gap = gap;
        self
    }

    /// Set the bottom margin.
    #[inline]
    pub fn with_bottom_margin(mut self, margin: Length) -> Self {
        self.bottom_margin = margin;
        self
    }

    /// Set the minimum safe body height.
    #[inline]
    pub fn with_min_body_height(mut self, height: Length) -> Self {
        self.min_body_height = height;
        self
    }

    /// Set the title font size in points.
    #[inline]
    pub fn with_title_font_pt(mut self, size_pt: f64) -> Self {
        self.title_font_pt = size_pt;
        self
    }

    /// Set the title font weight.
    #[inline]
    pub fn with_title_bold(mut self, bold: bool) -> Self {
        self.title_bold = bold;
        self
    }

    /// Set the body font size bounds in points (maximum, then minimum).
    #[inline]
    pub fn with_body_font_bounds(mut self, max_pt: f64, min_pt: f64) -> Self {
        self.body_max_font_pt = max_pt;
        self.body_min_font_pt = min_pt;
        self
    }

    /// Set the character capacity of the nominal body box at the maximum font size.
    #[inline]
    pub fn with_base_capacity(mut self, capacity: usize) -> Self {
        self.base_capacity = capacity;
        self
    }

    /// Set the average-character-width factor.
    #[inline]
    pub fn with_char_width_factor(mut self, factor: f64) -> Self {
        self.char_width_factor = factor;
        self
    }

    /// Set the line-height factor.
    #[inline]
    pub fn with_line_height_factor(mut self, factor: f64) -> Self {
        self.line_height_factor = factor;
        self
    }

    /// Set the accent color for emphasized runs.
    #[inline]
    pub fn with_accent_color(mut self, color: RGBColor) -> Self {
        self.accent_color = color;
        self
    }

    /// Usable content width: the canvas minus both side margins.
    #[inline]
    pub fn content_width(&self) -> Length {
        self.canvas_width - self.side_margin - self.side_margin
    }

    /// Validate that the configuration describes a usable canvas.
    ///
    /// Layout itself is total and never checks these conditions; callers that
    /// accept untrusted configuration should validate once up front.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width.emus() <= 0 || self.canvas_height.emus() <= 0 {
            return Err(Error::InvalidConfig(
                "canvas dimensions must be positive".to_string(),
            ));
        }
        if self.content_width().emus() <= 0 {
            return Err(Error::InvalidConfig(
                "side margins leave no content width".to_string(),
            ));
        }
        if self.body_min_font_pt <= 0.0 || self.body_min_font_pt > self.body_max_font_pt {
            return Err(Error::InvalidConfig(format!(
                "body font bounds are inverted: min {} > max {}",
                self.body_min_font_pt, self.body_max_font_pt
            )));
        }
        if self.title_font_pt <= 0.0 {
            return Err(Error::InvalidConfig(
                "title font size must be positive".to_string(),
            ));
        }
        if self.char_width_factor <= 0.0 || self.line_height_factor <= 0.0 {
            return Err(Error::InvalidConfig(
                "character width and line height factors must be positive".to_string(),
            ));
        }
        if self.base_capacity == 0 {
            return Err(Error::InvalidConfig(
                "base capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LayoutConfig::default();
        config.validate().unwrap();
        // 16:9 surface
        assert_eq!(config.canvas_width.emus(), 12_192_000);
        assert_eq!(config.canvas_height.emus(), 6_858_000);
        assert!((config.canvas_width.cm() - 33.867).abs() < 0.01);
        assert!((config.canvas_height.cm() - 19.05).abs() < 0.01);
    }

    #[test]
    fn test_builder() {
        let config = LayoutConfig::new()
            .with_title_font_pt(40.0)
            .with_body_font_bounds(22.0, 12.0)
            .with_base_capacity(250);
        assert_eq!(config.title_font_pt, 40.0);
        assert_eq!(config.body_max_font_pt, 22.0);
        assert_eq!(config.body_min_font_pt, 12.0);
        assert_eq!(config.base_capacity, 250);
    }

    #[test]
    fn test_content_width() {
        let config = LayoutConfig::default();
        let expected = config.canvas_width - config.side_margin.scaled(2);
        assert_eq!(config.content_width(), expected);
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let config = LayoutConfig::new().with_body_font_bounds(10.0, 24.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_devouring_margins() {
        let config = LayoutConfig::new().with_side_margin(Length::from_cm(20.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = LayoutConfig::new().with_title_font_pt(30.0);
        let json = serde_json::to_string(&config).unwrap();
        let back: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
