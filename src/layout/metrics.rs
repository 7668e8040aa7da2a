//! Line-wrap estimation from character counts.
//!
//! No text-measurement API is available before render time, so wrap behavior
//! is estimated: an average character is assumed to be a fixed fraction of
//! the font size wide (0.55 by default, tuned for proportional mixed-case
//! Latin/Vietnamese text at typical weight). The estimate deliberately errs
//! toward over-counting lines, since a too-tall box is recoverable and an
//! overflowing one is not.

use crate::common::Length;

/// Estimate how many lines a piece of text occupies when wrapped into a box.
///
/// Pure function: the result depends only on the arguments. Lengths are
/// Unicode scalar counts (`str::chars().count()`), not byte counts.
///
/// # Arguments
///
/// * `text_len` - Character count of the text
/// * `font_size_pt` - Font size in points
/// * `box_width` - Usable width of the target box
/// * `char_width_factor` - Average character width as a fraction of the font size
///
/// # Returns
///
/// The estimated line count, always at least 1: an empty line still occupies
/// one line of height. A degenerate box narrower than one average character
/// caps the estimate at one line per character rather than applying the
/// ceiling formula to a sub-1 capacity.
pub fn estimate_lines(
    text_len: usize,
    font_size_pt: f64,
    box_width: Length,
    char_width_factor: f64,
) -> usize {
    if text_len == 0 {
        return 1;
    }

    let avg_char_width_pt = font_size_pt * char_width_factor;
    if avg_char_width_pt <= 0.0 {
        return 1;
    }

    let chars_per_line = box_width.points() / avg_char_width_pt;
    if chars_per_line <= 1.0 {
        // Degenerate box: at most one character fits per line
        return text_len;
    }

    (text_len as f64 / chars_per_line).ceil() as usize
}
