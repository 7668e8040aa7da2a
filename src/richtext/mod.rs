//! Inline-emphasis segmentation.
//!
//! Content lines use a doubled-asterisk convention for emphasis:
//! `"Revenue grew **18 percent** in Q3"` renders the middle span bold. This
//! module splits a line into alternating plain/bold [`TextRun`]s for the
//! presentation writer.
//!
//! Segmentation is lossless: matched `**` pairs are consumed as markup, and
//! every other character survives byte-for-byte. Unmatched or empty markers
//! are treated as literal text, never a parse failure.
//!
//! # Examples
//!
//! ```rust
//! use deckgen::richtext::segment;
//!
//! let runs = segment("Focus on **keyword highlighting** here");
//! assert_eq!(runs.len(), 3);
//! assert!(runs[1].bold);
//! assert_eq!(runs[1].text, "keyword highlighting");
//! ```

use memchr::memmem;
use serde::{Deserialize, Serialize};

/// The paired inline emphasis delimiter.
const MARKER: &[u8] = b"**";

/// A contiguous styled fragment of one content line, order-preserving.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRun {
    /// Fragment text with emphasis markers stripped
    pub text: String,
    /// Whether the fragment is emphasized
    pub bold: bool,
}

impl TextRun {
    /// Create a plain run.
    #[inline]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Create an emphasized run.
    #[inline]
    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Split a content line into alternating plain/emphasized runs.
///
/// Markers pair up left to right. A marker without a partner, and a pair
/// wrapping an empty span, stay in the output as literal text. Runs are never
/// empty, and an empty input produces no runs.
pub fn segment(line: &str) -> Vec<TextRun> {
    let bytes = line.as_bytes();
    let markers: Vec<usize> = memmem::find_iter(bytes, MARKER).collect();

    let mut runs = Vec::new();
    let mut plain = String::new();
    let mut cursor = 0usize;

    for pair in markers.chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        // Marker positions are ASCII, so slicing at them is UTF-8 safe.
        let span = &line[open + MARKER.len()..close];

        if span.is_empty() {
            // Adjacent markers carry no emphasis; keep them literally.
            plain.push_str(&line[cursor..close + MARKER.len()]);
        } else {
            plain.push_str(&line[cursor..open]);
            if !plain.is_empty() {
                runs.push(TextRun::plain(std::mem::take(&mut plain)));
            }
            runs.push(TextRun::emphasized(span));
        }
        cursor = close + MARKER.len();
    }

    // Trailing text, including any unpaired marker
    plain.push_str(&line[cursor..]);
    if !plain.is_empty() {
        runs.push(TextRun::plain(plain));
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Re-insert the markers around emphasized runs.
    fn reconstruct(runs: &[TextRun]) -> String {
        runs.iter()
            .map(|run| {
                if run.bold {
                    format!("**{}**", run.text)
                } else {
                    run.text.clone()
                }
            })
            .collect()
    }

    #[test]
    fn test_plain_line() {
        let runs = segment("no markup here");
        assert_eq!(runs, vec![TextRun::plain("no markup here")]);
    }

    #[test]
    fn test_single_emphasis() {
        let runs = segment("check **this** out");
        assert_eq!(
            runs,
            vec![
                TextRun::plain("check "),
                TextRun::emphasized("this"),
                TextRun::plain(" out"),
            ]
        );
    }

    #[test]
    fn test_emphasis_at_line_edges() {
        assert_eq!(segment("**lead**"), vec![TextRun::emphasized("lead")]);
        assert_eq!(
            segment("**lead** rest"),
            vec![TextRun::emphasized("lead"), TextRun::plain(" rest")]
        );
        assert_eq!(
            segment("rest **tail**"),
            vec![TextRun::plain("rest "), TextRun::emphasized("tail")]
        );
    }

    #[test]
    fn test_multiple_spans() {
        let runs = segment("**a** and **b**");
        assert_eq!(
            runs,
            vec![
                TextRun::emphasized("a"),
                TextRun::plain(" and "),
                TextRun::emphasized("b"),
            ]
        );
    }

    #[test]
    fn test_unmatched_marker_is_literal() {
        let runs = segment("broken ** marker");
        assert_eq!(runs, vec![TextRun::plain("broken ** marker")]);

        let runs = segment("**pair** and ** stray");
        assert_eq!(
            runs,
            vec![TextRun::emphasized("pair"), TextRun::plain(" and ** stray")]
        );
    }

    #[test]
    fn test_empty_pair_is_literal() {
        assert_eq!(segment("x **** y"), vec![TextRun::plain("x **** y")]);
    }

    #[test]
    fn test_empty_line_has_no_runs() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_no_empty_runs() {
        for line in ["**a**", "** **", "a**b**c", "****", "** "] {
            for run in segment(line) {
                assert!(!run.text.is_empty(), "empty run from {:?}", line);
            }
        }
    }

    #[test]
    fn test_vietnamese_emphasis() {
        let runs = segment("Tăng trưởng **doanh thu** quý 3");
        assert_eq!(
            runs,
            vec![
                TextRun::plain("Tăng trưởng "),
                TextRun::emphasized("doanh thu"),
                TextRun::plain(" quý 3"),
            ]
        );
    }

    #[test]
    fn test_reconstruction_round_trip() {
        for line in [
            "plain",
            "check **this** out",
            "**a** and **b**",
            "stray ** here",
            "x **** y",
            "Tăng trưởng **doanh thu** quý 3",
        ] {
            assert_eq!(reconstruct(&segment(line)), line);
        }
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_reconstruction_is_exact(line in "[a-zA-Z0-9 *àếộư]{0,80}") {
                prop_assert_eq!(reconstruct(&segment(&line)), line);
            }

            #[test]
            fn prop_concat_exact_without_matched_pairs(line in "[^*]{0,80}") {
                let concatenated: String =
                    segment(&line).iter().map(|r| r.text.as_str()).collect();
                prop_assert_eq!(concatenated, line);
            }

            #[test]
            fn prop_runs_never_empty(line in ".{0,80}") {
                for run in segment(&line) {
                    prop_assert!(!run.text.is_empty());
                }
            }
        }
    }
}
