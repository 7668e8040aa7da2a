//! Body font scaling under a character-capacity heuristic.
//!
//! Capacity (the character count that fits a box) scales roughly with font
//! area, i.e. with the square of linear font size. To keep growing text
//! within a fixed budget, font size therefore shrinks with the square root of
//! the length ratio. The baseline capacity is tuned conservatively: slightly
//! under-used space beats overflowing the box.

/// Total character count across a slide's content lines.
///
/// Counts Unicode scalar values so multi-byte Vietnamese text is not
/// over-weighted.
#[inline]
pub fn total_chars<S: AsRef<str>>(content: &[S]) -> usize {
    content.iter().map(|s| s.as_ref().chars().count()).sum()
}

/// Derive the body font size from total content length and box capacity.
///
/// # Arguments
///
/// * `total_len` - Total character count of all content lines
/// * `max_font_pt` - Font size ceiling, used whenever the text fits the budget
/// * `min_font_pt` - Font size floor
/// * `capacity_at_max` - Characters that fit the box at `max_font_pt`
///
/// # Returns
///
/// A font size in whole points, always within `[min_font_pt, max_font_pt]`.
/// Empty content stays at the maximum.
pub fn compute_body_font_size(
    total_len: usize,
    max_font_pt: f64,
    min_font_pt: f64,
    capacity_at_max: usize,
) -> f64 {
    if capacity_at_max == 0 {
        return min_font_pt;
    }
    if total_len <= capacity_at_max {
        return max_font_pt;
    }

    let scale_factor = (capacity_at_max as f64 / total_len as f64).sqrt();
    (max_font_pt * scale_factor).round().clamp(min_font_pt, max_font_pt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: f64 = 24.0;
    const MIN: f64 = 10.0;
    const CAPACITY: usize = 300;

    #[test]
    fn test_double_capacity_scales_by_sqrt_half() {
        // sqrt(300/600) ~= 0.707, 24 * 0.707 ~= 17
        let size = compute_body_font_size(600, MAX, MIN, CAPACITY);
        assert_eq!(size, 17.0);
    }

    #[test]
    fn test_under_capacity_stays_at_max() {
        assert_eq!(compute_body_font_size(100, MAX, MIN, CAPACITY), MAX);
        assert_eq!(compute_body_font_size(300, MAX, MIN, CAPACITY), MAX);
    }

    #[test]
    fn test_empty_content_stays_at_max() {
        assert_eq!(compute_body_font_size(0, MAX, MIN, CAPACITY), MAX);
    }

    #[test]
    fn test_pathological_length_hits_floor() {
        assert_eq!(compute_body_font_size(1_000_000, MAX, MIN, CAPACITY), MIN);
    }

    #[test]
    fn test_total_chars_counts_scalars() {
        let content = ["abc".to_string(), "ền".to_string(), String::new()];
        assert_eq!(total_chars(&content), 5);
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_within_bounds(total in 0usize..2_000_000) {
                let size = compute_body_font_size(total, MAX, MIN, CAPACITY);
                prop_assert!(size >= MIN);
                prop_assert!(size <= MAX);
            }

            #[test]
            fn prop_monotone_non_increasing(
                total in 0usize..100_000,
                delta in 0usize..100_000,
            ) {
                let shorter = compute_body_font_size(total, MAX, MIN, CAPACITY);
                let longer = compute_body_font_size(total + delta, MAX, MIN, CAPACITY);
                prop_assert!(longer <= shorter);
            }
        }
    }
}
