//! Engagement count normalization ("1.2M views" → `1_200_000`).

use serde_json::Value;

/// Magnitude markers, checked in this order.
const MAGNITUDES: [(char, f64); 3] = [('k', 1_000.0), ('m', 1_000_000.0), ('b', 1_000_000_000.0)];

/// Parse a free-text view count into an integer.
///
/// Lowercases the input and drops a trailing `views`. If a `k`, `m` or `b`
/// marker is present the remainder is read as a decimal and scaled;
/// otherwise every non-digit is stripped and the digits are read as an
/// integer. Anything unparseable yields `0`.
#[must_use]
pub fn parse_views(text: &str) -> u64 {
    let lowered = text.to_lowercase();
    let trimmed = lowered.trim();
    let trimmed = trimmed.strip_suffix("views").unwrap_or(trimmed).trim();

    for (marker, multiplier) in MAGNITUDES {
        if trimmed.contains(marker) {
            return parse_scaled(&trimmed.replace(marker, ""), multiplier);
        }
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// [`parse_views`] over a loosely-typed provider field. Non-strings yield `0`.
#[must_use]
pub fn parse_view_value(value: &Value) -> u64 {
    value.as_str().map_or(0, parse_views)
}

fn parse_scaled(number: &str, multiplier: f64) -> u64 {
    let cleaned: String = number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let scaled = (n * multiplier) as u64;
            scaled
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_with_views_suffix() {
        assert_eq!(parse_views("1.2k views"), 1_200);
    }

    #[test]
    fn uppercase_millions() {
        assert_eq!(parse_views("3M"), 3_000_000);
    }

    #[test]
    fn billions() {
        assert_eq!(parse_views("1.5B views"), 1_500_000_000);
    }

    #[test]
    fn plain_integer() {
        assert_eq!(parse_views("450"), 450);
    }

    #[test]
    fn comma_grouped_integer() {
        assert_eq!(parse_views("1,234,567 views"), 1_234_567);
    }

    #[test]
    fn singular_view() {
        assert_eq!(parse_views("1 view"), 1);
    }

    #[test]
    fn empty_string_is_zero() {
        assert_eq!(parse_views(""), 0);
    }

    #[test]
    fn text_without_digits_or_markers_is_zero() {
        for s in ["views", "No views", "   ", "unavailable", "--", "é"] {
            assert_eq!(parse_views(s), 0, "input {s:?}");
        }
    }

    #[test]
    fn marker_without_number_is_zero() {
        assert_eq!(parse_views("bookmark"), 0);
        assert_eq!(parse_views("k views"), 0);
    }

    #[test]
    fn non_finite_magnitudes_are_zero() {
        assert_eq!(parse_views("infk"), 0);
        assert_eq!(parse_views("nanm"), 0);
    }

    #[test]
    fn negative_magnitude_is_zero() {
        assert_eq!(parse_views("-2k"), 0);
    }

    #[test]
    fn plain_counts_round_trip() {
        for n in [0_u64, 1, 9, 10, 999, 1_000, 65_536, 123_456_789, u64::MAX] {
            assert_eq!(parse_views(&format!("{n} views")), n);
        }
    }

    #[test]
    fn digits_overflowing_u64_are_zero() {
        assert_eq!(parse_views("99999999999999999999999 views"), 0);
    }

    #[test]
    fn non_string_values_are_zero() {
        assert_eq!(parse_view_value(&Value::Null), 0);
        assert_eq!(parse_view_value(&serde_json::json!(1200)), 0);
        assert_eq!(parse_view_value(&serde_json::json!(["1k"])), 0);
    }

    #[test]
    fn string_values_are_parsed() {
        assert_eq!(parse_view_value(&serde_json::json!("2.5K views")), 2_500);
    }
}
