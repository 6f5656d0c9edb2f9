use std::sync::LazyLock;

use regex::Regex;

/// Longest numeric prefix of a string: "2.5", "200" in "200g", ".5", "1e3".
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap());

/// Parse a free-text quantity into a number
///
/// Supports formats:
/// - Whole numbers: "2" → 2
/// - Decimals: "2.5" → 2.5
/// - Pure fractions: "1/2" → 0.5
/// - Mixed fractions: "1 1/2" → 1.5
///
/// Anything else reads as much of a leading number as it can ("200g" → 200)
/// and falls back to 0. Never fails.
pub fn parse_quantity(quantity_str: &str) -> f64 {
    let trimmed = quantity_str.trim();

    if trimmed.is_empty() {
        return 0.0;
    }

    if trimmed.contains('/') {
        match trimmed.split_once(' ') {
            // Mixed fraction: whole part, then the rest parsed recursively
            Some((whole, remainder)) => {
                if let Some(whole) = parse_leading_number(whole) {
                    return whole + parse_quantity(remainder);
                }
            }
            None => {
                if let Some(value) = parse_fraction(trimmed) {
                    return value;
                }
            }
        }
    }

    parse_leading_number(trimmed).unwrap_or(0.0)
}

/// Render a summed quantity without rounding
///
/// Uses the shortest representation that reads back to the same value, so
/// 500.0 → "500" and 0.75 → "0.75".
pub fn format_quantity(quantity: f64) -> String {
    if quantity == 0.0 {
        // also catches -0.0
        return "0".to_owned();
    }

    quantity.to_string()
}

fn parse_fraction(text: &str) -> Option<f64> {
    let mut parts = text.split('/');
    let (Some(numerator), Some(denominator), None) = (parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let numerator = parse_leading_number(numerator)?;
    let denominator = parse_leading_number(denominator)?;

    if denominator == 0.0 {
        return None;
    }

    Some(numerator / denominator)
}

fn parse_leading_number(text: &str) -> Option<f64> {
    let matched = LEADING_NUMBER.find(text.trim_start())?;

    matched
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
