//! Normalizer: expands thousands-marked text cells into numbers.
//!
//! A `Text` cell containing `k` or `K` anywhere has every marker removed, the
//! remainder parsed as `f64`, and the result scaled by [`MULTIPLIER`]. Every
//! other cell passes through untouched, variant included.

use crate::types::Value;

/// The thousands marker. Matched case-insensitively.
pub const MARKER: char = 'k';

/// Scale applied to the numeric remainder of a marked value.
pub const MULTIPLIER: f64 = 1000.0;

/// The only way normalising a single value can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("cannot parse {text:?} as a number after removing the thousands marker")]
    Unparseable { text: String },
}

/// True when `text` contains the marker in either case.
pub fn has_marker(text: &str) -> bool {
    text.chars().any(is_marker)
}

/// Strip every marker from `text`, parse what is left, and scale it.
///
/// Surrounding whitespace of the remainder is ignored, so `" 12 k"` parses.
/// Markers in the middle are removed too: `"1k2"` becomes `12000.0`.
/// A single `_` between two digits is a digit separator (`"1_500k"`).
pub fn parse_thousands(text: &str) -> Result<f64, NormalizeError> {
    let remainder: String = text.chars().filter(|c| !is_marker(*c)).collect();
    strip_digit_separators(remainder.trim())
        .parse::<f64>()
        .map(|n| n * MULTIPLIER)
        .map_err(|_| NormalizeError::Unparseable {
            text: text.to_string(),
        })
}

/// Normalise one cell.
///
/// Returns `Value::Float` for marked text that parses, the input unchanged
/// for anything else, and [`NormalizeError::Unparseable`] for marked text
/// whose remainder is not a number (`"abk"`, `"$5k"`, `"k"`).
pub fn normalize(value: &Value) -> Result<Value, NormalizeError> {
    match value {
        Value::Text(text) if has_marker(text) => parse_thousands(text).map(Value::Float),
        other => Ok(other.clone()),
    }
}

fn is_marker(c: char) -> bool {
    c.eq_ignore_ascii_case(&MARKER)
}

/// Drop each `_` that sits directly between two ASCII digits. Any other
/// underscore is kept so the float parse rejects it.
fn strip_digit_separators(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let between_digits = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(char::is_ascii_digit);
            !(c == '_' && between_digits)
        })
        .map(|(_, &c)| c)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
