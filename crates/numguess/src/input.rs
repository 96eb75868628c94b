//! Parsing of raw guesses.

use crate::target::TARGET_RANGE;
use serde::{Deserialize, Serialize};

/// A guess as submitted by a caller: a JSON number, free text, or any other
/// JSON value, which is never a valid guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum GuessInput {
    /// Integer guess.
    Number(i64),
    /// Fractional number, or an integer too large for `i64`.
    Float(f64),
    /// Textual guess, parsed leniently.
    Text(String),
    /// Booleans, arrays, objects.
    Other(serde_json::Value),
}

impl GuessInput {
    /// Returns the guess if it is an integer inside the target range.
    pub fn to_valid_guess(&self) -> Option<u32> {
        let value = match self {
            GuessInput::Number(n) => *n,
            GuessInput::Float(f) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => *f as i64,
            GuessInput::Float(_) | GuessInput::Other(_) => return None,
            GuessInput::Text(text) => parse_leading_integer(text)?,
        };
        u32::try_from(value)
            .ok()
            .filter(|guess| TARGET_RANGE.contains(guess))
    }
}

impl From<&str> for GuessInput {
    fn from(text: &str) -> Self {
        GuessInput::Text(text.to_string())
    }
}

impl From<u32> for GuessInput {
    fn from(n: u32) -> Self {
        GuessInput::Number(i64::from(n))
    }
}

/// Reads an integer from the start of `text`.
///
/// Leading whitespace is skipped and one optional sign is accepted. The
/// longest run of ASCII digits that follows is the value; anything after it
/// is ignored. Returns `None` when no digit follows or the value overflows.
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_integer_forms() {
        assert_eq!(parse_leading_integer("42"), Some(42));
        assert_eq!(parse_leading_integer("  7 "), Some(7));
        assert_eq!(parse_leading_integer("42abc"), Some(42));
        assert_eq!(parse_leading_integer("-3"), Some(-3));
        assert_eq!(parse_leading_integer("+8"), Some(8));
        assert_eq!(parse_leading_integer("12.9"), Some(12));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(parse_leading_integer(""), None);
        assert_eq!(parse_leading_integer("abc"), None);
        assert_eq!(parse_leading_integer("-"), None);
        assert_eq!(parse_leading_integer("start 5"), None);
    }

    #[test]
    fn valid_guess_respects_range() {
        assert_eq!(GuessInput::from(1u32).to_valid_guess(), Some(1));
        assert_eq!(GuessInput::from(100u32).to_valid_guess(), Some(100));
        assert_eq!(GuessInput::Number(0).to_valid_guess(), None);
        assert_eq!(GuessInput::Number(101).to_valid_guess(), None);
        assert_eq!(GuessInput::Number(-5).to_valid_guess(), None);
        assert_eq!(GuessInput::from("55 please").to_valid_guess(), Some(55));
        assert_eq!(GuessInput::from("fifty").to_valid_guess(), None);
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let n: GuessInput = serde_json::from_str("64").expect("number");
        let s: GuessInput = serde_json::from_str("\"64\"").expect("string");
        assert_eq!(n, GuessInput::Number(64));
        assert_eq!(s, GuessInput::Text("64".to_string()));
    }

    #[test]
    fn deserializes_other_json_values() {
        let fractional: GuessInput = serde_json::from_str("50.5").expect("fraction");
        let huge: GuessInput = serde_json::from_str("18446744073709551615").expect("u64");
        let flag: GuessInput = serde_json::from_str("true").expect("bool");
        assert_eq!(fractional, GuessInput::Float(50.5));
        assert!(matches!(huge, GuessInput::Float(_)));
        assert_eq!(flag, GuessInput::Other(serde_json::Value::Bool(true)));
    }

    #[test]
    fn non_integer_numbers_are_invalid() {
        assert_eq!(GuessInput::Float(50.5).to_valid_guess(), None);
        assert_eq!(GuessInput::Float(1e20).to_valid_guess(), None);
        assert_eq!(GuessInput::Float(f64::NAN).to_valid_guess(), None);
        assert_eq!(GuessInput::Float(50.0).to_valid_guess(), Some(50));
        assert_eq!(GuessInput::Other(serde_json::json!([5])).to_valid_guess(), None);
    }
}
