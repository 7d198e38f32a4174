//! Typed per-column row values and the lossy numeric prefix parser.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Numeric cell value parsed from a leading numeric prefix.
///
/// `None` marks a value with no parsable prefix (or a missing attribute).
pub struct NumericValue(pub Option<f64>);

impl NumericValue {
    /// Value with no numeric interpretation.
    pub const UNPARSABLE: NumericValue = NumericValue(None);

    /// Parses the longest leading decimal literal of `raw`, ignoring any trailing text.
    ///
    /// Leading whitespace is skipped. Accepts an optional sign, digits with an optional
    /// fraction, an optional exponent, or the literal `Infinity`. `"12kB"` parses as `12`,
    /// `"1e3x"` as `1000`, and `"kB"` as unparsable.
    pub fn parse(raw: &str) -> Self {
        Self(parse_leading_number(raw))
    }

    /// Exact numeric value from an integer source (sizes, unix timestamps).
    pub fn from_u64(value: u64) -> Self {
        Self(Some(value as f64))
    }

    /// Returns `true` when a numeric prefix was found.
    pub fn is_parsable(self) -> bool {
        self.0.is_some()
    }

    /// Compares two values for ascending order.
    ///
    /// Unparsable values are ordered after every parsable value and are equal to each other.
    /// Callers that reverse for descending order must handle unparsable values first if they
    /// should stay last (see [`crate::compare_rows`]).
    pub fn cmp_ascending(self, other: Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Tagged value a row exposes for one [`crate::SortKey`].
pub enum SortValue<'a> {
    /// Compared case-insensitively as text.
    Text(&'a str),
    /// Compared numerically.
    Numeric(NumericValue),
}

fn parse_leading_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exp_digits = count_digits(&bytes[cursor..]);
        if exp_digits > 0 {
            end = cursor + exp_digits;
        }
    }

    let literal = &text[..end];
    // Bare fraction: "-.5" -> "-0.5".
    if int_digits == 0 {
        let (sign, rest) = literal.split_at(usize::from(literal.starts_with(['+', '-'])));
        return format!("{sign}0{rest}").parse().ok();
    }
    literal.parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
