//! Nutrient value normalization
//!
//! Turns raw composition-table cells into numeric values with trace and
//! estimate flags.

/// Marker used by the table for "not measured"
pub const MISSING_MARKER: &str = "-";
/// Marker used by the table for trace amounts
pub const TRACE_MARKER: &str = "Tr";

/// Result of normalizing one raw cell
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedValue {
    pub value: Option<f64>,
    pub is_trace_amount: bool,
    pub estimated: bool,
}

impl NormalizedValue {
    const MISSING: Self = Self {
        value: None,
        is_trace_amount: false,
        estimated: false,
    };

    fn number(value: f64, estimated: bool) -> Self {
        Self {
            value: Some(value),
            is_trace_amount: false,
            estimated,
        }
    }

    fn trace(estimated: bool) -> Self {
        Self {
            value: Some(0.0),
            is_trace_amount: true,
            estimated,
        }
    }
}

/// Normalize a raw cell.
///
/// Never fails: anything unrecognized becomes a plain zero.
///
/// Examples:
/// - `None`, `"-"` -> no value
/// - `"(Tr)"` -> 0, trace, estimated
/// - `"Tr"` -> 0, trace
/// - `"(12.3)"` -> 12.3, estimated
/// - `"45.6 mg"` -> 45.6
/// - `"abc"` -> 0
pub fn normalize(raw: Option<&str>) -> NormalizedValue {
    let raw = match raw {
        Some(s) => s,
        None => return NormalizedValue::MISSING,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == MISSING_MARKER {
        return NormalizedValue::MISSING;
    }

    if let Some(inner) = parenthesized(trimmed) {
        if inner == TRACE_MARKER {
            return NormalizedValue::trace(true);
        }
        if let Some(n) = leading_number(inner) {
            return NormalizedValue::number(n, true);
        }
        // Unparseable inside the brackets: treated like any other cell below
    }

    if trimmed == TRACE_MARKER {
        return NormalizedValue::trace(false);
    }

    NormalizedValue::number(leading_number(trimmed).unwrap_or(0.0), false)
}

/// Inner text of `(...)`, if the whole string is wrapped in parentheses
fn parenthesized(s: &str) -> Option<&str> {
    s.strip_prefix('(')?.strip_suffix(')')
}

/// Parse the longest numeric prefix of a string, ignoring any trailing unit.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Returns None when there is no digit at the start or the number
/// is not finite.
pub fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let count_digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_digits = count_digits(end);
    end += int_digits;
    let mut digits = int_digits;

    if end < len && bytes[end] == b'.' {
        let frac_digits = count_digits(end + 1);
        if digits + frac_digits > 0 {
            end += 1 + frac_digits;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < len && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_digits = count_digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}
