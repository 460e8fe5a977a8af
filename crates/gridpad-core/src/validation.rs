//! Input validation for cell edits.
//!
//! There is exactly one rule: cells whose id is a multiple of 5 only accept
//! numeric input. Numeric means what a browser's `isNaN` would accept for a
//! string: surrounding whitespace is ignored, a blank string counts as a
//! number (zero), `Infinity` and `0x`/`0o`/`0b` literals are numbers, and
//! everything else must be a plain decimal literal.

use crate::cell::CellId;
use crate::error::{GridError, Result};

/// Check an edit against the numeric-only rule
pub fn validate_edit(id: CellId, value: &str) -> Result<()> {
    if id.is_numeric_only() && !is_numeric_input(value) {
        return Err(GridError::NumericOnly { id });
    }
    Ok(())
}

/// Whether `input` converts to a number (not NaN)
pub fn is_numeric_input(input: &str) -> bool {
    let trimmed = input.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return true;
    }

    let unsigned = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return true;
    }

    if let Some(radix) = radix_prefix(trimmed) {
        let digits = &trimmed[2..];
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }

    // Rust's float parser also accepts "inf"/"nan" spellings that a browser rejects
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return false;
    }

    trimmed.parse::<f64>().is_ok()
}

/// Whitespace and line terminators a browser strips before number conversion.
/// Unlike `char::is_whitespace` this includes U+FEFF and excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Radix of an unsigned `0x`/`0o`/`0b` literal
fn radix_prefix(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    match bytes[1] {
        b'x' | b'X' => Some(16),
        b'o' | b'O' => Some(8),
        b'b' | b'B' => Some(2),
        _ => None,
    }
}
