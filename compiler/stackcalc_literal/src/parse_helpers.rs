//! Numeric Parsing Helpers
//!
//! Digit-run parsing for integer and float literals with underscore separators.
//! The lexer has already validated underscore placement.

/// Parse an unsigned digit run, skipping underscores.
///
/// Returns `None` on overflow or on a digit outside `radix`.
#[inline]
pub(crate) fn parse_int_skip_underscores(s: &str, radix: u32) -> Option<u64> {
    let mut result: u64 = 0;
    for c in s.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(radix)?;
        result = result.checked_mul(u64::from(radix))?;
        result = result.checked_add(u64::from(digit))?;
    }
    Some(result)
}

/// Parse the integer token text, honouring `0x`/`0o`/`0b` prefixes.
pub(crate) fn parse_int_literal(s: &str) -> Option<u64> {
    let radix = match s.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return parse_int_skip_underscores(s, 10),
    };
    parse_int_skip_underscores(&s[2..], radix)
}

/// Parse float - only allocate if underscores present.
///
/// Values beyond the float range become infinities.
#[inline]
pub(crate) fn parse_float_skip_underscores(s: &str) -> Option<f64> {
    if s.contains('_') {
        s.replace('_', "").parse().ok()
    } else {
        s.parse().ok()
    }
}
