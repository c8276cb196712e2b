//! Escape Sequence Processing
//!
//! Resolves backslash escapes in quoted string literals.
//! Single-character escapes: `\n`, `\r`, `\t`, `\\`, `\"`, `\'`, `\a`,
//! `\b`, `\f`, `\v`. Octal escapes: one to three digits `0`-`7`. Code point
//! escapes: `\xhh`, `\uhhhh`, `\Uhhhhhhhh`.
//!
//! Unrecognized escapes are kept literally, backslash included. Truncated
//! or out-of-range code point escapes are errors, as are `\N{...}` escapes:
//! character names are not resolved.

use crate::LiteralError;

/// Resolve a single-character escape to its replacement.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0c}'),
        'v' => Some('\u{0b}'),
        _ => None,
    }
}

/// Hex digit count and truncation message for a code point escape letter.
fn code_point_width(c: char) -> Option<(usize, &'static str)> {
    match c {
        'x' => Some((2, "truncated \\xXX escape")),
        'u' => Some((4, "truncated \\uXXXX escape")),
        'U' => Some((8, "truncated \\UXXXXXXXX escape")),
        _ => None,
    }
}

/// Process the body of a string literal (quotes already stripped).
pub(crate) fn unescape_string(s: &str) -> Result<String, LiteralError> {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    let mut offset = 0;

    while let Some(pos) = rest.find('\\') {
        result.push_str(&rest[..pos]);
        let start = offset + pos;
        let after = &rest[pos + 1..];
        let Some(esc) = after.chars().next() else {
            result.push('\\');
            rest = after;
            break;
        };

        let consumed = if let Some(resolved) = resolve_escape(esc) {
            result.push(resolved);
            esc.len_utf8()
        } else if let Some((ch, len)) = decode_octal(after) {
            result.push(ch);
            len
        } else if let Some((width, truncated)) = code_point_width(esc) {
            result.push(decode_code_point(&after[1..], width, start, truncated)?);
            1 + width
        } else if esc == 'N' {
            return Err(named_escape_error(&after[1..], start));
        } else {
            result.push('\\');
            0
        };

        rest = &after[consumed..];
        offset = start + 1 + consumed;
    }

    result.push_str(rest);
    Ok(result)
}

/// Up to three leading octal digits, as a character and the digit count.
fn decode_octal(s: &str) -> Option<(char, usize)> {
    let len = s
        .bytes()
        .take(3)
        .take_while(|b| (b'0'..=b'7').contains(b))
        .count();
    if len == 0 {
        return None;
    }
    let value = s.bytes().take(len).fold(0u32, |acc, b| acc * 8 + u32::from(b - b'0'));
    char::from_u32(value).map(|ch| (ch, len))
}

/// Decode the `width` hex digits at the start of `digits`.
///
/// `start` is the backslash offset, used for error positions.
fn decode_code_point(
    digits: &str,
    width: usize,
    start: usize,
    truncated: &'static str,
) -> Result<char, LiteralError> {
    let found = digits
        .bytes()
        .take(width)
        .take_while(u8::is_ascii_hexdigit)
        .count();
    if found < width {
        return Err(bad_escape(start, start + 1 + found, truncated));
    }
    u32::from_str_radix(&digits[..width], 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| bad_escape(start, start + 1 + width, "illegal Unicode character"))
}

/// Error for a `\N` escape; `rest` follows the `N`.
fn named_escape_error(rest: &str, start: usize) -> LiteralError {
    match rest.strip_prefix('{').and_then(|body| body.find('}')) {
        Some(close) if close > 0 => {
            bad_escape(start, start + 3 + close, "unknown Unicode character name")
        }
        _ => bad_escape(start, start + 1, "malformed \\N character escape"),
    }
}

fn bad_escape(start: usize, end: usize, reason: &'static str) -> LiteralError {
    LiteralError::BadEscape { start, end, reason }
}
