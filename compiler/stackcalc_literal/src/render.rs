//! Text rendering of values.
//!
//! Two forms, matching what users of the calculator see:
//! - `Display` is the printed form used by `pop` and `peek`. Strings appear
//!   bare; everything else uses its repr.
//! - [`Value::repr`] is the unambiguous form used inside containers and by
//!   stack listings. Strings are quoted and escaped.
//!
//! Floats use the shortest text that round-trips, switching to exponent
//! notation below `1e-4` and at or above `1e16` (`1e+16`, `2.5e-05`).

use std::fmt::{self, Write as _};

use crate::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => other.fmt_repr(f),
        }
    }
}

/// Borrowing adapter that displays a value's repr.
pub struct Repr<'a>(pub &'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_repr(f)
    }
}

impl Value {
    /// Display adapter for the quoted form.
    pub fn repr(&self) -> Repr<'_> {
        Repr(self)
    }

    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Str(s) => write_quoted(f, s),
            Value::Tuple(items) => {
                f.write_char('(')?;
                write_joined(f, items)?;
                if items.len() == 1 {
                    f.write_char(',')?;
                }
                f.write_char(')')
            }
            Value::List(items) => {
                f.write_char('[')?;
                write_joined(f, items)?;
                f.write_char(']')
            }
            Value::Dict(entries) => {
                f.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    key.fmt_repr(f)?;
                    f.write_str(": ")?;
                    value.fmt_repr(f)?;
                }
                f.write_char('}')
            }
            Value::Set(members) if members.is_empty() => f.write_str("set()"),
            Value::Set(members) => {
                f.write_char('{')?;
                write_joined(f, members)?;
                f.write_char('}')
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt_repr(f)?;
    }
    Ok(())
}

/// Quote with `'` unless the text holds a `'` and no `"`.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c if !is_printable(c) => write_code_point(f, c)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

/// `\xhh`, `\uhhhh` or `\Uhhhhhhhh`, whichever is shortest.
fn write_code_point(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    match u32::from(c) {
        n @ 0..=0xff => write!(f, "\\x{n:02x}"),
        n @ 0x100..=0xffff => write!(f, "\\u{n:04x}"),
        n => write!(f, "\\U{n:08x}"),
    }
}

/// Whether repr shows `c` as-is.
///
/// Controls, format characters, separators other than the ASCII space,
/// private-use code points and noncharacters are escaped. Unassigned code
/// points are not distinguished.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    let n = u32::from(c);
    !matches!(
        n,
        // Format characters
        0xad
            | 0x600..=0x605
            | 0x61c
            | 0x6dd
            | 0x70f
            | 0x890..=0x891
            | 0x8e2
            | 0x180e
            | 0x200b..=0x200f
            | 0x202a..=0x202e
            | 0x2060..=0x2064
            | 0x2066..=0x206f
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x13430..=0x1343f
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
            // Private use
            | 0xe000..=0xf8ff
            | 0xf0000..=0xffffd
            | 0x10_0000..=0x10_fffd
            // Noncharacters
            | 0xfdd0..=0xfdef
    ) && n & 0xfffe != 0xfffe
}

/// Shortest round-trip float text with exponent switching.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e-7`, `-0e0`.
    let sci = format!("{x:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let mut fixed = format!("{x}");
        if !fixed.contains('.') {
            fixed.push_str(".0");
        }
        fixed
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

#[cfg(test)]
mod tests;
