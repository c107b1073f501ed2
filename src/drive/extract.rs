//! Field extraction from the human-oriented reports of `mt`, `sg_logs` and
//! `sg_read_attr`.
//!
//! All functions take one line. `sg_*` tools print `<label>: <value> [...]`,
//! `mt` prints `<label>=<value>`; values may carry thousands separators and
//! trailing commentary such as units.

use crate::error::{Result, RustLtouError};

/// Signed integer after the last `:`. A line without any colon is treated
/// as a bare value.
pub fn colon_int(line: &str, base: u32) -> Result<i64> {
    let token = numeric_token(value_after(line.trim(), ':'))?;
    parse_i64(&token, base)
}

/// First token after the last `:`.
pub fn colon_str(line: &str) -> Result<&str> {
    let line = line.trim();
    if !line.contains(':') {
        return Err(RustLtouError::field_missing(line));
    }
    first_token(value_after(line, ':')).ok_or_else(|| RustLtouError::field_missing(label_of(line, ':')))
}

/// Unsigned integer after the last `=`.
pub fn equals_uint(line: &str, base: u32) -> Result<u64> {
    let token = numeric_token(value_after(line.trim(), '='))?;
    parse_u64(&token, base)
}

/// Last non-blank line of a report.
pub fn last_line(output: &str) -> Option<&str> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
}

fn value_after(line: &str, delimiter: char) -> &str {
    match line.rfind(delimiter) {
        Some(pos) => line[pos + delimiter.len_utf8()..].trim(),
        None => line,
    }
}

fn label_of(line: &str, delimiter: char) -> &str {
    match line.rfind(delimiter) {
        Some(pos) => line[..pos].trim(),
        None => line,
    }
}

fn first_token(value: &str) -> Option<&str> {
    value.split_whitespace().next()
}

fn numeric_token(value: &str) -> Result<String> {
    let token = first_token(value).ok_or_else(|| RustLtouError::field_missing("numeric value"))?;
    Ok(token.replace(',', ""))
}

/// Split an optional sign and, for base 0, a radix prefix (`0x`, `0o`, `0b`
/// or a leading `0` for octal).
fn split_radix(token: &str, base: u32) -> (&str, &str, u32) {
    let (sign, rest) = match token.as_bytes().first() {
        Some(b'-') => ("-", &token[1..]),
        Some(b'+') => ("", &token[1..]),
        _ => ("", token),
    };
    if base != 0 {
        return (sign, rest, base);
    }

    let lower = rest.to_ascii_lowercase();
    if lower.starts_with("0x") {
        (sign, &rest[2..], 16)
    } else if lower.starts_with("0o") {
        (sign, &rest[2..], 8)
    } else if lower.starts_with("0b") {
        (sign, &rest[2..], 2)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (sign, &rest[1..], 8)
    } else {
        (sign, rest, 10)
    }
}

/// Parse a signed integer; base 0 auto-detects the radix prefix.
pub fn parse_i64(token: &str, base: u32) -> Result<i64> {
    let (sign, digits, radix) = split_radix(token, base);
    let digits = if base == 0 {
        digits.replace('_', "")
    } else {
        digits.to_string()
    };
    i64::from_str_radix(&format!("{}{}", sign, digits), radix).map_err(|source| {
        RustLtouError::InvalidNumber {
            value: token.to_string(),
            source,
        }
    })
}

/// Parse an unsigned integer; base 0 auto-detects the radix prefix.
pub fn parse_u64(token: &str, base: u32) -> Result<u64> {
    let (sign, digits, radix) = split_radix(token, base);
    let digits = if base == 0 {
        digits.replace('_', "")
    } else {
        digits.to_string()
    };
    u64::from_str_radix(&format!("{}{}", sign, digits), radix).map_err(|source| {
        RustLtouError::InvalidNumber {
            value: token.to_string(),
            source,
        }
    })
}
