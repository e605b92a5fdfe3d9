//! Utility functions shared by the workloads and engines.
//!

use std::borrow::Cow;

use bytes::Bytes;
use encoding_rs::{UTF_8, WINDOWS_1252};
use itertools::Itertools;

/// Decodes fetched content into text without ever failing.
///
/// Valid UTF-8 is taken as is; anything else is read as Windows-1252, where
/// every byte maps to some character.
pub fn decode_text(buf: &[u8]) -> Cow<'_, str> {
    match UTF_8.decode_without_bom_handling_and_without_replacement(buf) {
        Some(text) => text,
        None => {
            tracing::warn!("input is not valid UTF-8, decoding as windows-1252");
            WINDOWS_1252.decode_without_bom_handling(buf).0
        }
    }
}

/// Renders a key or value for diagnostics and text output.
#[inline]
pub fn display(buf: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(buf)
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits `text` into lines on every universal line boundary, `\r\n`
/// counting as one. A trailing boundary does not start an empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Splits `record` on an ASCII `delimiter` and returns each field as a
/// zero-copy slice of `record`.
pub fn split_fields(record: &Bytes, delimiter: u8) -> Vec<Bytes> {
    record
        .split(|b| *b == delimiter)
        .map(|field| record.slice_ref(field))
        .collect_vec()
}

/// Formats a mean the way the reducer prints it: shortest round-trip digits.
///
/// Magnitudes in `[1e-4, 1e16)` are positional and always carry a fraction
/// (`2.0`, not `2`). Anything else uses an exponent with a sign and at least
/// two digits (`1e-05`, `2.5e+20`).
pub fn format_mean(mean: f64) -> String {
    if mean.is_nan() {
        return "nan".to_string();
    }
    if mean.is_infinite() {
        return if mean > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sci = format!("{:e}", mean);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exp.abs());
    }

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits = mantissa.replace('.', "");
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("{}0.{}{}", sign, zeros, digits);
    }

    let point = exp as usize + 1;
    if digits.len() <= point {
        format!("{}{}{}.0", sign, digits, "0".repeat(point - digits.len()))
    } else {
        let (int, frac) = digits.split_at(point);
        format!("{}{}.{}", sign, int, frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_fields_borrows_from_the_buffer() {
        let buf = Bytes::from("a,b,,d");
        let fields = split_fields(&buf, b',');
        assert_eq!(fields, vec!["a", "b", "", "d"]);
    }

    #[test]
    fn format_mean_keeps_fraction() {
        assert_eq!(format_mean(2.0), "2.0");
        assert_eq!(format_mean(2.5), "2.5");
        assert_eq!(format_mean(15.0), "15.0");
        assert_eq!(format_mean(-0.5), "-0.5");
        assert_eq!(format_mean(0.0001), "0.0001");
        assert_eq!(format_mean(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_mean(1234567890123456.0), "1234567890123456.0");
    }

    #[test]
    fn format_mean_uses_signed_two_digit_exponents() {
        assert_eq!(format_mean(0.00001), "1e-05");
        assert_eq!(format_mean(1.5e-7), "1.5e-07");
        assert_eq!(format_mean(1e16), "1e+16");
        assert_eq!(format_mean(2.5e20), "2.5e+20");
        assert_eq!(format_mean(-3e-100), "-3e-100");
        assert_eq!(format_mean(f64::INFINITY), "inf");
        assert_eq!(format_mean(f64::NAN), "nan");
    }

    #[test]
    fn split_lines_knows_every_boundary() {
        assert_eq!(split_lines("h\rA,1\rB,2"), vec!["h", "A,1", "B,2"]);
        assert_eq!(split_lines("a\r\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\u{2028}b\x0bc\u{85}d"), vec!["a", "b", "c", "d"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn decode_text_never_fails() {
        assert_eq!(decode_text("курс,1".as_bytes()), "курс,1");
        assert_eq!(decode_text(&[b'c', 0xff, b',', b'1']), "c\u{ff},1");
    }
}
