// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Small HTML and value-formatting helpers shared by the renderers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder for absent text fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Present, non-empty text.
pub fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// Escaped text, or `default` when absent or empty.
pub fn text_or(text: Option<&str>, default: &str) -> String {
    escape(non_empty(text).unwrap_or(default))
}

/// Escaped text, or `N/A`.
pub fn text(text: Option<&str>) -> String {
    text_or(text, NOT_AVAILABLE)
}

/// Cut `text` to at most `cutoff` characters, appending `...` only when
/// something was removed. Counts characters, not bytes or words.
pub fn excerpt(text: &str, cutoff: usize) -> String {
    match text.char_indices().nth(cutoff) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Count-like numbers: absent → `0`, whole values without a fraction.
pub fn count(value: Option<f64>) -> String {
    let v = value.unwrap_or(0.0);
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Fixed-precision numbers: absent → zero at the same precision.
pub fn fixed(value: Option<f64>, decimals: usize) -> String {
    format!("{:.*}", decimals, value.unwrap_or(0.0))
}

/// First character of each name part, or the fallback letters.
pub fn initials(first: Option<&str>, last: Option<&str>, fallback: (char, char)) -> String {
    let f = non_empty(first)
        .and_then(|s| s.chars().next())
        .unwrap_or(fallback.0);
    let l = non_empty(last)
        .and_then(|s| s.chars().next())
        .unwrap_or(fallback.1);
    escape(&format!("{}{}", f, l))
}

/// Parse the date formats the backend emits (RFC 2822 from Flask's JSON
/// encoder, RFC 3339, or bare SQL dates/datetimes).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `M/D/YYYY`, or `N/A` for absent or unparseable dates.
pub fn short_date(raw: Option<&str>) -> String {
    non_empty(raw)
        .and_then(parse_date)
        .map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_excerpt_boundaries() {
        let exact = "a".repeat(150);
        assert_eq!(excerpt(&exact, 150), exact);

        let long = "b".repeat(151);
        let cut = excerpt(&long, 150);
        assert_eq!(cut.chars().count(), 153);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..150], &"b".repeat(150));
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        assert_eq!(excerpt(&text, 4), "éééé...");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(count(None), "0");
        assert_eq!(count(Some(12.0)), "12");
        assert_eq!(count(Some(2.5)), "2.5");
        assert_eq!(fixed(None, 1), "0.0");
        assert_eq!(fixed(Some(12.345), 1), "12.3");
        assert_eq!(fixed(Some(99.6), 0), "100");
    }

    #[test]
    fn test_initials_fallback() {
        assert_eq!(initials(Some("Ann"), Some("Lee"), ('C', 'H')), "AL");
        assert_eq!(initials(None, Some(""), ('C', 'H')), "CH");
    }

    #[test]
    fn test_dates() {
        assert_eq!(short_date(Some("Mon, 05 Feb 2024 00:00:00 GMT")), "2/5/2024");
        assert_eq!(short_date(Some("2023-11-20")), "11/20/2023");
        assert_eq!(short_date(Some("2023-11-20 18:30:00")), "11/20/2023");
        assert_eq!(short_date(Some("yesterday")), "N/A");
        assert_eq!(short_date(None), "N/A");
    }
}
