//! Output formatting utilities.

use chrono::{DateTime, Utc};

const ELLIPSIS: &str = "...";

/// Keeps the start of `s`, replacing the rest with `...` when longer than `max_len`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len()).max(1);
    let head: String = s.chars().take(keep).collect();
    format!("{}{}", head, ELLIPSIS)
}

/// Keeps the end of `s`, replacing the start with `...` when longer than `max_len`.
pub fn tail(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len()).max(1);
    let rest: String = s.chars().skip(len - keep).collect();
    format!("{}{}", ELLIPSIS, rest)
}

/// Prints an echoed input value to stderr, e.g. `-k: 11qYAYKx...`.
pub fn echo(flag: &str, value: &str) {
    eprintln!("{}: {}", flag, value);
}

/// Interprets a header timestamp as Unix seconds, rendered as RFC 3339.
pub fn delivered_at(timestamp: &str) -> Option<String> {
    let secs: i64 = timestamp.parse().ok()?;
    DateTime::<Utc>::from_timestamp(secs, 0).map(|t| t.to_rfc3339())
}
