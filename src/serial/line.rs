//! # Line Module
//!
//! Turns one received text line into a label/value [`Reading`].
//!
//! A line is accepted when it looks like `<label>:<whitespace><value><whitespace>`.
//! The label is the shortest non-empty prefix ending at the first colon that is
//! followed by whitespace, and the value is the run of non-whitespace characters
//! after the separator. The value must itself be followed by whitespace, which
//! for a complete line is usually the terminating `\n`.

use std::sync::LazyLock;

use regex::Regex;

static LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?):\s+(\S+)\s").expect("Invalid regex pattern"));

/// One label/value pair taken from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub label: String,
    pub value: String,
}

impl Reading {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Parses a received line into a [`Reading`].
///
/// Returns `None` for lines that do not match; those are not errors.
///
/// # Examples
///
/// ```
/// use frsky_monitor::serial::line::{parse_line, Reading};
///
/// assert_eq!(parse_line("Temp1: 23 \n"), Some(Reading::new("Temp1", "23")));
/// assert_eq!(parse_line("garbage\n"), None);
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Option<Reading> {
    let captures = LINE_PATTERN.captures(line)?;
    Some(Reading::new(&captures[1], &captures[2]))
}
