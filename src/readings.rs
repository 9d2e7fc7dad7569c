//! # Readings Module
//!
//! The latest value seen for every label.

use std::collections::BTreeMap;
use std::fmt;

use crate::serial::line::{Reading, parse_line};

/// Latest readings, keyed by label.
///
/// Labels are unique, a later reading overwrites the earlier one. Iteration and
/// rendering are sorted by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readings {
    values: BTreeMap<String, String>,
}

impl Readings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a reading, returning the value it replaced.
    pub fn update(&mut self, reading: Reading) -> Option<String> {
        self.values.insert(reading.label, reading.value)
    }

    /// Parses `line` and stores the reading if it matched.
    ///
    /// Returns `true` when the mapping was updated.
    pub fn apply_line(&mut self, line: &str) -> bool {
        match parse_line(line) {
            Some(reading) => {
                self.update(reading);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.values.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One entry per line, labels padded to a common width.
impl fmt::Display for Readings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .values
            .keys()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in &self.values {
            writeln!(f, "    {label:<width$} : {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(readings: &mut Readings, lines: &[&str]) {
        for line in lines {
            readings.apply_line(line);
        }
    }

    #[test]
    fn test_single_line() {
        let mut readings = Readings::new();
        assert!(readings.apply_line("Temp1: 23 \n"));
        assert_eq!(readings.get("Temp1"), Some("23"));
        assert_eq!(readings.len(), 1);
    }

    #[test]
    fn test_overwrite_same_label() {
        let mut readings = Readings::new();
        feed(&mut readings, &["Temp1: 23 \n", "Temp1: 25 \n"]);
        assert_eq!(readings.get("Temp1"), Some("25"));
        assert_eq!(readings.len(), 1);
    }

    #[test]
    fn test_same_line_twice_is_idempotent() {
        let mut once = Readings::new();
        feed(&mut once, &["Volt: 4.2 \n"]);
        let mut twice = Readings::new();
        feed(&mut twice, &["Volt: 4.2 \n", "Volt: 4.2 \n"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_matching_line_leaves_state() {
        let mut readings = Readings::new();
        feed(&mut readings, &["A: 1 \n"]);
        let before = readings.clone();
        assert!(!readings.apply_line("garbage\n"));
        assert!(!readings.apply_line("A: 7"));
        assert_eq!(readings, before);
    }

    #[test]
    fn test_interleaved_labels() {
        let mut readings = Readings::new();
        feed(&mut readings, &["A: 1 \n", "B: 2 \n", "A: 3 \n"]);
        let entries: Vec<_> = readings.iter().collect();
        assert_eq!(entries, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn test_update_returns_previous() {
        let mut readings = Readings::new();
        assert_eq!(readings.update(Reading::new("RPM", "100")), None);
        assert_eq!(
            readings.update(Reading::new("RPM", "200")),
            Some("100".to_string())
        );
    }

    #[test]
    fn test_render_sorted_and_aligned() {
        let mut readings = Readings::new();
        feed(&mut readings, &["Batt: 4.2 \n", "A: 3 \n"]);
        assert_eq!(readings.to_string(), "    A    : 3\n    Batt : 4.2\n");
    }

    #[test]
    fn test_render_empty() {
        assert!(Readings::new().is_empty());
        assert_eq!(Readings::new().to_string(), "");
    }
}
