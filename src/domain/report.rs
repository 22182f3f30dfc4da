//! Report shapes produced by the analytics services and their text/JSON rendering.

use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

const BANNER_WIDTH: usize = 70;
const INDENT: &str = "   ";

/// One numbered item of a section: a heading and the lines printed under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub heading: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, heading: impl Into<String>, lines: Vec<String>) -> Self {
        self.entries.push(Entry {
            heading: heading.into(),
            lines,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated_at: Utc::now(),
            sections: Vec::new(),
        }
    }

    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Console layout: banner, one block per section, numbered entries, footer.
    pub fn render_text(&self) -> String {
        let banner = "=".repeat(BANNER_WIDTH);
        let rule = "-".repeat(BANNER_WIDTH);
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "{banner}");
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{banner}");

        for section in &self.sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "{rule}");
            let _ = writeln!(out, "{}", section.title);
            let _ = writeln!(out, "{rule}");

            for (i, entry) in section.entries.iter().enumerate() {
                let _ = writeln!(out);
                let _ = writeln!(out, "{}. {}:", i + 1, entry.heading);
                if entry.lines.is_empty() {
                    let _ = writeln!(out, "{INDENT}(none)");
                }
                for line in &entry.lines {
                    let _ = writeln!(out, "{INDENT}{line}");
                }
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{banner}");
        let _ = writeln!(
            out,
            "Report generated at {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(out, "{banner}");
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Two-decimal currency, e.g. `$1200.00`.
pub fn money(value: f64) -> String {
    format!("${value:.2}")
}

/// Shortest text that reads back to the same value, always with a fractional
/// part (`1200.0`, `25.0`, `45.5`). Magnitudes outside `[1e-3, 1e7)` switch to
/// scientific notation with an upper-case exponent (`1.0E7`, `1.0E-4`).
pub fn plain_real(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if value.is_nan() || magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{value:?}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        let mut report = Report::new("TEST REPORT");
        report.push_section(
            Section::new("FIRST")
                .entry("Names", vec!["- ANA".to_string(), "- JUAN".to_string()])
                .entry("Empty", vec![]),
        );
        report
    }

    #[test]
    fn test_render_text_layout() {
        let text = sample_report().render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=".repeat(70));
        assert_eq!(lines[1], "TEST REPORT");
        assert!(text.contains(&format!("{}\nFIRST\n{}", "-".repeat(70), "-".repeat(70))));
        assert!(text.contains("1. Names:\n   - ANA\n   - JUAN\n"));
        assert!(text.contains("2. Empty:\n   (none)\n"));
        assert!(text.contains("Report generated at "));
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(money(1200.0), "$1200.00");
        assert_eq!(money(76.666), "$76.67");
        assert_eq!(plain_real(1200.0), "1200.0");
        assert_eq!(plain_real(25.0), "25.0");
        assert_eq!(plain_real(45.5), "45.5");
        assert_eq!(plain_real(-3.0), "-3.0");
    }

    #[test]
    fn test_plain_real_scientific_range() {
        assert_eq!(plain_real(9_999_999.5), "9999999.5");
        assert_eq!(plain_real(1e7), "1.0E7");
        assert_eq!(plain_real(1.25e10), "1.25E10");
        assert_eq!(plain_real(0.001), "0.001");
        assert_eq!(plain_real(0.0001), "1.0E-4");
        assert_eq!(plain_real(-2.5e-5), "-2.5E-5");
        assert_eq!(plain_real(0.0), "0.0");
        assert_eq!(plain_real(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_section_lookup() {
        let report = sample_report();
        assert!(report.section("FIRST").is_some());
        assert!(report.section("MISSING").is_none());
    }
}
