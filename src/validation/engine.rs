//! Conversion Engine
//!
//! Line-oriented batch conversion with diagnostics, separated from
//! the CLI concerns. Each non-blank line is either decimal text,
//! converted to a numeral, or numeral text, converted to an integer.

use serde::Serialize;

use crate::numeral::{integer_to_roman, parse_integer, roman_to_integer};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message for a conversion issue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
    pub severity: Severity,
}

/// Which way a line was converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ToInteger,
    ToRoman,
}

/// A successful conversion of one line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub line: usize,
    pub input: String,
    pub direction: Direction,
    pub value: i32,
    pub roman: String,
}

/// Knobs the caller can turn; see `Config::options`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Report blank lines as errors instead of skipping them
    pub strict_empty: bool,
    /// Accept 0, which converts to the empty string
    pub allow_zero: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict_empty: false,
            allow_zero: true,
        }
    }
}

/// Result of converting a document or line
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConversionReport {
    pub conversions: Vec<Conversion>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ConversionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, line: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            message,
            severity: Severity::Error,
        });
    }

    pub fn add_warning(&mut self, line: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            message,
            severity: Severity::Warning,
        });
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }
}

/// Convert a single line of input
pub fn convert_line(line_num: usize, line: &str, options: &Options) -> ConversionReport {
    let mut report = ConversionReport::new();
    let text = line.trim();

    if text.is_empty() {
        if options.strict_empty {
            report.add_error(line_num, "Empty input is not a Roman numeral".to_string());
        }
        return report;
    }

    if looks_numeric(text) {
        convert_integer(line_num, text, options, &mut report);
    } else {
        convert_numeral(line_num, text, &mut report);
    }

    report
}

/// Convert an entire document, one entry per line
pub fn convert_document(content: &str, options: &Options) -> ConversionReport {
    let mut report = ConversionReport::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_report = convert_line(line_num + 1, line, options);
        report.conversions.extend(line_report.conversions);
        report.diagnostics.extend(line_report.diagnostics);
    }

    report
}

/// Decimal text with an optional leading minus, as typed into a number field
fn looks_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn convert_integer(line_num: usize, text: &str, options: &Options, report: &mut ConversionReport) {
    let value = match parse_integer(text) {
        Ok(value) => value,
        Err(err) => {
            report.add_error(line_num, err.to_string());
            return;
        }
    };

    if value == 0 {
        if !options.allow_zero {
            report.add_error(line_num, "Zero has no Roman numeral".to_string());
            return;
        }
        report.add_warning(
            line_num,
            "Zero has no Roman symbol; converted to an empty numeral".to_string(),
        );
    }

    match integer_to_roman(value) {
        Ok(roman) => report.conversions.push(Conversion {
            line: line_num,
            input: text.to_string(),
            direction: Direction::ToRoman,
            value,
            roman,
        }),
        Err(err) => report.add_error(line_num, err.to_string()),
    }
}

fn convert_numeral(line_num: usize, text: &str, report: &mut ConversionReport) {
    match roman_to_integer(text) {
        Ok(value) => report.conversions.push(Conversion {
            line: line_num,
            input: text.to_string(),
            direction: Direction::ToInteger,
            value,
            roman: text.to_ascii_uppercase(),
        }),
        Err(err) => report.add_error(line_num, err.to_string()),
    }
}
