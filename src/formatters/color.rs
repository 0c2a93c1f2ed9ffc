// src/formatters/color.rs
// =============================================================================
// Human-readable output: one line per URL.
//
//   https://example.com [200]
//   http://example.invalid [ERROR] error sending request for url ...
//
// Picking a color is a plain lookup: StatusClass -> Tone -> console::Style.
// The plain formatter is the same text with the lookup left out.
// =============================================================================

use super::ResultFormatter;
use crate::prober::{Outcome, ProbeResult, StatusClass};
use anyhow::Result;
use console::Style;
use std::sync::LazyLock;

static NORMAL: LazyLock<Style> = LazyLock::new(Style::new);
static GREEN: LazyLock<Style> = LazyLock::new(|| Style::new().green());
static CYAN: LazyLock<Style> = LazyLock::new(|| Style::new().cyan());
static YELLOW: LazyLock<Style> = LazyLock::new(|| Style::new().yellow());
static RED: LazyLock<Style> = LazyLock::new(|| Style::new().red());

/// The color a result line is printed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Green,
    Cyan,
    Yellow,
    Red,
}

impl Tone {
    fn style(self) -> &'static Style {
        match self {
            Tone::Plain => &NORMAL,
            Tone::Green => &GREEN,
            Tone::Cyan => &CYAN,
            Tone::Yellow => &YELLOW,
            Tone::Red => &RED,
        }
    }
}

/// 2xx green, 3xx cyan, 4xx yellow, 5xx and failed requests red
pub fn tone_for(class: StatusClass) -> Tone {
    match class {
        StatusClass::Success => Tone::Green,
        StatusClass::Redirect => Tone::Cyan,
        StatusClass::ClientError => Tone::Yellow,
        StatusClass::ServerError | StatusClass::Failed => Tone::Red,
        StatusClass::Informational => Tone::Plain,
    }
}

fn plain_line(result: &ProbeResult) -> String {
    match &result.outcome {
        Outcome::Response { status_code, .. } => format!("{} [{}]", result.url, status_code),
        Outcome::Failed { error } => format!("{} [ERROR] {}", result.url, error),
    }
}

/// Colored lines; console drops the colors when stdout is not a terminal
pub struct ColorFormatter;

impl ResultFormatter for ColorFormatter {
    fn format_result(&self, result: &ProbeResult) -> Result<String> {
        let style = tone_for(result.class()).style();
        Ok(style.apply_to(plain_line(result)).to_string())
    }
}

pub struct PlainFormatter;

impl ResultFormatter for PlainFormatter {
    fn format_result(&self, result: &ProbeResult) -> Result<String> {
        Ok(plain_line(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    /// Helper function to strip ANSI color codes for tests
    fn strip_ansi_codes(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    #[test]
    fn test_tone_lookup() {
        assert_eq!(tone_for(StatusClass::Success), Tone::Green);
        assert_eq!(tone_for(StatusClass::Redirect), Tone::Cyan);
        assert_eq!(tone_for(StatusClass::ClientError), Tone::Yellow);
        assert_eq!(tone_for(StatusClass::ServerError), Tone::Red);
        assert_eq!(tone_for(StatusClass::Failed), Tone::Red);
        assert_eq!(tone_for(StatusClass::Informational), Tone::Plain);
    }

    #[test]
    fn test_color_line_text() {
        let result = ProbeResult::response("https://example.com", StatusCode::NOT_FOUND);
        let line = ColorFormatter.format_result(&result).unwrap();
        assert_eq!(strip_ansi_codes(&line), "https://example.com [404]");
    }

    #[test]
    fn test_error_line_text() {
        let result = ProbeResult::failed("http://example.invalid", "dns error");
        let line = ColorFormatter.format_result(&result).unwrap();
        assert_eq!(
            strip_ansi_codes(&line),
            "http://example.invalid [ERROR] dns error"
        );
    }

    #[test]
    fn test_plain_has_no_escape_codes() {
        let result = ProbeResult::response("https://example.com", StatusCode::OK);
        let line = PlainFormatter.format_result(&result).unwrap();
        assert_eq!(line, "https://example.com [200]");
    }

    #[test]
    fn test_forced_colors_differ_per_tone() {
        let ok = GREEN.clone().force_styling(true).apply_to("x").to_string();
        let bad = RED.clone().force_styling(true).apply_to("x").to_string();
        assert_ne!(ok, bad);
        assert_ne!(ok, "x");
    }
}
