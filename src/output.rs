//! Human-readable lines for warnings, errors and the run summary.

use std::path::Path;

use crate::warning::Warning;

const YELLOW: &str = "33";
const RED: &str = "31";
const GREY: &str = "90";
const WHITE: &str = "37";

/// Formats diagnostic lines, optionally with ANSI emphasis.
///
/// Colour only decorates individual tokens; stripping the escape codes always
/// yields the plain line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    show_colors: bool,
}

impl Output {
    pub fn new(show_colors: bool) -> Self {
        Self { show_colors }
    }

    /// Plain output, never coloured.
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.show_colors {
            format!("\x1b[{}m{}\x1b[0m", color, text)
        } else {
            text.to_string()
        }
    }

    /// `<path>: <identifier> Warning - <message>`
    pub fn format_warning(&self, path: &Path, warning: &Warning) -> String {
        let message = match warning {
            Warning::InvalidInputConstraints { value, .. } => {
                format!("Invalid value for <praezisierung>: {}", value)
            }
            Warning::MissingAttribute { attribute, .. } => {
                format!("{} {}", self.colorize("Missing attribute", GREY), attribute)
            }
        };

        format!(
            "{}: {} {} - {}",
            path.display(),
            warning.identifier(),
            self.colorize("Warning", YELLOW),
            message
        )
    }

    /// `<path>: error - <message>`
    pub fn format_error(&self, path: &Path, message: &str) -> String {
        format!(
            "{}: {} - {}",
            path.display(),
            self.colorize("error", RED),
            message
        )
    }

    pub fn format_summary(&self, total_warnings: usize, total_errors: usize) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.colorize("Found", GREY),
            self.colorize(&total_warnings.to_string(), WHITE),
            self.colorize("warning(s)", YELLOW),
            self.colorize("and", GREY),
            self.colorize(&total_errors.to_string(), WHITE),
            self.colorize("error(s).", RED)
        )
    }
}
