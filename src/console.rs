//! Console output formatting with ANSI color support.
//!
//! Status lines go to stdout, warnings and the debug trace to stderr.
//! Colors follow TTY detection and the NO_COLOR environment variable.

use crate::model::Comic;
use std::io::{self, IsTerminal};

/// ANSI style codes for terminal formatting.
#[derive(Debug, Clone, Copy)]
pub enum Style {
    Bold,
    Dim,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl Style {
    /// Returns the ANSI escape code for this style.
    fn code(self) -> &'static str {
        match self {
            Style::Bold => "1",
            Style::Dim => "2",
            Style::Green => "32",
            Style::Yellow => "33",
            Style::Blue => "34",
            Style::Magenta => "35",
            Style::Cyan => "36",
            Style::Gray => "90",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Console output handler with color support detection.
///
/// Color support is tracked per stream, since stdout and stderr can be
/// redirected independently.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    colors_enabled: bool,
    stderr_colors_enabled: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Creates a new Console instance, detecting color support.
    ///
    /// Colors are disabled on a stream if:
    /// - The `NO_COLOR` environment variable is set
    /// - that stream is not a terminal (TTY)
    pub fn new() -> Self {
        let allowed = std::env::var("NO_COLOR").is_err();

        Self {
            colors_enabled: allowed && io::stdout().is_terminal(),
            stderr_colors_enabled: allowed && io::stderr().is_terminal(),
        }
    }

    /// Creates a Console with colors explicitly enabled or disabled.
    pub fn with_colors(enabled: bool) -> Self {
        Self {
            colors_enabled: enabled,
            stderr_colors_enabled: enabled,
        }
    }

    /// Returns a Console styling for stderr.
    fn stderr(&self) -> Self {
        Self::with_colors(self.stderr_colors_enabled)
    }

    /// Applies ANSI styles to text if colors are enabled on stdout.
    pub fn style(&self, text: &str, styles: &[Style]) -> String {
        if !self.colors_enabled || styles.is_empty() {
            return text.to_string();
        }

        let codes: Vec<&str> = styles.iter().map(|s| s.code()).collect();
        format!("\x1b[{}m{}{}", codes.join(";"), text, RESET)
    }

    /// Creates a colored label like `[INFO]`.
    pub fn label(&self, label: &str, color: Style) -> String {
        let styled = self.style(label, &[color, Style::Bold]);
        format!("[{}]", styled)
    }

    /// Prints an info message with blue `[INFO]` label.
    pub fn info(&self, message: &str) {
        println!("{} {}", self.label("INFO", Style::Blue), message);
    }

    /// Prints a success message with green `[OK]` label.
    pub fn success(&self, message: &str) {
        println!("{} {}", self.label("OK", Style::Green), message);
    }

    /// Prints a warning message with yellow `[WARN]` label.
    pub fn warning(&self, message: &str) {
        let err = self.stderr();
        eprintln!("{} {}", err.label("WARN", Style::Yellow), message);
    }

    /// Prints a trace line with gray `[DEBUG]` label.
    pub fn debug(&self, message: &str) {
        let err = self.stderr();
        eprintln!("{} {}", err.label("DEBUG", Style::Gray), err.muted(message));
    }

    /// Prints a section header in magenta bold.
    pub fn section(&self, message: &str) {
        println!();
        println!("{}", self.style(message, &[Style::Magenta, Style::Bold]));
    }

    /// Returns text styled as muted (dim gray).
    pub fn muted(&self, text: &str) -> String {
        self.style(text, &[Style::Gray, Style::Dim])
    }

    /// Formats a comic as a block of labelled lines.
    pub fn comic_summary(&self, comic: &Comic) -> String {
        let heading = self.style(
            &format!("#{} {}", comic.number, comic.title),
            &[Style::Cyan, Style::Bold],
        );
        format!(
            "{}\n  date:  {}\n  image: {}\n  {}",
            heading,
            comic.date,
            comic.image,
            self.muted(&comic.description)
        )
    }
}
