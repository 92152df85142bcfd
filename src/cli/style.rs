//! Terminal styling helpers

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;

/// Check mark used in success lines
pub const CHECK: &str = "✓";

/// Green check mark.
#[must_use]
pub fn check() -> String {
    CHECK.green().to_string()
}

/// Cyan arrow for step listings.
#[must_use]
pub fn arrow() -> String {
    "→".cyan().to_string()
}

/// Spinner style shared by all long-running steps.
#[must_use]
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.yellow} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Semantic styling for user-facing strings
pub trait Stylize {
    /// Bold, for the important part of a line
    fn emphasis(&self) -> String;
    /// Dimmed, for secondary information
    fn muted(&self) -> String;
    /// Cyan, for names and counts
    fn accent(&self) -> String;
    /// Green, for success lines
    fn success(&self) -> String;
    /// Red, for error lines
    fn error(&self) -> String;
}

impl<T: std::fmt::Display> Stylize for T {
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn error(&self) -> String {
        self.red().to_string()
    }
}
