use colored::*;

/// Styling for the summary lines printed after a batch. Log output on stderr
/// is never colored through here.
pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn output_path(&self, text: &str) -> ColoredString {
        text.yellow().underline()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn failure(&self, text: &str) -> ColoredString {
        text.red().bold()
    }

    pub fn count(&self, text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
