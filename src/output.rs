//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::api::ValidationResponse;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of checking one password from the command line
///
/// Serializes to the same body the HTTP endpoint returns.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CheckReport {
    /// The endpoint-shaped response
    pub response: ValidationResponse,
}

impl CheckReport {
    /// Wrap a response for rendering
    #[must_use]
    pub const fn new(response: ValidationResponse) -> Self {
        Self { response }
    }

    /// Whether the password passed every rule
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.response.valid
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable lines, without trailing newline
    #[must_use]
    pub fn human_lines(&self) -> Vec<String> {
        if self.passed() {
            return vec![format!("{} Password is valid", "✓".green())];
        }

        let mut lines = vec![format!("{} Password is invalid:", "✗".red())];
        lines.extend(self.response.messages().iter().map(|m| format!("  • {m}")));
        lines
    }

    fn render_human(&self) {
        for line in self.human_lines() {
            println!("{line}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
