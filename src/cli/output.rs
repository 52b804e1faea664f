//! Output formatting for the resolved-configuration echo
//!
//! Before the descriptor is written, the tool echoes the configuration it
//! resolved from the command line. The echo is available as human-readable
//! text (the default) or as JSON for scripted callers.

use anyhow::{Context, Result};

use crate::config::BuildConfig;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// Human-readable formatted text
    Human,
}

/// Output formatter for the configuration echo
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Creates a new output formatter with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the resolved configuration according to the configured format
    pub fn format_config(&self, config: &BuildConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(config)
                .context("Failed to serialize configuration to JSON"),
            OutputFormat::Human => {
                let text = format!(
                    "Attempting to create CMakeLists.txt with following config:\n{}",
                    config
                );
                // The caller prints with a trailing newline of its own.
                Ok(text.trim_end_matches('\n').to_string())
            }
        }
    }
}
