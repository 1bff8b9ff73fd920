//! Rendering of container records into documents.
//!
//! Every format renders to a `String` without a trailing newline; the sink
//! decides where it goes.

mod export;
mod table;

use clap::ValueEnum;
use pspretty_common::{ContainerRecord, PsResult};

pub use export::{to_csv, to_json, to_markdown};
pub use table::{PORTS_WRAP_WIDTH, status_style, to_table};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Wrapped, colored table.
    #[default]
    Table,
    /// Pretty-printed JSON array with every reported field.
    Json,
    /// CSV with the six displayed columns.
    Csv,
    /// Markdown table with the six displayed columns.
    Markdown,
}

/// How a document is laid out for its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum table width, or `None` to leave rows unwrapped.
    pub width: Option<usize>,
    /// Emit ANSI colors.
    pub color: bool,
}

impl RenderOptions {
    /// Options for the current terminal: its width, and colors when stdout
    /// supports them.
    #[must_use]
    pub fn terminal() -> Self {
        let width = console::Term::stdout()
            .size_checked()
            .map(|(_, cols)| usize::from(cols));
        Self {
            width,
            color: console::colors_enabled(),
        }
    }

    /// Options for a file: fixed width, no colors.
    #[must_use]
    pub const fn file(width: usize) -> Self {
        Self {
            width: Some(width),
            color: false,
        }
    }

    /// Options for piping into an ANSI-aware selector: terminal width,
    /// colors forced on.
    #[must_use]
    pub fn forced_color() -> Self {
        Self {
            color: true,
            ..Self::terminal()
        }
    }
}

/// Render `records` in `format`.
///
/// # Errors
///
/// Returns an error if JSON or CSV serialization fails.
pub fn render(
    records: &[ContainerRecord],
    format: OutputFormat,
    options: RenderOptions,
) -> PsResult<String> {
    tracing::debug!(?format, ?options, count = records.len(), "Rendering");
    match format {
        OutputFormat::Table => Ok(to_table(records, options)),
        OutputFormat::Json => to_json(records),
        OutputFormat::Csv => to_csv(records),
        OutputFormat::Markdown => Ok(to_markdown(records)),
    }
}
