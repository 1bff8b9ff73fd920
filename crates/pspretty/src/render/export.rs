//! Structured export formats.

use pspretty_common::{ContainerRecord, PsError, PsResult, WELL_KNOWN_FIELDS};

const MARKDOWN_HEADER: &str = "| ID | Name | Image | Status | Created | Ports |";
const MARKDOWN_SEPARATOR: &str = "|----|------|-------|--------|---------|-------|";

/// Pretty-printed JSON array with every reported field.
///
/// # Errors
///
/// Returns [`PsError::Serialization`] if serialization fails.
pub fn to_json(records: &[ContainerRecord]) -> PsResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// CSV with a header row and the six displayed columns.
///
/// # Errors
///
/// Returns [`PsError::Csv`] if the writer fails.
pub fn to_csv(records: &[ContainerRecord]) -> PsResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(WELL_KNOWN_FIELDS)?;
    for record in records {
        writer.write_record(record.well_known())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PsError::Csv(e.to_string()))?;
    let mut out = String::from_utf8(bytes).map_err(|e| PsError::Csv(e.to_string()))?;
    out.truncate(out.trim_end_matches('\n').len());
    Ok(out)
}

/// Markdown table with the six displayed columns.
#[must_use]
pub fn to_markdown(records: &[ContainerRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(MARKDOWN_HEADER.to_string());
    lines.push(MARKDOWN_SEPARATOR.to_string());
    for record in records {
        let cells: Vec<String> = record.well_known().iter().map(|v| escape_cell(v)).collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }
    lines.join("\n")
}

fn escape_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}
