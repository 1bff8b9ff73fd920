//! Invoke the runtime's `ps` command and parse its JSON-lines output.

use std::process::Command;

use pspretty_common::{ContainerRecord, PsError, PsResult};

use crate::config::ListerConfig;

/// Run `<runtime> ps --format '{{json .}}'` and parse the result.
///
/// Returns `Ok(None)` when the runtime printed nothing. A runtime that
/// cannot be spawned or exits non-zero is logged and treated as whatever
/// it printed to stdout.
///
/// # Errors
///
/// Returns [`PsError::MalformedLine`] if a line of output is not a JSON object.
pub fn fetch(config: &ListerConfig) -> PsResult<Option<Vec<ContainerRecord>>> {
    let raw = run_listing(config);
    if raw.is_empty() {
        tracing::debug!(runtime = %config.runtime, "Listing command produced no output");
        return Ok(None);
    }

    let records = parse_lines(&raw)?;
    tracing::debug!(runtime = %config.runtime, count = records.len(), "Parsed containers");
    Ok(Some(records))
}

/// Parse newline-delimited JSON objects into records, skipping blank lines.
///
/// # Errors
///
/// Returns [`PsError::MalformedLine`] with the 1-based line number of the
/// first line that fails to parse.
pub fn parse_lines(raw: &str) -> PsResult<Vec<ContainerRecord>> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            ContainerRecord::from_json_line(line).map_err(|e| PsError::MalformedLine {
                line: idx + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

fn run_listing(config: &ListerConfig) -> String {
    let output = match Command::new(&config.runtime)
        .args(config.ps_args())
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!(runtime = %config.runtime, error = %e, "Failed to run listing command");
            return String::new();
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::warn!(
            runtime = %config.runtime,
            status = %output.status,
            stderr = %stderr.trim(),
            "Listing command failed"
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
