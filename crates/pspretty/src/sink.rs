//! Destinations for a rendered document.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use pspretty_common::{PsError, PsResult};

/// Message printed when fzf cannot be found.
pub const FZF_MISSING: &str = "fzf is not installed or not in PATH.";

/// Where a rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// Standard output.
    Stdout,
    /// A file, created or truncated.
    File(PathBuf),
    /// An external pager command line.
    Pager(String),
    /// The `fzf` fuzzy selector.
    Fzf,
}

impl Sink {
    /// Deliver `document`, appending a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the pager cannot be
    /// run.
    pub fn emit(&self, document: &str) -> PsResult<()> {
        match self {
            Self::Stdout => write_stdout(document),
            Self::File(path) => write_file(path, document),
            Self::Pager(command) => page(command, document),
            Self::Fzf => select(document),
        }
    }
}

fn write_stdout(document: &str) -> PsResult<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{document}")?;
    stdout.flush()?;
    Ok(())
}

/// Write `document` to `path` followed by a newline.
///
/// # Errors
///
/// Returns [`PsError::Io`] if the file cannot be written.
pub fn write_file(path: &Path, document: &str) -> PsResult<()> {
    std::fs::write(path, format!("{document}\n"))?;
    tracing::debug!(path = %path.display(), bytes = document.len() + 1, "Output written");
    Ok(())
}

/// Pipe `document` into the pager and wait for it to exit.
///
/// # Errors
///
/// Returns [`PsError::PagerFailed`] if the command line is empty or the
/// pager cannot be spawned.
pub fn page(command: &str, document: &str) -> PsResult<()> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or_else(|| PsError::PagerFailed {
        command: command.to_string(),
        message: "empty pager command".to_string(),
    })?;

    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| PsError::PagerFailed {
            command: command.to_string(),
            message: e.to_string(),
        })?;

    feed(&mut child, document)?;
    let status = child.wait()?;
    tracing::debug!(command, %status, "Pager exited");
    Ok(())
}

/// Pipe `document` into `fzf --ansi`.
///
/// When fzf is not on `PATH`, prints [`FZF_MISSING`] in red and returns
/// `Ok`.
///
/// # Errors
///
/// Returns [`PsError::FuzzySelector`] if fzf is found but cannot be spawned.
pub fn select(document: &str) -> PsResult<()> {
    let Ok(fzf) = which::which("fzf") else {
        println!("{}", console::style(FZF_MISSING).red());
        return Ok(());
    };

    let mut child = Command::new(&fzf)
        .arg("--ansi")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| PsError::FuzzySelector {
            message: e.to_string(),
        })?;

    feed(&mut child, document)?;
    let status = child.wait()?;
    tracing::debug!(path = %fzf.display(), %status, "fzf exited");
    Ok(())
}

// The reader may quit before consuming everything (e.g. `q` in less), so a
// broken pipe here is not an error.
fn feed(child: &mut Child, document: &str) -> PsResult<()> {
    let Some(mut stdin) = child.stdin.take() else {
        return Ok(());
    };
    write_document(&mut stdin, document)
}

fn write_document(writer: &mut impl Write, document: &str) -> PsResult<()> {
    match writeln!(writer, "{document}") {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!(error = %e, "Reader closed its input early");
            Ok(())
        }
        other => other.map_err(PsError::from),
    }
}
