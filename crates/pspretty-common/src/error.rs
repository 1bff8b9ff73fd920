//! Common error types for pspretty.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias using [`PsError`].
pub type PsResult<T> = Result<T, PsError>;

/// Errors raised while listing, rendering or emitting containers.
#[derive(Error, Diagnostic, Debug)]
pub enum PsError {
    /// A line of listing output was not a JSON object.
    #[error("Malformed listing output on line {line}: {message}")]
    #[diagnostic(
        code(pspretty::listing::malformed),
        help("The runtime's `ps` command must print one JSON object per line")
    )]
    MalformedLine {
        /// 1-based line number in the listing output.
        line: usize,
        /// Parser message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    #[diagnostic(code(pspretty::io))]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    #[diagnostic(code(pspretty::serialization))]
    Serialization(String),

    /// CSV writer error.
    #[error("CSV error: {0}")]
    #[diagnostic(code(pspretty::csv))]
    Csv(String),

    /// The pager could not be started or failed.
    #[error("Pager `{command}` failed: {message}")]
    #[diagnostic(
        code(pspretty::pager),
        help("Set PSPRETTY_PAGER or PAGER to an installed pager, e.g. `less -R`")
    )]
    PagerFailed {
        /// The pager command line.
        command: String,
        /// What went wrong.
        message: String,
    },

    /// The fuzzy selector could not be run.
    #[error("fzf failed: {message}")]
    #[diagnostic(code(pspretty::fzf))]
    FuzzySelector {
        /// What went wrong.
        message: String,
    },
}

impl From<serde_json::Error> for PsError {
    fn from(err: serde_json::Error) -> Self {
        PsError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for PsError {
    fn from(err: csv::Error) -> Self {
        PsError::Csv(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PsError::MalformedLine {
            line: 3,
            message: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed listing output on line 3: expected value"
        );
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PsError = io_err.into();
        assert!(matches!(err, PsError::Io(_)));
    }

    #[test]
    fn error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PsError = json_err.into();
        assert!(matches!(err, PsError::Serialization(_)));
    }
}
