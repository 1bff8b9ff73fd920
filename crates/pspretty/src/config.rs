//! Lister configuration.

/// Runtime CLI invoked when none is configured.
pub const DEFAULT_RUNTIME: &str = "docker";

/// Pager command line used when neither `PSPRETTY_PAGER` nor `PAGER` is set.
pub const DEFAULT_PAGER: &str = "less -R";

/// Table width used when writing a table to a file.
pub const FILE_TABLE_WIDTH: usize = 140;

/// Lister configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListerConfig {
    /// Container CLI whose `ps` subcommand is invoked (`docker`, `podman`, ...).
    pub runtime: String,
    /// Whether to include stopped containers.
    pub all: bool,
    /// Pager command line, split on whitespace.
    pub pager: String,
    /// Table width for file output.
    pub file_width: usize,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            all: false,
            pager: DEFAULT_PAGER.to_string(),
            file_width: FILE_TABLE_WIDTH,
        }
    }
}

impl ListerConfig {
    /// Set the runtime CLI.
    #[must_use]
    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    /// Include stopped containers.
    #[must_use]
    pub const fn with_all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    /// Set the pager command line. Blank values are ignored.
    #[must_use]
    pub fn with_pager(mut self, pager: Option<&str>) -> Self {
        if let Some(pager) = pager.map(str::trim).filter(|p| !p.is_empty()) {
            self.pager = pager.to_string();
        }
        self
    }

    /// Set the table width for file output.
    #[must_use]
    pub const fn with_file_width(mut self, width: usize) -> Self {
        self.file_width = width;
        self
    }

    /// Arguments passed to the runtime to list containers as JSON lines.
    #[must_use]
    pub fn ps_args(&self) -> Vec<&str> {
        let mut args = vec!["ps", "--format", "{{json .}}"];
        if self.all {
            args.push("--all");
        }
        args
    }
}
