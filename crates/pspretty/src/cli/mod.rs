//! CLI definition and pipeline driver.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use color_eyre::eyre::Result;

use crate::config::{DEFAULT_RUNTIME, ListerConfig};
use crate::fetch::fetch;
use crate::query::{Query, SortField, parse_filters};
use crate::render::{OutputFormat, RenderOptions, render};
use crate::sink::Sink;

/// Printed when the listing command reports nothing.
pub const NO_CONTAINERS: &str = "No containers found.";

const EXAMPLES: &str = "\
Examples:

  pspretty --sortby name --desc
  pspretty --filter \"name:ombi status:running\"
  pspretty --format csv --output containers.csv
  pspretty --limit 5 --pager
  pspretty --fzf
  pspretty --runtime podman --all";

/// Prettified container listing with wrapped columns, filtering, paging and export
#[derive(Parser, Debug)]
#[command(name = "pspretty")]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Sort containers by one field
    #[arg(long, value_enum)]
    pub sortby: Option<SortField>,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Multi-key filter (e.g. "name:ombi status:running")
    #[arg(long)]
    pub filter: Option<String>,

    /// Pipe output to fzf for interactive selection
    #[arg(long)]
    pub fzf: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Limit number of rows shown
    #[arg(long)]
    pub limit: Option<usize>,

    /// Pipe output to a pager ($PSPRETTY_PAGER, $PAGER or `less -R`)
    #[arg(long)]
    pub pager: bool,

    /// Write output to file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Show all containers, not just running ones
    #[arg(short, long)]
    pub all: bool,

    /// Container CLI to list with
    #[arg(long, env = "PSPRETTY_RUNTIME", default_value = DEFAULT_RUNTIME)]
    pub runtime: String,

    /// Pager command line
    #[arg(long, env = "PSPRETTY_PAGER", hide = true)]
    pub pager_command: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Lister configuration from flags and environment.
    #[must_use]
    pub fn config(&self) -> ListerConfig {
        let pager = self
            .pager_command
            .clone()
            .or_else(|| std::env::var("PAGER").ok());

        ListerConfig::default()
            .with_runtime(self.runtime.clone())
            .with_all(self.all)
            .with_pager(pager.as_deref())
    }

    /// Filter, sort and limit settings.
    #[must_use]
    pub fn query(&self) -> Query {
        Query {
            filters: self.filter.as_deref().map(parse_filters).unwrap_or_default(),
            sort_by: self.sortby,
            descending: self.desc,
            limit: self.limit,
        }
    }

    /// Where the document goes and how it is laid out.
    ///
    /// fzf wins over `--output`, which wins over `--pager`.
    #[must_use]
    pub fn destination(&self, config: &ListerConfig) -> (Sink, RenderOptions) {
        if self.fzf {
            (Sink::Fzf, RenderOptions::forced_color())
        } else if let Some(path) = &self.output {
            (Sink::File(path.clone()), RenderOptions::file(config.file_width))
        } else if self.pager {
            (Sink::Pager(config.pager.clone()), RenderOptions::terminal())
        } else {
            (Sink::Stdout, RenderOptions::terminal())
        }
    }

    /// Execute the CLI command.
    pub fn execute(self) -> Result<()> {
        if let Some(shell) = self.completions {
            let mut command = Self::command();
            clap_complete::generate(shell, &mut command, "pspretty", &mut std::io::stdout());
            return Ok(());
        }

        let config = self.config();
        tracing::debug!(?config, "Listing containers");

        let Some(records) = fetch(&config)? else {
            println!("{NO_CONTAINERS}");
            return Ok(());
        };

        let records = self.query().apply(records);
        let (sink, options) = self.destination(&config);
        let document = render(&records, self.format, options)?;
        sink.emit(&document)?;
        Ok(())
    }
}
