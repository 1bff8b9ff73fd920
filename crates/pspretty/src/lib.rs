//! # pspretty
//!
//! Prettified container listings. `pspretty` runs a container CLI's `ps`
//! command with JSON-lines output and reformats the result.
//!
//! ## Features
//!
//! - **Filtering**: `key:substring` tokens matched case-insensitively against field names and values
//! - **Sorting**: by ID, name, image, status, creation time or ports, ascending or descending
//! - **Rendering**: wrapped, colored tables or JSON, CSV and Markdown export
//! - **Sinks**: stdout, a file, a pager, or fzf for interactive selection
//!
//! ## Usage
//!
//! ```no_run
//! use pspretty::config::ListerConfig;
//! use pspretty::query::{Query, SortField};
//! use pspretty::render::{render, OutputFormat, RenderOptions};
//!
//! # fn example() -> pspretty_common::PsResult<()> {
//! let config = ListerConfig::default().with_runtime("podman");
//! if let Some(records) = pspretty::fetch::fetch(&config)? {
//!     let query = Query {
//!         sort_by: Some(SortField::Name),
//!         ..Query::default()
//!     };
//!     let records = query.apply(records);
//!     println!("{}", render(&records, OutputFormat::Markdown, RenderOptions::terminal())?);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod fetch;
pub mod query;
pub mod render;
pub mod sink;

pub use cli::Cli;
