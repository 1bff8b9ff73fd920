//! Terminal table rendering.

use console::Style;
use pspretty_common::ContainerRecord;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Color, Style as TableStyle, Width};
use tabled::{Table, Tabled};

use super::RenderOptions;

/// Width at which the Ports column wraps.
pub const PORTS_WRAP_WIDTH: usize = 48;

#[derive(Tabled)]
struct ContainerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Image")]
    image: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Ports")]
    ports: String,
}

impl ContainerRow {
    fn new(record: &ContainerRecord, color: bool) -> Self {
        let [id, name, image, status, created, ports] = record.well_known();
        Self {
            id: id.to_string(),
            name: name.to_string(),
            image: image.to_string(),
            status: status_style(status)
                .force_styling(color)
                .apply_to(status)
                .to_string(),
            created: created.to_string(),
            ports: ports.to_string(),
        }
    }
}

/// Style for a status cell: green when up, red when exited or dead,
/// yellow otherwise.
#[must_use]
pub fn status_style(status: &str) -> Style {
    let status = status.to_lowercase();
    if status.contains("up") {
        Style::new().green()
    } else if status.contains("exited") || status.contains("dead") {
        Style::new().red()
    } else {
        Style::new().yellow()
    }
}

/// Render records as a table with lines between rows.
#[must_use]
pub fn to_table(records: &[ContainerRecord], options: RenderOptions) -> String {
    let rows = records.iter().map(|r| ContainerRow::new(r, options.color));
    let mut table = Table::new(rows);

    table
        .with(TableStyle::modern())
        .modify(
            Columns::new(5..),
            Width::wrap(PORTS_WRAP_WIDTH).keep_words(true),
        );

    if options.color {
        table
            .modify(Columns::first(), Color::BOLD)
            .modify(Rows::first(), Color::BOLD | Color::FG_CYAN);
    }

    if let Some(width) = options.width {
        table.with(Width::wrap(width));
    }

    table.to_string()
}
