//! Filtering, sorting and truncation of container records.
//!
//! A [`Query`] applies its steps in a fixed order: filter, then sort, then
//! limit.

use std::cmp::Reverse;
use std::fmt;

use clap::ValueEnum;
use pspretty_common::ContainerRecord;

/// A `key:substring` pair narrowing the result set.
///
/// Both halves are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterToken {
    /// Matched against field names.
    pub key: String,
    /// Matched against field values.
    pub value: String,
}

impl FilterToken {
    /// Create a token, lower-casing both halves.
    #[must_use]
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_lowercase(),
            value: value.to_lowercase(),
        }
    }

    /// Whether some field whose name contains the key has a value containing
    /// the substring.
    #[must_use]
    pub fn matches(&self, record: &ContainerRecord) -> bool {
        record.fields().any(|(name, value)| {
            name.to_lowercase().contains(&self.key) && value.to_lowercase().contains(&self.value)
        })
    }
}

/// Parse a space-separated list of `key:substring` tokens.
///
/// Tokens without a `:` are ignored. Only the first `:` splits, so
/// `ports:0.0.0.0:80` filters `ports` on `0.0.0.0:80`.
#[must_use]
pub fn parse_filters(input: &str) -> Vec<FilterToken> {
    input
        .split_whitespace()
        .filter_map(|part| part.split_once(':'))
        .map(|(key, value)| FilterToken::new(key, value))
        .collect()
}

/// Keep the records that satisfy every token.
#[must_use]
pub fn apply_filters(
    records: Vec<ContainerRecord>,
    filters: &[FilterToken],
) -> Vec<ContainerRecord> {
    records
        .into_iter()
        .filter(|record| filters.iter().all(|token| token.matches(record)))
        .collect()
}

/// A column records can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    /// Container ID.
    Id,
    /// Container name.
    Name,
    /// Image reference.
    Image,
    /// Human-readable status.
    Status,
    /// Creation timestamp.
    Created,
    /// Published ports.
    Ports,
}

impl SortField {
    /// Name of the record field this sorts on.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Names",
            Self::Image => "Image",
            Self::Status => "Status",
            Self::Created => "CreatedAt",
            Self::Ports => "Ports",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Stable, case-insensitive sort on `field`. Missing values sort as `""`.
///
/// Descending order reverses the key, not the result, so ties keep their
/// original relative order in both directions.
pub fn sort_records(records: &mut [ContainerRecord], field: SortField, descending: bool) {
    let name = field.field();
    if descending {
        records.sort_by_cached_key(|r| Reverse(r.get(name).to_lowercase()));
    } else {
        records.sort_by_cached_key(|r| r.get(name).to_lowercase());
    }
}

/// Keep the first `n` records.
#[must_use]
pub fn limit(mut records: Vec<ContainerRecord>, n: usize) -> Vec<ContainerRecord> {
    records.truncate(n);
    records
}

/// Filter, sort and limit settings for one listing.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Tokens every record must satisfy.
    pub filters: Vec<FilterToken>,
    /// Sort column.
    pub sort_by: Option<SortField>,
    /// Sort descending.
    pub descending: bool,
    /// Maximum number of records.
    pub limit: Option<usize>,
}

impl Query {
    /// Apply filter, sort and limit in that order.
    #[must_use]
    pub fn apply(&self, records: Vec<ContainerRecord>) -> Vec<ContainerRecord> {
        let before = records.len();
        let mut records = if self.filters.is_empty() {
            records
        } else {
            apply_filters(records, &self.filters)
        };

        if let Some(field) = self.sort_by {
            sort_records(&mut records, field, self.descending);
        }

        if let Some(n) = self.limit {
            records = limit(records, n);
        }

        tracing::debug!(before, after = records.len(), "Query applied");
        records
    }
}
