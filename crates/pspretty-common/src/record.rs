//! Container records as reported by a runtime's `ps` command.
//!
//! A record is a flat map from field name to string value. Runtimes report
//! more fields than the six that are displayed (`Command`, `State`, `Labels`,
//! `Mounts`, ...); all of them are kept so filters can match against any.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PsError, PsResult};

/// Fields shown in tables and exported to CSV/Markdown, in display order.
pub const WELL_KNOWN_FIELDS: [&str; 6] = ["ID", "Names", "Image", "Status", "CreatedAt", "Ports"];

/// One container's reported field set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerRecord {
    fields: BTreeMap<String, String>,
}

impl ContainerRecord {
    /// Parse one line of `ps --format '{{json .}}'` output.
    ///
    /// Non-string values are kept as their compact JSON text and `null`
    /// becomes the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`PsError::Serialization`] if the line is not a JSON object.
    pub fn from_json_line(line: &str) -> PsResult<Self> {
        let value: Value = serde_json::from_str(line)?;
        let Value::Object(map) = value else {
            return Err(PsError::Serialization(format!(
                "expected a JSON object, got `{}`",
                truncate(line, 40)
            )));
        };

        let fields = map
            .into_iter()
            .map(|(name, value)| {
                let text = match value {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (name, text)
            })
            .collect();

        Ok(Self { fields })
    }

    /// Value of `field`, or the empty string when the runtime did not report it.
    #[must_use]
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map_or("", String::as_str)
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The six displayed values, in [`WELL_KNOWN_FIELDS`] order.
    #[must_use]
    pub fn well_known(&self) -> [&str; 6] {
        WELL_KNOWN_FIELDS.map(|field| self.get(field))
    }
}

impl<K, V> FromIterator<(K, V)> for ContainerRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
