//! Markup contract configuration for server-rendered listing tables.

use serde::{Deserialize, Serialize};

use crate::{column::SortKey, error::SortError};

/// Container attribute that may carry a JSON [`MarkupConfig`] override.
pub const CONFIG_ATTR: &str = "data-sort-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Element ids, selectors, and attribute names the sorter reads from page markup.
pub struct MarkupConfig {
    /// Id of the table container element.
    pub container_id: String,
    /// Selector (relative to the container) matching sortable header cells.
    pub header_selector: String,
    /// Selector (relative to the container) matching the body region.
    pub body_selector: String,
    /// Header attribute naming the column's sort key.
    pub sort_key_attr: String,
    /// Header attribute holding the current direction (`asc`/`desc`, absent when inactive).
    pub direction_attr: String,
    /// Prefix of the per-row value attributes; the key name is appended (`data-size`).
    pub row_value_attr_prefix: String,
    /// Class marking the parent-directory row.
    pub pinned_class: String,
    /// Column sorted ascending once the sorter attaches.
    pub default_key: SortKey,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            container_id: "fileTable".to_string(),
            header_selector: "thead th[data-sort-by]".to_string(),
            body_selector: "tbody".to_string(),
            sort_key_attr: "data-sort-by".to_string(),
            direction_attr: "data-sort-direction".to_string(),
            row_value_attr_prefix: "data-".to_string(),
            pinned_class: "parent-dir".to_string(),
            default_key: SortKey::Name,
        }
    }
}

impl MarkupConfig {
    /// Parses a JSON config; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidConfig`] when the JSON is malformed or a field is empty.
    pub fn from_json(raw: &str) -> Result<Self, SortError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| SortError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configs with empty ids, selectors, or attribute names.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidConfig`] naming the first empty field.
    pub fn validate(&self) -> Result<(), SortError> {
        let fields = [
            ("container_id", &self.container_id),
            ("header_selector", &self.header_selector),
            ("body_selector", &self.body_selector),
            ("sort_key_attr", &self.sort_key_attr),
            ("direction_attr", &self.direction_attr),
            ("pinned_class", &self.pinned_class),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(SortError::InvalidConfig(format!("`{field}` is empty"))),
            None => Ok(()),
        }
    }

    /// Row attribute carrying the value for `key`.
    pub fn row_value_attr(&self, key: SortKey) -> String {
        format!("{}{}", self.row_value_attr_prefix, key.as_str())
    }
}
