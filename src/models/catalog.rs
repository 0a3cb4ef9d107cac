//! Type catalog: type name to the properties it accepts

use serde::{Deserialize, Serialize};

use super::config::CatalogLayout;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub type_name: String,

    /// Comma-joined property list as stored in the catalog, usually
    /// IRI-prefixed (`http://schema.org/name,http://schema.org/url`)
    pub raw_properties: String,
}

impl CatalogEntry {
    pub fn new(type_name: impl Into<String>, raw_properties: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            raw_properties: raw_properties.into(),
        }
    }

    /// Bare property names in catalog order, with `prefix` stripped
    pub fn properties(&self, prefix: &str) -> Vec<String> {
        self.raw_properties
            .split(',')
            .map(str::trim)
            .map(|token| {
                if prefix.is_empty() {
                    token
                } else {
                    token.strip_prefix(prefix).unwrap_or(token)
                }
            })
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Read-only lookup table owned by the catalog sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCatalog {
    entries: Vec<CatalogEntry>,
}

impl TypeCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Build a catalog from raw records, skipping `layout.header_rows` and
    /// any record without a type name
    pub fn from_records(records: &[Vec<String>], layout: &CatalogLayout) -> Self {
        let entries = records
            .iter()
            .skip(layout.header_rows)
            .filter_map(|record| {
                let type_name = record.get(layout.type_column.index())?.trim();
                if type_name.is_empty() {
                    return None;
                }
                let raw_properties = record
                    .get(layout.properties_column.index())
                    .cloned()
                    .unwrap_or_default();
                Some(CatalogEntry::new(type_name, raw_properties))
            })
            .collect();

        Self { entries }
    }

    /// First entry whose type name matches exactly
    pub fn lookup(&self, type_name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.type_name == type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
