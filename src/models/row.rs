//! Row and table snapshots read from a schema sheet

use serde::{Deserialize, Serialize};

use super::config::{Column, ColumnLayout};

/// One data row of a schema sheet.
///
/// Empty and whitespace-only cells are stored as `None`, so "empty" and
/// "absent" are the same thing everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    property: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

fn cell(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

impl Row {
    pub fn new(id: &str, type_name: &str, property: &str, value: &str) -> Self {
        Self {
            id: cell(id),
            type_name: cell(type_name),
            property: cell(property),
            value: cell(value),
        }
    }

    /// Pick the four cells out of a raw record; missing cells are empty
    pub fn from_record(record: &[String], layout: &ColumnLayout) -> Self {
        let at = |column: Column| record.get(column.index()).and_then(|raw| cell(raw));

        Self {
            id: at(layout.id),
            type_name: at(layout.type_name),
            property: at(layout.property),
            value: at(layout.value),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().and_then(non_empty)
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref().and_then(non_empty)
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref().and_then(non_empty)
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref().and_then(non_empty)
    }

    /// A `#`-prefixed value points at another node by `@id`
    pub fn is_reference(&self) -> bool {
        self.value().is_some_and(|value| value.starts_with('#'))
    }

    pub fn is_blank(&self) -> bool {
        self.id().is_none()
            && self.type_name().is_none()
            && self.property().is_none()
            && self.value().is_none()
    }
}

// Deserialized rows bypass `cell`, so accessors filter again
fn non_empty(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}

/// Ordered data rows of a sheet. Row numbers are 1-based; row 0 is the
/// header and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Build a table from raw records, the first of which is the header
    pub fn from_records(records: &[Vec<String>], layout: &ColumnLayout) -> Self {
        let rows = records
            .iter()
            .skip(1)
            .map(|record| Row::from_record(record, layout))
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by its 1-based sheet number
    pub fn get(&self, number: usize) -> Option<&Row> {
        number.checked_sub(1).and_then(|index| self.rows.get(index))
    }

    /// Rows paired with their 1-based sheet numbers
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows.iter().enumerate().map(|(index, row)| (index + 1, row))
    }

    /// Snapshot of the Type column; entry `i` belongs to row `i + 1`
    pub fn type_column(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.type_name().unwrap_or_default().to_string())
            .collect()
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
