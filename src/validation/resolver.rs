use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use super::error::ResolveError;
use crate::models::{Config, EditEvent, TypeCatalog, ValidationTarget};

/// Why an edit produced no constraint. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The cell was cleared
    EmptyValue,
    /// A paste or fill touched more than one cell
    MultiCellEdit,
    /// The edit was outside the Type column
    OtherColumn,
    HeaderRow,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EmptyValue => "the Type cell was cleared",
            Self::MultiCellEdit => "more than one cell changed",
            Self::OtherColumn => "the edit is not in the Type column",
            Self::HeaderRow => "the header row is never constrained",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Apply(ValidationTarget),
    Ignored { reason: IgnoreReason },
}

impl Resolution {
    pub fn target(&self) -> Option<&ValidationTarget> {
        match self {
            Self::Apply(target) => Some(target),
            Self::Ignored { .. } => None,
        }
    }
}

/// Computes the Property dropdown for an edited Type cell.
///
/// Stateless: every call works only from the edit, the catalog and the Type
/// column snapshot it is given.
pub struct RangeResolver<'a> {
    config: &'a Config,
}

impl<'a> RangeResolver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// `type_column[i]` is the Type cell of row `i + 1`.
    pub fn resolve(
        &self,
        edit: &EditEvent,
        catalog: &TypeCatalog,
        type_column: &[String],
    ) -> Result<Resolution, ResolveError> {
        if let Some(reason) = self.ignore_reason(edit) {
            debug!("Ignoring edit at row {}: {reason}", edit.row);
            return Ok(Resolution::Ignored { reason });
        }

        let entry = catalog
            .lookup(&edit.new_value)
            .ok_or_else(|| ResolveError::UnknownType {
                type_name: edit.new_value.clone(),
            })?;

        let target = ValidationTarget {
            range_start_row: edit.row,
            row_count: span_length(edit.row, type_column),
            column: self.config.layout.property,
            allowed_values: entry.properties(&self.config.catalog.prefix),
        };

        info!(
            "{} allows {} properties on rows {}-{}",
            entry.type_name,
            target.allowed_values.len(),
            target.range_start_row,
            target.range_end_row()
        );
        Ok(Resolution::Apply(target))
    }

    fn ignore_reason(&self, edit: &EditEvent) -> Option<IgnoreReason> {
        if !edit.is_single_cell() {
            Some(IgnoreReason::MultiCellEdit)
        } else if edit.column != self.config.layout.type_name {
            Some(IgnoreReason::OtherColumn)
        } else if edit.row == 0 {
            Some(IgnoreReason::HeaderRow)
        } else if edit.new_value.trim().is_empty() {
            Some(IgnoreReason::EmptyValue)
        } else {
            None
        }
    }
}

/// Number of rows from `row` up to, not including, the next row with a
/// Type. With no later Type the span runs through the last row.
pub fn span_length(row: usize, type_column: &[String]) -> usize {
    let last_row = type_column.len().max(row);
    let has_type = |number: usize| {
        type_column
            .get(number - 1)
            .is_some_and(|value| !value.trim().is_empty())
    };

    match (row + 1..=last_row).find(|&number| has_type(number)) {
        Some(next) => next - row,
        None => last_row - row + 1,
    }
}
