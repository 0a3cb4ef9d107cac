use serde::{Deserialize, Serialize};

use super::config::Column;

/// A user edit reported by the spreadsheet layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditEvent {
    /// 1-based row of the changed cell (row 0 is the header)
    pub row: usize,
    pub column: Column,
    pub new_value: String,
    pub affected_rows: usize,
    pub affected_columns: usize,
}

impl EditEvent {
    /// An edit that touched exactly one cell
    pub fn single(row: usize, column: Column, new_value: impl Into<String>) -> Self {
        Self {
            row,
            column,
            new_value: new_value.into(),
            affected_rows: 1,
            affected_columns: 1,
        }
    }

    pub fn is_single_cell(&self) -> bool {
        self.affected_rows == 1 && self.affected_columns == 1
    }
}

/// A "restrict to list" constraint for the spreadsheet layer to apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationTarget {
    pub range_start_row: usize,
    pub row_count: usize,
    pub column: Column,
    pub allowed_values: Vec<String>,
}

impl ValidationTarget {
    /// Last row covered by the constraint, inclusive
    pub fn range_end_row(&self) -> usize {
        self.range_start_row + self.row_count.saturating_sub(1)
    }

    /// A1 notation for the constrained cells, e.g. `E4:E6`
    pub fn a1_range(&self) -> String {
        format!(
            "{column}{start}:{column}{end}",
            column = self.column,
            start = self.range_start_row + 1,
            end = self.range_end_row() + 1
        )
    }
}
