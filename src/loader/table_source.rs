//! Sources of raw spreadsheet records

use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::LoadError;
use crate::models::{CatalogLayout, ColumnLayout, Table, TypeCatalog};

/// Anything that can produce a sheet snapshot as raw string records.
///
/// The first record is whatever the sheet holds in its first row; callers
/// decide whether it is a header.
pub trait TableSource {
    fn records(&self) -> Result<Vec<Vec<String>>, LoadError>;
}

impl TableSource for Vec<Vec<String>> {
    fn records(&self) -> Result<Vec<Vec<String>>, LoadError> {
        Ok(self.clone())
    }
}

/// A CSV file on disk
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for CsvFile {
    fn records(&self) -> Result<Vec<Vec<String>>, LoadError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let records = parse_csv(&content, &self.path)?;
        debug!(
            "Read {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Parse CSV text into records without interpreting any header.
///
/// Records may have different lengths; cells are not trimmed.
pub fn parse_csv(content: &str, origin: &Path) -> Result<Vec<Vec<String>>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    reader
        .records()
        .map(|result| {
            result
                .map(|record| record.iter().map(str::to_string).collect())
                .map_err(|error| LoadError::from_csv_error(&error, content, origin))
        })
        .collect()
}

/// Read a schema table; the first record is the header row
pub fn load_table(source: &dyn TableSource, layout: &ColumnLayout) -> Result<Table, LoadError> {
    let records = source.records()?;
    Ok(Table::from_records(&records, layout))
}

/// Read a type catalog
pub fn load_catalog(
    source: &dyn TableSource,
    layout: &CatalogLayout,
) -> Result<TypeCatalog, LoadError> {
    let records = source.records()?;
    Ok(TypeCatalog::from_records(&records, layout))
}
