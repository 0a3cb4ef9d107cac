pub mod catalog;
pub mod config;
pub mod edit;
pub mod row;

// Re-export commonly used types
pub use catalog::{CatalogEntry, TypeCatalog};
pub use config::{
    CatalogLayout, Column, ColumnLayout, ColumnRef, Config, OutputConfig, OutputFormat,
    ReferenceConfig,
};
pub use edit::{EditEvent, ValidationTarget};
pub use row::{Row, Table};
