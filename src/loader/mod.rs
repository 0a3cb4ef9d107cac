//! Loading of config files, schema tables and type catalogs

pub mod config_loader;
pub mod merger;
pub mod table_source;

pub use config_loader::ConfigLoader;
pub use table_source::{CsvFile, TableSource, load_catalog, load_table, parse_csv};
