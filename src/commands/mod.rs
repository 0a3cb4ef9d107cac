mod compile;
mod inspect;
mod resolve;

pub use compile::compile_command;
pub use inspect::{InspectType, inspect_command};
pub use resolve::{ResolveArgs, resolve_command};

use anyhow::Result;
use std::path::Path;

use ldsheet::loader::{ConfigLoader, CsvFile, load_catalog, load_table};
use ldsheet::models::{Config, Table, TypeCatalog};

/// Load the project config from the working directory, layering `config_path` on top
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let mut loader = ConfigLoader::new(std::env::current_dir()?);
    if let Some(path) = config_path {
        loader = loader.with_config_file(path);
    }

    match loader.load() {
        Ok(config) => Ok(config),
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            anyhow::bail!("Configuration could not be loaded");
        }
    }
}

fn read_table(path: &Path, config: &Config) -> Result<Table> {
    match load_table(&CsvFile::new(path), &config.layout) {
        Ok(table) => Ok(table),
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            anyhow::bail!("Schema table could not be read");
        }
    }
}

fn read_catalog(path: &Path, config: &Config) -> Result<TypeCatalog> {
    match load_catalog(&CsvFile::new(path), &config.catalog) {
        Ok(catalog) => Ok(catalog),
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            anyhow::bail!("Type catalog could not be read");
        }
    }
}
