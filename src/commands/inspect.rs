use anyhow::Result;
use std::path::{Path, PathBuf};

use super::{load_config, read_catalog, read_table};

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum InspectType {
    Config,
    Rows,
    Catalog,
}

pub fn inspect_command(
    config_path: Option<&Path>,
    object_type: InspectType,
    path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path)?;

    let json = match object_type {
        InspectType::Config => serde_json::to_string_pretty(&config)?,
        InspectType::Rows => {
            let path = path.ok_or_else(|| anyhow::anyhow!("Path required for rows inspection"))?;
            serde_json::to_string_pretty(&read_table(&path, &config)?)?
        }
        InspectType::Catalog => {
            let path =
                path.ok_or_else(|| anyhow::anyhow!("Path required for catalog inspection"))?;
            serde_json::to_string_pretty(&read_catalog(&path, &config)?)?
        }
    };

    println!("{json}");
    Ok(())
}
