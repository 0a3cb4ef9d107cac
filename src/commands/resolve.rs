use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use ldsheet::error::ConfigError;
use ldsheet::models::{Column, ColumnRef, EditEvent, Row};
use ldsheet::{RangeResolver, Resolution};

use super::{load_config, read_catalog, read_table};

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Schema table CSV (first record is the header)
    pub table: PathBuf,

    /// Type catalog CSV
    #[arg(long)]
    pub catalog: PathBuf,

    /// Data row of the edited cell; row 1 is the first row under the header
    #[arg(long)]
    pub row: usize,

    /// New cell value [default: the table's Type at --row]
    #[arg(long)]
    pub value: Option<String>,

    /// Edited column, as a letter or zero-based index [default: the Type column]
    #[arg(long, value_parser = parse_column)]
    pub column: Option<Column>,

    /// Number of rows the edit touched
    #[arg(long, default_value_t = 1)]
    pub rows: usize,

    /// Number of columns the edit touched
    #[arg(long, default_value_t = 1)]
    pub columns: usize,
}

fn parse_column(value: &str) -> Result<Column, ConfigError> {
    Column::try_from(ColumnRef::Letter(value.to_string()))
}

pub fn resolve_command(config_path: Option<&Path>, args: ResolveArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let table = read_table(&args.table, &config)?;
    let catalog = read_catalog(&args.catalog, &config)?;

    let new_value = match args.value {
        Some(value) => value,
        None => table
            .get(args.row)
            .and_then(Row::type_name)
            .unwrap_or_default()
            .to_string(),
    };

    let edit = EditEvent {
        row: args.row,
        column: args.column.unwrap_or(config.layout.type_name),
        new_value,
        affected_rows: args.rows,
        affected_columns: args.columns,
    };

    let resolver = RangeResolver::new(&config);
    let resolution = match resolver.resolve(&edit, &catalog, &table.type_column()) {
        Ok(resolution) => resolution,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            anyhow::bail!("No dropdown could be resolved for row {}", args.row);
        }
    };

    match &resolution {
        Resolution::Apply(target) => eprintln!(
            "{} {} allowed value(s) on {}",
            "✓".green(),
            target.allowed_values.len(),
            target.a1_range()
        ),
        Resolution::Ignored { reason } => eprintln!("{} {reason}", "skipped:".yellow()),
    }

    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(())
}
