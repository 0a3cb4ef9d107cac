use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use ldsheet::Compiler;
use ldsheet::models::OutputFormat;

use super::{load_config, read_table};

pub fn compile_command(
    config_path: Option<&Path>,
    table_path: &Path,
    format: Option<OutputFormat>,
    output: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let table = read_table(table_path, &config)?;

    // Diagnostics are logged as warnings while compiling
    let compilation = Compiler::new(&config).compile(&table);
    let rendered = compilation
        .render(format.unwrap_or(config.output.format))
        .context("Failed to serialize JSON-LD")?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {} block(s) to {}",
                "✓".green(),
                compilation.block_count(),
                path.display()
            );
        }
        None => print!("{rendered}"),
    }

    if !compilation.diagnostics().is_empty() {
        eprintln!(
            "{}",
            format!("{} row(s) need attention", compilation.diagnostics().len()).yellow()
        );
    }

    Ok(())
}
