use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ldsheet::models::OutputFormat;

mod commands;

use commands::{InspectType, ResolveArgs, compile_command, inspect_command, resolve_command};

#[derive(Parser)]
#[command(
    name = "ldsheet",
    about = "Compiles schema sheets into JSON-LD and resolves Type-dependent property dropdowns",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file layered over ./ldsheet.yml and the built-in defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a schema table into JSON-LD blocks
    Compile {
        /// Schema table CSV (first record is the header)
        table: PathBuf,

        /// Output format [default: from config]
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve the Property dropdown for an edited Type cell
    Resolve(ResolveArgs),

    /// Print the effective config, a parsed table, or a parsed catalog as JSON
    Inspect {
        #[arg(value_enum)]
        object_type: InspectType,

        #[arg(help = "CSV file to inspect (required for rows and catalog)")]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Compile {
            table,
            format,
            output,
        } => compile_command(config, &table, format, output.as_deref())?,
        Commands::Resolve(args) => resolve_command(config, args)?,
        Commands::Inspect { object_type, path } => inspect_command(config, object_type, path)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("ldsheet=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("ldsheet=info"), // -v: info messages
        _ => EnvFilter::new("ldsheet=debug"), // -vv or more: full debug
    };

    // stdout carries the generated documents
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
