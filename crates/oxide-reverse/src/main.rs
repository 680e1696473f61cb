//! oxide-reverse CLI
//!
//! Command-line tool for generating Go models from a database schema.

use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use oxide_reverse::prelude::*;

/// Generate xorm-tagged Go models from an existing database schema.
#[derive(Parser)]
#[command(name = "oxide-reverse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON schema document produced by introspection.
    #[arg(short, long, env = "OXIDE_REVERSE_SCHEMA")]
    schema: PathBuf,

    /// Directory the generated files are written to.
    #[arg(short, long, default_value = "models")]
    output_dir: PathBuf,

    /// Go package name of the generated files.
    #[arg(short, long, default_value = "models")]
    package: String,

    /// Database the schema was read from.
    #[arg(short, long, value_enum, default_value_t = Dialect::Mysql)]
    dialect: Dialect,

    /// Naming convention for struct and field names.
    #[arg(short, long, value_enum, default_value_t = MapperKind::Gonic)]
    mapper: MapperKind,

    /// Table-name prefix to strip from struct names.
    #[arg(long)]
    prefix: Option<String>,

    /// Add `json` tags.
    #[arg(long)]
    json: bool,

    /// Add `comment` tags.
    #[arg(long)]
    comment: bool,

    /// Write every struct into this file instead of one file per table.
    #[arg(long)]
    single_file: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> ReverseConfig {
        ReverseConfig {
            schema: self.schema,
            output_dir: self.output_dir,
            package: self.package,
            dialect: self.dialect,
            mapper: self.mapper,
            prefix: self.prefix,
            json: self.json,
            comment: self.comment,
            single_file: self.single_file,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.into_config();
    let written = oxide_reverse::run(&config)?;

    for path in &written {
        info!("Created {}", path.display());
    }

    Ok(())
}
