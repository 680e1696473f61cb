//! Generate xorm-tagged Go models from an existing database schema.
//!
//! `oxide-reverse` takes the schema of an existing database, as produced by
//! an introspection step and saved as JSON, and writes one Go struct per
//! table. Every field carries the struct tag computed by
//! [`oxide_reverse_core::format_tag`], so the generated models map back onto
//! the same columns, keys and indexes.
//!
//! # Architecture
//!
//! - **Loader** - Reads the JSON schema document into [`Table`]s
//! - **Render** - Builds the Go source: package, imports, structs
//! - **Writer** - Writes one file per table, or a single file
//! - **Config** - Dialect, naming and tag switches for a run
//!
//! # CLI Usage
//!
//! ```bash
//! # One file per table in ./models, MySQL comments inline
//! oxide-reverse --schema schema.json --output-dir models
//!
//! # PostgreSQL schema, json tags, everything in models.go
//! oxide-reverse -s schema.json --dialect postgres --json --single-file models.go
//! ```

use std::path::PathBuf;

use oxide_reverse_core::Table;
use tracing::info;

use crate::config::ReverseConfig;

pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod writer;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{Dialect, MapperKind, ReverseConfig};
    pub use crate::error::{Result, ReverseError};
    pub use crate::loader::{SchemaDocument, load_tables};
    pub use crate::render::{RenderContext, render_go_file};
    pub use crate::writer::write_output;
}

/// Loads the schema named by `config` and writes the generated models.
///
/// # Errors
///
/// Fails if the schema cannot be loaded or the output cannot be written.
pub fn run(config: &ReverseConfig) -> error::Result<Vec<PathBuf>> {
    info!(schema = %config.schema.display(), "Reading schema");
    let tables: Vec<Table> = loader::load_tables(&config.schema)?;
    writer::write_output(config, &tables)
}
