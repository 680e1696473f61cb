//! Generation settings.
//!
//! The CLI parses its flags into a [`ReverseConfig`]; nothing downstream
//! reads process-wide state.

use std::path::PathBuf;

use clap::ValueEnum;
use oxide_reverse_core::{
    GonicMapper, NameMapper, PrefixMapper, SameMapper, SnakeMapper, TagOptions,
};

/// Database the schema was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Dialect {
    /// MySQL / MariaDB.
    #[default]
    Mysql,
    /// PostgreSQL.
    Postgres,
    /// SQLite.
    Sqlite,
    /// Microsoft SQL Server.
    Mssql,
}

impl Dialect {
    /// Returns whether the dialect reports column comments that can be
    /// carried inline in the struct tag.
    #[must_use]
    pub const fn supports_comment(self) -> bool {
        matches!(self, Self::Mysql)
    }
}

/// Naming convention for generated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MapperKind {
    /// `user_id` -> `UserId`.
    Snake,
    /// Names are used as-is.
    Same,
    /// `user_id` -> `UserID`.
    #[default]
    Gonic,
}

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct ReverseConfig {
    /// JSON schema document to read.
    pub schema: PathBuf,
    /// Directory the generated files are written to.
    pub output_dir: PathBuf,
    /// Go package name of the generated files.
    pub package: String,
    /// Source database.
    pub dialect: Dialect,
    /// Identifier naming convention.
    pub mapper: MapperKind,
    /// Table-name prefix stripped before mapping struct names.
    pub prefix: Option<String>,
    /// Emit `json` sub-tags.
    pub json: bool,
    /// Emit `comment` sub-tags.
    pub comment: bool,
    /// Write every struct into this file instead of one file per table.
    pub single_file: Option<String>,
}

impl ReverseConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new(schema: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            schema: schema.into(),
            output_dir: output_dir.into(),
            package: String::from("models"),
            dialect: Dialect::default(),
            mapper: MapperKind::default(),
            prefix: None,
            json: false,
            comment: false,
            single_file: None,
        }
    }

    /// Returns the tag switches for this run.
    #[must_use]
    pub const fn tag_options(&self) -> TagOptions {
        TagOptions {
            json: self.json,
            comment: self.comment,
            supports_comment: self.dialect.supports_comment(),
        }
    }

    /// Returns the mapper for column names.
    #[must_use]
    pub fn column_mapper(&self) -> Box<dyn NameMapper> {
        match self.mapper {
            MapperKind::Snake => Box::new(SnakeMapper),
            MapperKind::Same => Box::new(SameMapper),
            MapperKind::Gonic => Box::new(GonicMapper),
        }
    }

    /// Returns the mapper for table names, honouring the prefix.
    #[must_use]
    pub fn table_mapper(&self) -> Box<dyn NameMapper> {
        let inner = self.column_mapper();
        match &self.prefix {
            Some(prefix) => Box::new(PrefixMapper::new(prefix.clone(), inner)),
            None => inner,
        }
    }
}
