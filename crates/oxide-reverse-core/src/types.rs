//! SQL to Go type mapping.
//!
//! Generated structs need a Go type per column. The mapping is a trait so
//! callers can plug their own table in; [`GoTypeMapping`] is the default.

use crate::schema::Column;

/// Go spelling of a byte slice. Mappings that report `[]uint8` are
/// normalized to this by [`type_string`].
pub const BYTE_SLICE: &str = "[]byte";

const BYTE_SLICE_ALIASES: &[&str] = &["[]uint8"];

/// Maps a column to the name of its type in generated code.
pub trait TypeMapping {
    /// Returns the generated type name for the column.
    fn type_name(&self, column: &Column) -> String;

    /// Returns the import path a type name requires, if any.
    ///
    /// The default treats `pkg.Type` as requiring `pkg`.
    fn import_path(&self, type_name: &str) -> Option<String> {
        let (package, _) = type_name.trim_start_matches(['*', '[', ']']).split_once('.')?;
        if package.is_empty() {
            None
        } else {
            Some(package.to_string())
        }
    }
}

/// Returns the generated type name for `column`, with every byte-slice
/// spelling reported as [`BYTE_SLICE`].
#[must_use]
pub fn type_string(mapping: &impl TypeMapping, column: &Column) -> String {
    let name = mapping.type_name(column);
    if BYTE_SLICE_ALIASES.contains(&name.as_str()) {
        BYTE_SLICE.to_string()
    } else {
        name
    }
}

/// The default SQL to Go type table.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapping;

impl GoTypeMapping {
    /// Creates the mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps an SQL type name, ignoring case.
    #[must_use]
    pub fn map_sql_type(&self, sql_type: &str) -> &'static str {
        match sql_type.to_ascii_uppercase().as_str() {
            "BIT" | "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "INTEGER" | "SERIAL" => "int",
            "BIGINT" | "BIGSERIAL" => "int64",
            "FLOAT" | "REAL" => "float32",
            "DOUBLE" => "float64",
            "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" | "BYTEA" | "BINARY" | "VARBINARY"
            | "UNIQUEIDENTIFIER" => BYTE_SLICE,
            "BOOL" => "bool",
            "DATETIME" | "DATE" | "TIME" | "TIMESTAMP" | "TIMESTAMPZ" | "SMALLDATETIME"
            | "YEAR" => "time.Time",
            // CHAR/VARCHAR/TEXT/ENUM/SET/UUID/DECIMAL/NUMERIC/MONEY and
            // anything unknown
            _ => "string",
        }
    }
}

impl TypeMapping for GoTypeMapping {
    fn type_name(&self, column: &Column) -> String {
        self.map_sql_type(&column.sql_type.name).to_string()
    }
}
