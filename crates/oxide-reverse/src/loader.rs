//! Schema document loading.
//!
//! Introspection happens elsewhere; this tool reads its result as JSON:
//!
//! ```json
//! {
//!   "tables": [
//!     {
//!       "name": "user",
//!       "columns": [
//!         {"name": "id", "type": {"name": "BIGINT", "length": 20},
//!          "primary_key": true, "auto_increment": true, "nullable": false}
//!       ],
//!       "indexes": {}
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use oxide_reverse_core::Table;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ReverseError};

/// Top-level schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Tables in generation order.
    #[serde(default)]
    pub tables: Vec<Table>,
}

/// Reads the tables of a schema document.
///
/// # Errors
///
/// Fails if the file cannot be read or parsed, or contains no tables.
pub fn load_tables(path: &Path) -> Result<Vec<Table>> {
    let content = fs::read_to_string(path)?;
    let document: SchemaDocument =
        serde_json::from_str(&content).map_err(|source| ReverseError::Schema {
            path: path.to_path_buf(),
            source,
        })?;
    if document.tables.is_empty() {
        return Err(ReverseError::NoTables(path.to_path_buf()));
    }
    debug!(path = %path.display(), tables = document.tables.len(), "Loaded schema");
    Ok(document.tables)
}
