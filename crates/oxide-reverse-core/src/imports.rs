//! Import resolution for generated files.

use std::collections::BTreeMap;

use crate::schema::Table;
use crate::types::{TypeMapping, type_string};

/// Collects the packages the generated file must import.
///
/// Every column of every table is mapped to its generated type and the
/// mapping's [`TypeMapping::import_path`] decides whether that type needs an
/// import. The result maps each path to itself and is sorted by path.
#[must_use]
pub fn resolve_imports(tables: &[Table], mapping: &impl TypeMapping) -> BTreeMap<String, String> {
    let mut imports = BTreeMap::new();
    for table in tables {
        for column in &table.columns {
            let type_name = type_string(mapping, column);
            if let Some(path) = mapping.import_path(&type_name) {
                imports.entry(path.clone()).or_insert(path);
            }
        }
    }
    imports
}
