//! Writes rendered models to disk.

use std::fs;
use std::path::PathBuf;

use oxide_reverse_core::Table;
use tracing::{debug, info};

use crate::config::ReverseConfig;
use crate::error::{Result, ReverseError};
use crate::render::{RenderContext, render_go_file};

/// Go keywords, which are not valid package names.
const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Returns whether `name` can be used as a Go package name.
#[must_use]
pub fn is_valid_package(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !GO_KEYWORDS.contains(&name)
}

/// Renders `tables` and writes them under `config.output_dir`.
///
/// One `<table>.go` file is written per table unless `config.single_file`
/// names a file that receives every struct. Returns the written paths.
///
/// # Errors
///
/// Fails on an invalid package name or when a file cannot be written.
pub fn write_output(config: &ReverseConfig, tables: &[Table]) -> Result<Vec<PathBuf>> {
    if !is_valid_package(&config.package) {
        return Err(ReverseError::InvalidPackage(config.package.clone()));
    }

    let table_mapper = config.table_mapper();
    let column_mapper = config.column_mapper();
    let ctx = RenderContext {
        package: &config.package,
        table_mapper: table_mapper.as_ref(),
        column_mapper: column_mapper.as_ref(),
        tag_options: config.tag_options(),
    };

    fs::create_dir_all(&config.output_dir)?;

    let mut written = Vec::new();
    match &config.single_file {
        Some(file_name) => {
            let path = config.output_dir.join(go_file_name(file_name));
            fs::write(&path, render_go_file(tables, &ctx))?;
            debug!(path = %path.display(), tables = tables.len(), "Wrote models");
            written.push(path);
        }
        None => {
            for table in tables {
                let path = config.output_dir.join(go_file_name(&table.name));
                fs::write(&path, render_go_file(std::slice::from_ref(table), &ctx))?;
                debug!(path = %path.display(), table = %table.name, "Wrote model");
                written.push(path);
            }
        }
    }

    info!(
        files = written.len(),
        dir = %config.output_dir.display(),
        "Generated models"
    );
    Ok(written)
}

fn go_file_name(name: &str) -> String {
    if name.ends_with(".go") {
        name.to_string()
    } else {
        format!("{name}.go")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_package_names() {
        assert!(is_valid_package("models"));
        assert!(is_valid_package("_gen2"));
        assert!(!is_valid_package(""));
        assert!(!is_valid_package("2models"));
        assert!(!is_valid_package("my-models"));
        assert!(!is_valid_package("type"));
    }

    #[test]
    fn test_go_file_name() {
        assert_eq!(go_file_name("user"), "user.go");
        assert_eq!(go_file_name("models.go"), "models.go");
    }
}
