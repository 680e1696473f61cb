//! Struct tag generation.
//!
//! [`format_tag`] turns one column of a table into the raw-string struct tag
//! placed after the generated field, e.g.
//!
//! ```text
//! `xorm:"BIGINT(20)           pk   autoincr   ..."`
//! ```
//!
//! The structural part is a run of fixed-width, left-justified segments so
//! that tags of neighbouring fields line up. Every unordered input (enum and
//! set options, index membership) is sorted before it is written, so the
//! output only depends on the metadata, not on hash iteration order.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::schema::{Column, Table};

const TYPE_WIDTH: usize = 20;
const PK_WIDTH: usize = 4;
const FLAG_WIDTH: usize = 10;
const DEFAULT_WIDTH: usize = 20;
const INDEX_WIDTH: usize = 20;
const COMMENT_WIDTH: usize = 20;

/// Marker in a default literal that identifies a PostgreSQL
/// `'...'::character varying` cast. Such defaults are emitted as `''`.
const VARCHAR_CAST_MARKER: &str = "character varying";

/// Switches controlling which sub-tags are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagOptions {
    /// Emit a `json:"<column>"` sub-tag.
    pub json: bool,
    /// Emit a `comment:"<text>"` sub-tag.
    pub comment: bool,
    /// The source dialect supports column comments, so the structural tag
    /// carries an inline `comment('<text>')` segment.
    pub supports_comment: bool,
}

impl TagOptions {
    /// Creates options with every switch off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            json: false,
            comment: false,
            supports_comment: false,
        }
    }

    /// Enables the `json` sub-tag.
    #[must_use]
    pub const fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Enables the `comment` sub-tag.
    #[must_use]
    pub const fn with_comment(mut self) -> Self {
        self.comment = true;
        self
    }

    /// Enables the inline comment segment.
    #[must_use]
    pub const fn with_comment_support(mut self) -> Self {
        self.supports_comment = true;
        self
    }
}

/// Formats the struct tag for `column` of `table`.
///
/// `column` must belong to `table`; index names are resolved through
/// `table.indexes`. Returns an empty string when no sub-tag is produced.
#[must_use]
pub fn format_tag(table: &Table, column: &Column, options: &TagOptions) -> String {
    let segments = structural_segments(table, column, options);

    let mut tags = Vec::with_capacity(3);
    if options.json {
        tags.push(format!("json:\"{}\"  ", column.name));
    }
    if !segments.is_empty() {
        tags.push(format!("xorm:\"{}\"", segments.join(" ")));
    }
    if options.comment {
        tags.push(format!("  comment:\"{}\"", column.comment));
    }

    if tags.is_empty() {
        String::new()
    } else {
        format!("`{}`", tags.join(" "))
    }
}

/// Builds the padded segments of the `xorm` sub-tag, in output order.
pub(crate) fn structural_segments(
    table: &Table,
    column: &Column,
    options: &TagOptions,
) -> Vec<String> {
    let mut res = Vec::with_capacity(10);

    res.push(pad(&type_segment(column), TYPE_WIDTH));
    res.push(pad(marker(column.primary_key, "pk"), PK_WIDTH));
    res.push(pad(marker(column.auto_increment, "autoincr"), FLAG_WIDTH));
    res.push(pad(marker(column.is_version(), "version"), FLAG_WIDTH));
    // primary keys are implicitly NOT NULL
    res.push(pad(
        marker(!column.nullable && !column.primary_key, "not null"),
        FLAG_WIDTH,
    ));
    res.push(pad(&default_segment(column), DEFAULT_WIDTH));
    res.push(pad(marker(column.created, "created"), FLAG_WIDTH));
    res.push(pad(marker(column.updated, "updated"), FLAG_WIDTH));

    let indexes = index_segments(table, column);
    if indexes.is_empty() {
        res.push(pad(" ", INDEX_WIDTH));
    } else {
        res.extend(indexes.iter().map(|s| pad(s, INDEX_WIDTH)));
    }

    if options.supports_comment && !column.comment.is_empty() {
        let comment = format!("      comment('{}')", column.comment);
        res.push(format!("{comment:>COMMENT_WIDTH$}"));
    }

    res
}

/// `NAME`, `NAME(len)`, `NAME(len,len2)` or `NAME('a','b',...)`.
fn type_segment(column: &Column) -> String {
    let sql_type = &column.sql_type;
    let mut out = sql_type.name.clone();
    match (sql_type.length, sql_type.length2) {
        (Some(length), Some(length2)) => out.push_str(&format!("({length},{length2})")),
        (Some(length), None) => out.push_str(&format!("({length})")),
        (None, _) => {
            if !column.enum_options.is_empty() {
                out.push_str(&quoted_options(&column.enum_options));
            } else if !column.set_options.is_empty() {
                out.push_str(&quoted_options(&column.set_options));
            }
        }
    }
    out
}

/// Sorted, single-quoted, comma separated, in parentheses.
fn quoted_options<'a>(options: impl IntoIterator<Item = &'a String>) -> String {
    let mut sorted: Vec<&str> = options.into_iter().map(String::as_str).collect();
    sorted.sort_unstable();
    let quoted: Vec<String> = sorted.iter().map(|o| format!("'{o}'")).collect();
    format!("({})", quoted.join(","))
}

fn default_segment(column: &Column) -> String {
    if column.default.is_empty() {
        return String::from(" ");
    }
    if column.default.contains(VARCHAR_CAST_MARKER) {
        String::from("default ''")
    } else {
        format!("default {}", column.default)
    }
}

/// One `unique`/`index` entry per index the column belongs to, ordered by
/// index name. Composite indexes carry their name.
fn index_segments(table: &Table, column: &Column) -> Vec<String> {
    let mut names: Vec<&str> = column.indexes.iter().map(String::as_str).collect();
    names.sort_unstable();

    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let Some(index) = table.indexes.get(name) else {
            warn!(
                table = %table.name,
                column = %column.name,
                index = %name,
                "Column references an unknown index, skipping"
            );
            continue;
        };
        let mut segment = String::from(index.index_type.keyword());
        if index.is_composite() {
            segment.push('(');
            segment.push_str(&index.name);
            segment.push(')');
        }
        out.push(segment);
    }
    out
}

const fn marker(set: bool, text: &'static str) -> &'static str {
    if set { text } else { " " }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
