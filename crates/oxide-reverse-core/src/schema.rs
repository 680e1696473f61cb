//! Schema metadata types.
//!
//! These types describe an existing database table as reported by schema
//! introspection. They are read-only inputs to the tag formatter and the
//! import resolver, and deserialize from the JSON documents the reverse tool
//! consumes.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// SQL type of a column, with its optional length/precision pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SqlType {
    /// Type name as reported by the database (e.g. `VARCHAR`, `DECIMAL`).
    pub name: String,
    /// Primary length, or precision for decimal types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Secondary length, or scale for decimal types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length2: Option<u32>,
}

impl SqlType {
    /// Creates a type without length qualifiers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length: None,
            length2: None,
        }
    }

    /// Sets the primary length.
    #[must_use]
    pub const fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the precision and scale.
    #[must_use]
    pub const fn with_precision(mut self, precision: u32, scale: u32) -> Self {
        self.length = Some(precision);
        self.length2 = Some(scale);
        self
    }
}

/// Whether an index enforces uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexType {
    /// UNIQUE index.
    Unique,
    /// Plain, non-unique index.
    #[default]
    Index,
}

impl IndexType {
    /// Returns the tag keyword for this index type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Unique => "unique",
            Self::Index => "index",
        }
    }
}

/// A named index of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Index name.
    pub name: String,
    /// Unique or plain.
    #[serde(rename = "type", default)]
    pub index_type: IndexType,
    /// Names of the indexed columns.
    #[serde(default)]
    pub columns: Vec<String>,
}

impl Index {
    /// Creates an index with no columns yet.
    #[must_use]
    pub fn new(name: impl Into<String>, index_type: IndexType) -> Self {
        Self {
            name: name.into(),
            index_type,
            columns: Vec::new(),
        }
    }

    /// Adds a participating column.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(name.into());
        self
    }

    /// Returns whether the index spans more than one column.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.columns.len() > 1
    }
}

const fn default_nullable() -> bool {
    true
}

/// A column of an existing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// SQL type.
    #[serde(rename = "type")]
    pub sql_type: SqlType,
    /// Allowed values of an ENUM column.
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub enum_options: HashSet<String>,
    /// Allowed values of a SET column.
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub set_options: HashSet<String>,
    /// Part of the primary key.
    #[serde(default)]
    pub primary_key: bool,
    /// Auto-incrementing.
    #[serde(default)]
    pub auto_increment: bool,
    /// Accepts NULL.
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    /// Default value literal; empty when the column has none.
    #[serde(default)]
    pub default: String,
    /// Filled with the insert time.
    #[serde(default)]
    pub created: bool,
    /// Filled with the last update time.
    #[serde(default)]
    pub updated: bool,
    /// Column comment.
    #[serde(default)]
    pub comment: String,
    /// Names of the table indexes this column participates in.
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub indexes: HashSet<String>,
}

impl Column {
    /// Creates a nullable column with no constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            enum_options: HashSet::new(),
            set_options: HashSet::new(),
            primary_key: false,
            auto_increment: false,
            nullable: true,
            default: String::new(),
            created: false,
            updated: false,
            comment: String::new(),
            indexes: HashSet::new(),
        }
    }

    /// Marks the column as part of the primary key.
    ///
    /// Unlike a schema builder, this does not touch nullability: the tag
    /// formatter must see exactly what introspection reported.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Marks the column as auto-incrementing.
    #[must_use]
    pub const fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Marks the column as NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets the default value literal.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self
    }

    /// Marks the column as the creation timestamp.
    #[must_use]
    pub const fn created(mut self) -> Self {
        self.created = true;
        self
    }

    /// Marks the column as the update timestamp.
    #[must_use]
    pub const fn updated(mut self) -> Self {
        self.updated = true;
        self
    }

    /// Sets the column comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Sets the allowed ENUM values.
    #[must_use]
    pub fn enum_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the allowed SET values.
    #[must_use]
    pub fn set_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Returns whether the column name is the optimistic-lock version column.
    #[must_use]
    pub fn is_version(&self) -> bool {
        self.name.eq_ignore_ascii_case("version")
    }
}

/// A table of an existing database.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Table comment.
    #[serde(default)]
    pub comment: String,
    /// Columns in declaration order.
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Indexes keyed by name.
    #[serde(default)]
    pub indexes: HashMap<String, Index>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the table comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Adds a column.
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Adds an index and records its name on every participating column.
    ///
    /// Add the columns first: names that do not match a column are kept on
    /// the index but cannot be linked back.
    #[must_use]
    pub fn index(mut self, index: Index) -> Self {
        for column in &mut self.columns {
            if index.columns.iter().any(|name| *name == column.name) {
                column.indexes.insert(index.name.clone());
            }
        }
        self.indexes.insert(index.name.clone(), index);
        self
    }

    /// Looks up a column by name, ignoring ASCII case.
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Returns the primary key column names in declaration order.
    pub fn primary_keys(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Table {
        Table::new("user")
            .column(
                Column::new("id", SqlType::new("BIGINT").with_length(20))
                    .primary_key()
                    .auto_increment()
                    .not_null(),
            )
            .column(Column::new("email", SqlType::new("VARCHAR").with_length(255)).not_null())
            .column(Column::new("org_id", SqlType::new("INT")))
            .index(Index::new("UQE_user_email", IndexType::Unique).column("email"))
            .index(
                Index::new("IDX_user_org", IndexType::Index)
                    .column("org_id")
                    .column("email"),
            )
    }

    #[test]
    fn test_column_builder() {
        let col = Column::new("id", SqlType::new("BIGINT"))
            .primary_key()
            .auto_increment();

        assert!(col.primary_key);
        assert!(col.auto_increment);
        // Nullability is reported separately from the primary key flag.
        assert!(col.nullable);
    }

    #[test]
    fn test_table_index_links_columns() {
        let table = users();
        let email = table.get_column("email").unwrap();
        assert!(email.indexes.contains("UQE_user_email"));
        assert!(email.indexes.contains("IDX_user_org"));
        assert_eq!(table.get_column("org_id").unwrap().indexes.len(), 1);
        assert!(table.get_column("id").unwrap().indexes.is_empty());
        assert!(table.indexes["IDX_user_org"].is_composite());
        assert!(!table.indexes["UQE_user_email"].is_composite());
    }

    #[test]
    fn test_get_column_ignores_case() {
        let table = users();
        assert_eq!(table.get_column("EMAIL").unwrap().name, "email");
        assert!(table.get_column("missing").is_none());
    }

    #[test]
    fn test_primary_keys() {
        assert_eq!(users().primary_keys().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn test_version_column() {
        assert!(Column::new("Version", SqlType::new("INT")).is_version());
        assert!(Column::new("VERSION", SqlType::new("INT")).is_version());
        assert!(!Column::new("versions", SqlType::new("INT")).is_version());
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{
            "name": "post",
            "columns": [
                {"name": "id", "type": {"name": "INT", "length": 11}, "primary_key": true},
                {"name": "state", "type": {"name": "ENUM"}, "enum_options": ["b", "a"]}
            ],
            "indexes": {
                "IDX_post_state": {"name": "IDX_post_state", "type": "index", "columns": ["state"]}
            }
        }"#;
        let table: Table = serde_json::from_str(json).unwrap();

        let id = &table.columns[0];
        assert_eq!(id.sql_type.length, Some(11));
        assert_eq!(id.sql_type.length2, None);
        assert!(id.primary_key);
        assert!(id.nullable);
        assert!(id.default.is_empty());

        let state = &table.columns[1];
        assert_eq!(state.enum_options.len(), 2);
        assert_eq!(
            table.indexes["IDX_post_state"].index_type,
            IndexType::Index
        );
    }

    #[test]
    fn test_index_type_keyword() {
        assert_eq!(IndexType::Unique.keyword(), "unique");
        assert_eq!(IndexType::Index.keyword(), "index");
    }
}
