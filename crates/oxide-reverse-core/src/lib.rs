//! # oxide-reverse-core
//!
//! Building blocks for generating ORM models from an existing database.
//!
//! This crate provides:
//! - Schema metadata types ([`Table`], [`Column`], [`Index`]) as produced by
//!   introspection
//! - The struct tag formatter that turns a column into its `xorm:"..."` tag
//! - Kind-based comparison functions used by template conditionals
//! - Type mapping, import resolution and identifier mapping for the
//!   generated Go code
//!
//! ## Struct tags
//!
//! ```rust
//! use oxide_reverse_core::{Column, SqlType, Table, TagOptions, format_tag};
//!
//! let table = Table::new("user").column(
//!     Column::new("id", SqlType::new("BIGINT").with_length(20))
//!         .primary_key()
//!         .auto_increment()
//!         .not_null(),
//! );
//! let tag = format_tag(&table, &table.columns[0], &TagOptions::new());
//!
//! assert!(tag.starts_with("`xorm:\"BIGINT(20)"));
//! assert!(tag.contains("pk   autoincr"));
//! assert!(!tag.contains("not null"));
//! ```
//!
//! ## Comparisons
//!
//! Values of different kinds never compare, they fail:
//!
//! ```rust
//! use oxide_reverse_core::{CompareError, Value, compare};
//!
//! let five = Value::from(5);
//! assert_eq!(compare::eq(&five, &[3.into(), 5.into(), 7.into()]), Ok(true));
//! assert_eq!(compare::eq(&five, &["5".into()]), Err(CompareError::Incompatible));
//! assert_eq!(
//!     compare::lt(&true.into(), &false.into()),
//!     Err(CompareError::InvalidType)
//! );
//! ```

pub mod compare;
pub mod dedup;
pub mod error;
pub mod functions;
pub mod imports;
pub mod naming;
pub mod schema;
pub mod tag;
pub mod types;
pub mod value;

pub use dedup::distinct;
pub use error::{CompareError, FuncError};
pub use functions::{FuncMap, TemplateFn};
pub use imports::resolve_imports;
pub use naming::{GonicMapper, NameMapper, PrefixMapper, SameMapper, SnakeMapper, un_title};
pub use schema::{Column, Index, IndexType, SqlType, Table};
pub use tag::{TagOptions, format_tag};
pub use types::{GoTypeMapping, TypeMapping, type_string};
pub use value::{Complex, Kind, Value};
