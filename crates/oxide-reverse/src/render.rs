//! Go source rendering.
//!
//! Produces a `package` clause, an `import` block when some column needs one,
//! and one struct per table whose fields carry the formatted struct tags.

use std::fmt::Write;

use oxide_reverse_core::{
    GoTypeMapping, NameMapper, Table, TagOptions, format_tag, resolve_imports, type_string,
};

/// Everything the renderer needs besides the tables.
pub struct RenderContext<'a> {
    /// Go package name.
    pub package: &'a str,
    /// Maps table names to struct names.
    pub table_mapper: &'a dyn NameMapper,
    /// Maps column names to field names.
    pub column_mapper: &'a dyn NameMapper,
    /// Tag switches.
    pub tag_options: TagOptions,
}

struct Field {
    name: String,
    type_name: String,
    tag: String,
}

/// Renders one Go source file containing a struct for every table.
#[must_use]
pub fn render_go_file(tables: &[Table], ctx: &RenderContext<'_>) -> String {
    let mapping = GoTypeMapping::new();
    let mut out = String::new();

    let _ = writeln!(out, "package {}", ctx.package);

    let imports = resolve_imports(tables, &mapping);
    if !imports.is_empty() {
        out.push_str("\nimport (\n");
        for path in imports.keys() {
            let _ = writeln!(out, "\t\"{path}\"");
        }
        out.push_str(")\n");
    }

    for table in tables {
        out.push('\n');
        render_struct(&mut out, table, &mapping, ctx);
    }
    out
}

fn render_struct(out: &mut String, table: &Table, mapping: &GoTypeMapping, ctx: &RenderContext<'_>) {
    let fields: Vec<Field> = table
        .columns
        .iter()
        .map(|column| Field {
            name: ctx.column_mapper.to_identifier(&column.name),
            type_name: type_string(mapping, column),
            tag: format_tag(table, column, &ctx.tag_options),
        })
        .collect();

    let name_width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    let type_width = fields.iter().map(|f| f.type_name.len()).max().unwrap_or(0);

    if !table.comment.is_empty() {
        let _ = writeln!(out, "// {}", table.comment);
    }
    let _ = writeln!(out, "type {} struct {{", ctx.table_mapper.to_identifier(&table.name));
    for field in &fields {
        let line = if field.tag.is_empty() {
            format!("\t{:<name_width$} {}", field.name, field.type_name)
        } else {
            format!(
                "\t{:<name_width$} {:<type_width$} {}",
                field.name, field.type_name, field.tag
            )
        };
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out.push_str("}\n");
}
