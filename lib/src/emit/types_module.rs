//! Renders the shared `types` module: the `ArbitraryObjectType` alias,
//! every enum touched by the document, every local fragment's type alias
//! (`<Name>Fragment`), and every operation's result/variables/meta
//! declarations, each sorted by name for deterministic output (spec.md
//! §4.F(1)).
//!
//! The meta marker (`<Name><Kind>Meta`) is the type the operation's
//! default export is cast to: a three-field type carrying the opaque tag
//! `"graphql-operation"` alongside the result and variables types, so a
//! runtime helper can recognize a generated document by its type alone.

use super::render::{capitalize, render_host_type};
use crate::resolve::ResolvedDocument;
use crate::types::ARBITRARY_OBJECT_TYPE;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::validation::Valid;
use apollo_compiler::Schema;
use std::fmt::Write as _;

pub const GENERATED_FILE_HEADER: &str = "// GENERATED FILE - DO NOT EDIT BY HAND\n";
pub const OPERATION_META_TAG: &str = "graphql-operation";

pub fn render_types_module(schema: &Valid<Schema>, resolved: &ResolvedDocument) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_FILE_HEADER);
    out.push('\n');
    writeln!(
        out,
        "export type {ARBITRARY_OBJECT_TYPE} = Record<string, unknown>;"
    )
    .unwrap();
    out.push('\n');

    let mut enum_names: Vec<&String> = resolved.used_named_types.enums.iter().collect();
    enum_names.sort();
    for name in enum_names {
        if let Some(ExtendedType::Enum(enum_def)) = schema.types.get(name.as_str()) {
            let mut values: Vec<&str> = enum_def.values.keys().map(|k| k.as_str()).collect();
            values.sort();
            let union = values
                .iter()
                .map(|v| format!("\"{v}\""))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(out, "export type {name} = {union};").unwrap();
        }
    }
    if !resolved.used_named_types.enums.is_empty() {
        out.push('\n');
    }

    let mut fragment_names: Vec<&String> = resolved.fragments.keys().collect();
    fragment_names.sort();
    for name in fragment_names {
        let fragment = &resolved.fragments[name];
        writeln!(
            out,
            "export type {name}Fragment = {};",
            render_host_type(&fragment.host_type)
        )
        .unwrap();
    }
    if !fragment_names.is_empty() {
        out.push('\n');
    }

    let mut operations: Vec<_> = resolved.operations.iter().collect();
    operations.sort_by(|a, b| a.name.cmp(&b.name));
    for operation in operations {
        let kind = capitalize(&operation.operation_type);
        let base = format!("{}{kind}", operation.name);
        let variables_name = format!("{base}Variables");
        let meta_name = format!("{base}Meta");

        writeln!(
            out,
            "export type {base} = {};",
            render_host_type(&operation.result_type)
        )
        .unwrap();
        writeln!(
            out,
            "export type {variables_name} = {};",
            render_host_type(&operation.variables_type)
        )
        .unwrap();
        writeln!(
            out,
            "export type {meta_name} = {{ __tag: \"{OPERATION_META_TAG}\"; __result: {base}; __variables: {variables_name}; }};"
        )
        .unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_the_generated_marker() {
        assert!(GENERATED_FILE_HEADER.starts_with("// GENERATED"));
    }

    #[test]
    fn meta_tag_matches_spec_string() {
        assert_eq!(OPERATION_META_TAG, "graphql-operation");
    }
}
