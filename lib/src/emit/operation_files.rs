//! Renders one file per operation under the `operations/` output
//! directory: imports of every fragment it transitively depends on
//! (sorted by origin then name, spec.md §4.F), and a default export built
//! by concatenating each imported fragment's source with the operation's
//! own minified source, cast to the meta marker type declared in `types`.

use super::minify::minify_graphql;
use super::render::capitalize;
use crate::imports::ImportRegistry;
use crate::resolve::{ResolvedDocument, ResolvedOperation};
use apollo_compiler::ExecutableDocument;
use std::fmt::Write as _;

pub struct OperationFile {
    /// Bare operation name — the caller joins this under `operations/`.
    pub name: String,
    pub contents: String,
}

pub fn render_operation_files(
    document: &ExecutableDocument,
    resolved: &ResolvedDocument,
    imports: &ImportRegistry,
) -> Vec<OperationFile> {
    resolved
        .operations
        .iter()
        .map(|operation| render_one(document, resolved, imports, operation))
        .collect()
}

/// Where a fragment dependency's generated module lives, relative to an
/// `operations/<Name>` file: local fragments sit one level up in
/// `fragments/`; imported ones resolve through the import's own prefix.
fn fragment_import_path(resolved: &ResolvedDocument, imports: &ImportRegistry, name: &str) -> String {
    if resolved.fragments.contains_key(name) {
        format!("../fragments/{name}")
    } else if let Some(entry) = imports.get(name) {
        format!("{}/fragments/{name}", entry.prefix)
    } else {
        format!("../fragments/{name}")
    }
}

fn render_one(
    document: &ExecutableDocument,
    resolved: &ResolvedDocument,
    imports: &ImportRegistry,
    operation: &ResolvedOperation,
) -> OperationFile {
    let mut out = String::new();
    out.push_str(super::types_module::GENERATED_FILE_HEADER);
    out.push('\n');

    let mut deps: Vec<String> = operation.fragment_dependencies.clone();
    deps.sort_by_key(|name| {
        let origin = if resolved.fragments.contains_key(name.as_str()) {
            "..".to_string()
        } else {
            imports
                .get(name)
                .map(|entry| entry.from.clone())
                .unwrap_or_default()
        };
        (origin, name.clone())
    });

    for name in &deps {
        let path = fragment_import_path(resolved, imports, name);
        writeln!(out, "import {name} from \"{path}\";").unwrap();
    }

    let kind = capitalize(&operation.operation_type);
    let meta_name = format!("{}{kind}Meta", operation.name);
    writeln!(out, "import type {{ {meta_name} }} from \"../types\";").unwrap();
    out.push('\n');

    let Some(ast_operation) = document
        .operations
        .iter()
        .find(|op| op.name.as_deref() == Some(operation.name.as_str()))
    else {
        return OperationFile {
            name: operation.name.clone(),
            contents: out,
        };
    };

    let minified = minify_graphql(&ast_operation.to_string());
    let mut expression = String::new();
    for name in &deps {
        write!(expression, "{name} + ").unwrap();
    }
    write!(expression, "{minified:?}").unwrap();

    writeln!(out, "export default ({expression}) as {meta_name};").unwrap();

    OperationFile {
        name: operation.name.clone(),
        contents: out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imports::ImportRegistry;
    use crate::resolve::ResolvedDocument;
    use indexmap::IndexMap;

    #[test]
    fn local_fragment_import_path_points_one_level_up() {
        let mut fragments = IndexMap::new();
        fragments.insert(
            "MenuShort".to_string(),
            crate::resolve::ResolvedFragment {
                name: "MenuShort".to_string(),
                type_condition: "Menu".to_string(),
                host_type: crate::types::HostType::named("string", false),
            },
        );
        let resolved = ResolvedDocument {
            fragments,
            operations: Vec::new(),
            used_named_types: Default::default(),
        };
        let imports = ImportRegistry::default();
        assert_eq!(
            fragment_import_path(&resolved, &imports, "MenuShort"),
            "../fragments/MenuShort"
        );
    }
}
