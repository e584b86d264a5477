//! Renders one file per local fragment under the `fragments/` output
//! directory: a default export of its minified source, cast to the
//! fragment's `<Name>Fragment` type declared in `types` (spec.md §4.F).

use super::minify::minify_graphql;
use super::types_module::GENERATED_FILE_HEADER;
use crate::resolve::ResolvedDocument;
use apollo_compiler::ExecutableDocument;

pub struct FragmentFile {
    /// Bare fragment name — the caller joins this under `fragments/`.
    pub name: String,
    pub contents: String,
}

pub fn render_fragment_files(
    document: &ExecutableDocument,
    resolved: &ResolvedDocument,
) -> Vec<FragmentFile> {
    let mut names: Vec<&String> = resolved.fragments.keys().collect();
    names.sort();

    names
        .into_iter()
        .filter_map(|name| {
            let fragment = document.fragments.get(name.as_str())?;
            let minified = minify_graphql(&fragment.to_string());
            let contents = format!(
                "{GENERATED_FILE_HEADER}\nimport type {{ {name}Fragment }} from \"../types\";\n\nexport default {minified:?} as {name}Fragment;\n"
            );
            Some(FragmentFile {
                name: name.clone(),
                contents,
            })
        })
        .collect()
}
