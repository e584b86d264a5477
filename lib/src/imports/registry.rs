//! Builds the import registry: one entry per name made available by some
//! `import` directive, tagged with the package it came from.

use crate::directives::{extract_import_specs, ImportWhat};
use crate::document::loader::{load_documents, SourceFile};
use crate::error::{Error, Result};
use crate::include_rules::{resolve_import_dir, resolve_import_prefix, IncludeRule};
use rustc_hash::FxHashMap;
use std::path::Path;

/// A name pulled in by an import directive, plus where it actually lives.
#[derive(Debug, Clone)]
pub struct ImportedName {
    /// The literal `P` string from the directive (used as the embed-mode
    /// key and for error messages).
    pub from: String,
    /// Host-language import prefix, after `@NAME` substitution.
    pub prefix: String,
    /// Concatenated source text of every `.graphql` file in the imported
    /// package, so the resolver can look up this name's definition.
    pub package_source: String,
}

/// Map from an imported name to the package it resolves to. Construction
/// rejects two imports of the same name from different packages — spec.md
/// §4.D treats that as a hard conflict rather than a silent override.
#[derive(Debug, Default)]
pub struct ImportRegistry {
    entries: FxHashMap<String, ImportedName>,
}

impl ImportRegistry {
    pub fn get(&self, name: &str) -> Option<&ImportedName> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

/// Scans every source file for import directives and resolves them all
/// into one registry. `base_dir` is the directory the relative/abbreviated
/// `P` paths in `import` directives are resolved against.
pub fn build_import_registry(
    sources: &[SourceFile],
    base_dir: &Path,
    include_rules: &[IncludeRule],
) -> Result<ImportRegistry> {
    let mut registry = ImportRegistry::default();
    let mut package_cache: FxHashMap<String, String> = FxHashMap::default();

    for file in sources {
        for spec in extract_import_specs(&file.text) {
            let dir = resolve_import_dir(&spec.from, include_rules);
            let prefix = resolve_import_prefix(&spec.from, include_rules);
            let resolved_dir = base_dir.join(&dir);

            let package_source = match package_cache.get(&spec.from) {
                Some(cached) => cached.clone(),
                None => {
                    let files = load_documents(&resolved_dir)?;
                    let joined = files
                        .into_iter()
                        .map(|f| f.text)
                        .collect::<Vec<_>>()
                        .join("\n");
                    package_cache.insert(spec.from.clone(), joined.clone());
                    joined
                }
            };

            let names = match &spec.what {
                ImportWhat::All => extract_exported_names(&package_source),
                ImportWhat::Some(names) => names.clone(),
            };

            for name in names {
                let entry = ImportedName {
                    from: spec.from.clone(),
                    prefix: prefix.clone(),
                    package_source: package_source.clone(),
                };
                if let Some(existing) = registry.entries.get(&name) {
                    if existing.from != entry.from {
                        return Err(Error::DuplicateDefinition {
                            name,
                            first: existing.from.clone(),
                            second: entry.from,
                        });
                    }
                    continue;
                }
                registry.entries.insert(name, entry);
            }
        }
    }

    Ok(registry)
}

/// Lists every top-level `fragment Name on ...` and `query/mutation Name`
/// definition in a package's concatenated source, for `import * from "P"`.
/// A lightweight textual scan rather than a full parse: this only needs to
/// enumerate names, and the package source is re-parsed with the real
/// GraphQL parser once a name is actually referenced.
fn extract_exported_names(source: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in source.lines() {
        let line = line.trim_start();
        for keyword in ["fragment", "query", "mutation", "subscription"] {
            if let Some(rest) = line.strip_prefix(keyword) {
                if let Some(name) = rest.split_whitespace().next() {
                    if name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                        names.push(name.to_string());
                    }
                }
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_exported_fragment_and_operation_names() {
        let source = "fragment UserFields on User { id }\nquery GetUser { user { ...UserFields } }";
        let names = extract_exported_names(source);
        assert_eq!(names, vec!["UserFields", "GetUser"]);
    }
}
