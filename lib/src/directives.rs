//! Import-directive lexer (spec.md §4.A).
//!
//! Scans raw GraphQL source text — before it is handed to the GraphQL
//! parser — for `import * from "P"` and `import { a, b } from "P"` comment
//! directives. Regex-driven, grounded in the pattern-based lint rules of
//! `trevor-scheer-graphql-analyzer/crates/linter` (also a `regex`
//! consumer). Malformed directives are silently ignored: the GraphQL
//! parser will reject a truly broken file on its own pass.

use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportWhat {
    All,
    Some(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub from: String,
    pub what: ImportWhat,
}

fn star_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"import\s*\*\s*from\s*"([^"]+)""#).expect("static pattern is valid")
    })
}

fn named_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"import\s*\{\s*([A-Za-z0-9_,\s]+)\s*\}\s*from\s*"([^"]+)""#)
            .expect("static pattern is valid")
    })
}

/// Extracts import directives from raw (pre-parse) GraphQL source text, in
/// source order. Never errors — a malformed `import` line simply produces
/// no match.
pub fn extract_import_specs(source: &str) -> Vec<ImportSpec> {
    let mut matches: Vec<(usize, ImportSpec)> = Vec::new();

    for m in star_import_re().captures_iter(source) {
        let whole = m.get(0).unwrap();
        matches.push((
            whole.start(),
            ImportSpec {
                from: m[1].to_string(),
                what: ImportWhat::All,
            },
        ));
    }

    for m in named_import_re().captures_iter(source) {
        let whole = m.get(0).unwrap();
        let names = m[1]
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        matches.push((
            whole.start(),
            ImportSpec {
                from: m[2].to_string(),
                what: ImportWhat::Some(names),
            },
        ));
    }

    matches.sort_by_key(|(pos, _)| *pos);
    matches.into_iter().map(|(_, spec)| spec).collect()
}

/// Blanks out every `import` directive in `source`, replacing each match
/// with spaces so line and column numbers in later parser diagnostics
/// still point at the right place. `import` directives aren't valid
/// GraphQL syntax, so this must run before the text reaches the parser.
pub fn strip_import_directives(source: &str) -> String {
    let mut result = source.to_string();
    let mut ranges: Vec<(usize, usize)> = star_import_re()
        .find_iter(source)
        .map(|m| (m.start(), m.end()))
        .chain(named_import_re().find_iter(source).map(|m| (m.start(), m.end())))
        .collect();
    ranges.sort_by_key(|(start, _)| *start);

    for (start, end) in ranges {
        let blanked: String = source[start..end]
            .chars()
            .map(|c| if c == '\n' { '\n' } else { ' ' })
            .collect();
        result.replace_range(start..end, &blanked);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_star_import() {
        let source = r#"import * from "./shared.graphql""#;
        let specs = extract_import_specs(source);
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].from, "./shared.graphql");
        assert_eq!(specs[0].what, ImportWhat::All);
    }

    #[test]
    fn extracts_named_import_with_flexible_whitespace() {
        let source = r#"import   {   A,B ,C  } from "@shared/fragments""#;
        let specs = extract_import_specs(source);
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].from, "@shared/fragments");
        assert_eq!(
            specs[0].what,
            ImportWhat::Some(vec!["A".into(), "B".into(), "C".into()])
        );
    }

    #[test]
    fn preserves_source_order_across_both_forms() {
        let source = "import { A } from \"./a.graphql\"\nimport * from \"./b.graphql\"\n";
        let specs = extract_import_specs(source);
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].from, "./a.graphql");
        assert_eq!(specs[1].from, "./b.graphql");
    }

    #[test]
    fn ignores_malformed_directives() {
        let source = "import from \"no-braces-or-star.graphql\"\nquery Q { field }";
        assert!(extract_import_specs(source).is_empty());
    }

    #[test]
    fn ignores_unrelated_text() {
        let source = "fragment F on T { id }\nquery Q { field }";
        assert!(extract_import_specs(source).is_empty());
    }

    #[test]
    fn strip_blanks_directives_without_shifting_later_offsets() {
        let source = "import * from \"./shared.graphql\"\nquery Q { field }";
        let stripped = strip_import_directives(source);
        assert_eq!(stripped.len(), source.len());
        assert!(stripped.trim_start().starts_with("query Q"));
    }
}
