//! `-I NAME=DIR=PREFIX` include rule parsing (spec.md §3 "Include rule").
//!
//! Malformed rules (missing key, directory, or prefix) are silently
//! skipped, matching the source's tolerance for bad `-I` flags rather than
//! aborting a whole run over one typo.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeRule {
    /// The `@NAME` key substituted in import paths, without the leading `@`.
    pub name: String,
    /// Filesystem directory the key resolves to when loading imports.
    pub dir: String,
    /// Prefix substituted for `@NAME` in emitted host-language import paths.
    pub prefix: String,
}

/// Parses a single `-I` flag value. Returns `None` for anything that isn't
/// exactly three non-empty `=`-separated fields.
pub fn parse_include_rule(raw: &str) -> Option<IncludeRule> {
    let mut parts = raw.splitn(3, '=');
    let name = parts.next()?;
    let dir = parts.next()?;
    let prefix = parts.next()?;
    if name.is_empty() || dir.is_empty() || prefix.is_empty() {
        return None;
    }
    Some(IncludeRule {
        name: name.to_string(),
        dir: dir.to_string(),
        prefix: prefix.to_string(),
    })
}

/// Parses a whole `-I` flag list, dropping malformed entries.
pub fn parse_include_rules<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<IncludeRule> {
    raw.into_iter().filter_map(parse_include_rule).collect()
}

/// Resolves a path of the form `@NAME/rest/of/path` against the include
/// rules, returning the filesystem directory for `@NAME` joined with the
/// remainder. Paths with no `@NAME` abbreviation are returned unchanged.
pub fn resolve_import_dir(path: &str, rules: &[IncludeRule]) -> String {
    let Some(rest) = path.strip_prefix('@') else {
        return path.to_string();
    };
    let (key, remainder) = match rest.split_once('/') {
        Some((key, remainder)) => (key, remainder),
        None => (rest, ""),
    };
    match rules.iter().find(|r| r.name == key) {
        Some(rule) if remainder.is_empty() => rule.dir.clone(),
        Some(rule) => format!("{}/{}", rule.dir, remainder),
        None => path.to_string(),
    }
}

/// Substitutes `@NAME` with its emitted-import prefix, for use in the
/// emitted host-language import path of an external fragment.
pub fn resolve_import_prefix(path: &str, rules: &[IncludeRule]) -> String {
    let Some(rest) = path.strip_prefix('@') else {
        return path.to_string();
    };
    let (key, remainder) = match rest.split_once('/') {
        Some((key, remainder)) => (key, remainder),
        None => (rest, ""),
    };
    match rules.iter().find(|r| r.name == key) {
        Some(rule) if remainder.is_empty() => rule.prefix.clone(),
        Some(rule) => format!("{}/{}", rule.prefix, remainder),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_rule() {
        let rule = parse_include_rule("Shared=../shared/graphql=@shared").unwrap();
        assert_eq!(rule.name, "Shared");
        assert_eq!(rule.dir, "../shared/graphql");
        assert_eq!(rule.prefix, "@shared");
    }

    #[test]
    fn skips_malformed_rules() {
        assert!(parse_include_rule("NoPrefixOrDir").is_none());
        assert!(parse_include_rule("Name=Dir").is_none());
        assert!(parse_include_rule("=Dir=Prefix").is_none());
        assert!(parse_include_rule("Name==Prefix").is_none());
    }

    #[test]
    fn resolves_abbreviated_paths() {
        let rules = vec![IncludeRule {
            name: "Shared".into(),
            dir: "../shared/graphql".into(),
            prefix: "@app/shared".into(),
        }];
        assert_eq!(
            resolve_import_dir("@Shared/fragments", &rules),
            "../shared/graphql/fragments"
        );
        assert_eq!(
            resolve_import_prefix("@Shared/fragments", &rules),
            "@app/shared/fragments"
        );
        assert_eq!(resolve_import_dir("./local", &rules), "./local");
    }
}
