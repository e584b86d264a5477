//! GraphQL minification (spec.md §4.F "Minification"): strips ignorable
//! characters (whitespace, commas, comments) outside of string values.
//! Deliberately not a pretty-printer — the goal is the smallest document
//! that still parses to the same AST, not readable output.

/// Minifies `source`, collapsing runs of insignificant whitespace to a
/// single space and dropping `#`-comments, while leaving string and
/// block-string contents byte-for-byte untouched.
pub fn minify_graphql(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut last_was_space = true;

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                let is_block = chars.peek() == Some(&'"') && {
                    let mut lookahead = chars.clone();
                    lookahead.next();
                    lookahead.peek() == Some(&'"')
                };
                out.push('"');
                if is_block {
                    chars.next();
                    chars.next();
                    out.push_str("\"\"");
                    copy_until_block_string_end(&mut chars, &mut out);
                } else {
                    copy_until_string_end(&mut chars, &mut out);
                }
                last_was_space = false;
            }
            '#' => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        break;
                    }
                }
                if !last_was_space {
                    out.push(' ');
                    last_was_space = true;
                }
            }
            c if c.is_whitespace() || c == ',' => {
                if !last_was_space {
                    out.push(' ');
                    last_was_space = true;
                }
            }
            c => {
                out.push(c);
                last_was_space = false;
            }
        }
    }

    out.trim().to_string()
}

fn copy_until_string_end(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) {
    let mut escaped = false;
    for c in chars.by_ref() {
        out.push(c);
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            break;
        }
    }
}

fn copy_until_block_string_end(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    out: &mut String,
) {
    loop {
        match chars.next() {
            None => break,
            Some('"') => {
                if chars.peek() == Some(&'"') {
                    let mut lookahead = chars.clone();
                    lookahead.next();
                    if lookahead.peek() == Some(&'"') {
                        out.push('"');
                        chars.next();
                        out.push('"');
                        chars.next();
                        out.push('"');
                        break;
                    }
                }
                out.push('"');
            }
            Some(c) => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_commas() {
        let source = "query  Foo(\n  $id: ID!\n) {\n  user(id: $id) { name }\n}\n";
        assert_eq!(
            minify_graphql(source),
            "query Foo( $id: ID! ) { user(id: $id) { name } }"
        );
    }

    #[test]
    fn strips_comments() {
        let source = "# a comment\nquery Foo { id }";
        assert_eq!(minify_graphql(source), "query Foo { id }");
    }

    #[test]
    fn preserves_string_literal_contents() {
        let source = r#"query Foo { field(arg: "  spaced  , value  ") }"#;
        assert_eq!(
            minify_graphql(source),
            r#"query Foo { field(arg: "  spaced  , value  ") }"#
        );
    }
}
