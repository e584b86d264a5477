//! Schema acquisition: local file, raw SDL over HTTPS, or introspection
//! (spec.md §6 "CLI surface", `--schema`).

pub mod introspection;

use crate::error::{Error, Result};
use apollo_compiler::{validation::Valid, Schema};
use std::path::Path;

/// Where a `--schema` value came from, decided by the dispatch rule in
/// spec.md §6: `https://...graphql` is raw SDL, any other `https://` is an
/// introspection endpoint, anything else is a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource<'a> {
    LocalFile(&'a str),
    RawSdlUrl(&'a str),
    IntrospectionUrl(&'a str),
}

pub fn classify_schema_arg(arg: &str) -> SchemaSource<'_> {
    if arg.starts_with("https://") {
        if arg.ends_with(".graphql") {
            SchemaSource::RawSdlUrl(arg)
        } else {
            SchemaSource::IntrospectionUrl(arg)
        }
    } else {
        SchemaSource::LocalFile(arg)
    }
}

/// Parses and validates SDL text into a usable schema, tagging parse
/// failures with the file/URL it came from.
pub fn parse_sdl(sdl: &str, origin: &str) -> Result<Valid<Schema>> {
    Schema::parse_and_validate(sdl, origin)
        .map_err(|e| Error::SchemaFetch(format!("{origin}: {e}")))
}

pub fn read_local_schema(path: &str) -> Result<Valid<Schema>> {
    let text =
        std::fs::read_to_string(path).map_err(|e| Error::io(Path::new(path).to_path_buf(), e))?;
    parse_sdl(&text, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_raw_sdl_url() {
        assert_eq!(
            classify_schema_arg("https://api.example.com/schema.graphql"),
            SchemaSource::RawSdlUrl("https://api.example.com/schema.graphql")
        );
    }

    #[test]
    fn classifies_introspection_url() {
        assert_eq!(
            classify_schema_arg("https://api.example.com/graphql"),
            SchemaSource::IntrospectionUrl("https://api.example.com/graphql")
        );
    }

    #[test]
    fn classifies_local_file() {
        assert_eq!(
            classify_schema_arg("./schema.graphql"),
            SchemaSource::LocalFile("./schema.graphql")
        );
        assert_eq!(
            classify_schema_arg("schema.graphql"),
            SchemaSource::LocalFile("schema.graphql")
        );
    }
}
