//! Error kinds for the codegen pipeline (spec.md §7).
//!
//! `lib` propagates these through `?`; `cli` converts the final value to
//! `anyhow::Error` at the command boundary so the top-level error chain can
//! be printed with context.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to fetch schema: {0}")]
    SchemaFetch(String),

    #[error("GraphQL validation failed:\n{0}")]
    Validation(String),

    #[error("duplicate definition '{name}': already defined in {first}, redefined in {second}")]
    DuplicateDefinition {
        name: String,
        first: String,
        second: String,
    },

    #[error("could not resolve the following definitions after a full pass with no progress: {0:?}")]
    UnresolvedFixpoint(Vec<String>),

    #[error("import resolution failed: {0}")]
    ImportResolution(String),

    #[error("{0}")]
    Unsupported(String),

    #[error("content model '{name}' failed to parse: {message}")]
    ContentModelParse { name: String, message: String },

    #[error("failed to read '{path:?}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
