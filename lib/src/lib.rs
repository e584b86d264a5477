//! Core engine for the GraphQL-to-TypeScript code generator.
//!
//! Given a GraphQL schema and a directory of `.graphql` source files, this
//! crate resolves every fragment and operation into a host-language type,
//! computes fragment dependency closures, and emits deterministic output
//! files. See `directives`, `document`, `imports`, `resolve` and `emit` for
//! the pipeline stages, in that order.

pub mod content_model;
pub mod directives;
pub mod document;
pub mod emit;
pub mod error;
pub mod imports;
pub mod include_rules;
pub mod output;
pub mod resolve;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
