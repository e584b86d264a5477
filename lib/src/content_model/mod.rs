//! Content-model JSON schema sub-generator (spec.md §4.G, Component G):
//! a second, independent code path that turns a typed JSON schema into a
//! runtime validator module, separate from the GraphQL pipeline in
//! [`crate::resolve`]/[`crate::emit`].

pub mod emit;
pub mod fetch;
pub mod schema;

pub use emit::render_validator_module;
pub use schema::{parse_content_model, ContentModel, ContentModelJson};
