//! Document loading and validation (spec.md §4.B, Component B).
//!
//! A "document" here is the full set of `.graphql` files under one root,
//! parsed together against the schema into a single
//! [`apollo_compiler::ExecutableDocument`]. Loading is parallelized with
//! `rayon`; validation runs apollo-compiler's full rule set and then strips
//! the rules this tool doesn't want to enforce (spec.md §4.B "Validation
//! rule exceptions").

pub mod loader;
pub mod validation;

pub use loader::{load_documents, SourceFile};
pub use validation::validate_document;
