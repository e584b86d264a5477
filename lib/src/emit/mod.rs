//! Code emission (spec.md §4.F, Component F): renders resolved host types
//! to TypeScript source, minifies the GraphQL documents that accompany
//! them, and hands the finished files to [`crate::output`] for
//! write-if-changed placement on disk.

pub mod fragment_files;
pub mod minify;
pub mod operation_files;
pub mod render;
pub mod types_module;

pub use minify::minify_graphql;
pub use render::render_host_type;
