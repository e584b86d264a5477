//! Cross-file and cross-package import resolution (spec.md §4.D,
//! Component D).
//!
//! Each `.graphql` source file may carry `import * from "P"` or
//! `import { a, b } from "P"` directives (see [`crate::directives`]). `P`
//! names another directory of `.graphql` files — either a relative path or
//! an `@NAME/...` abbreviation resolved through `-I` include rules (see
//! [`crate::include_rules`]). This module turns those directives into a
//! registry mapping imported fragment/operation names to the package they
//! came from, so the resolver can reference them without re-parsing their
//! defining files on every lookup, and the emitter can write a host-import
//! statement back to the right package.

pub mod registry;

pub use registry::{build_import_registry, ImportRegistry, ImportedName};
