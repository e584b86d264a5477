//! Fixpoint type resolution (spec.md §4.E, Component E).
//!
//! Converts every fragment and operation in an [`ExecutableDocument`] into
//! a [`HostType`], resolving fragment spreads by substituting the spread
//! fragment's own resolved type rather than re-walking its selection set.
//! Fragments may reference each other in any order (including forward
//! references within the same file), so resolution runs as a fixpoint:
//! repeatedly sweep the fragment set, resolving whatever now has all of
//! its dependencies resolved, until a full sweep makes no progress.

mod context;
mod convert;
mod operations;
mod used_types;

pub use context::ResolveContext;
pub use operations::{ResolvedFragment, ResolvedOperation};
pub use used_types::UsedNamedTypes;

use crate::error::{Error, Result};
use crate::imports::ImportRegistry;
use apollo_compiler::validation::Valid;
use apollo_compiler::{ExecutableDocument, Schema};
use indexmap::IndexMap;

/// Everything the emitter needs: every fragment and operation resolved to
/// a [`crate::types::HostType`], plus the transitive closure of
/// enum/input-object names any of them touch.
pub struct ResolvedDocument {
    pub fragments: IndexMap<String, ResolvedFragment>,
    pub operations: Vec<ResolvedOperation>,
    pub used_named_types: UsedNamedTypes,
}

/// Resolves every fragment and operation in `document` against `schema`,
/// using `imports` to resolve names not defined locally.
pub fn resolve_document(
    schema: &Valid<Schema>,
    document: &ExecutableDocument,
    imports: &ImportRegistry,
) -> Result<ResolvedDocument> {
    let mut ctx = ResolveContext::new(schema, document, imports);

    let mut pending: Vec<String> = document
        .fragments
        .keys()
        .map(|name| name.to_string())
        .collect();

    loop {
        if pending.is_empty() {
            break;
        }
        let mut made_progress = false;
        let mut still_pending = Vec::new();

        for name in pending.drain(..) {
            match ctx.try_resolve_fragment(&name) {
                Ok(true) => made_progress = true,
                Ok(false) => still_pending.push(name),
                Err(e) => return Err(e),
            }
        }

        pending = still_pending;
        if !made_progress && !pending.is_empty() {
            return Err(Error::UnresolvedFixpoint(pending));
        }
    }

    let operations = operations::resolve_operations(&mut ctx)?;

    Ok(ResolvedDocument {
        fragments: ctx.into_resolved_fragments(),
        operations,
        used_named_types: ctx.used_named_types().clone(),
    })
}
