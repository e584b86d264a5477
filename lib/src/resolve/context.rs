//! Shared state threaded through fragment and operation resolution: the
//! schema and document being resolved, the import registry, and the
//! fragments resolved so far.

use super::convert::convert_selection_set;
use super::operations::ResolvedFragment;
use super::used_types::UsedNamedTypes;
use crate::error::Result;
use crate::imports::ImportRegistry;
use crate::types::HostType;
use apollo_compiler::validation::Valid;
use apollo_compiler::{ExecutableDocument, Schema};
use indexmap::IndexMap;

pub struct ResolveContext<'a> {
    pub schema: &'a Valid<Schema>,
    pub document: &'a ExecutableDocument,
    pub imports: &'a ImportRegistry,
    resolved_fragments: IndexMap<String, ResolvedFragment>,
    used_named_types: UsedNamedTypes,
}

impl<'a> ResolveContext<'a> {
    pub fn new(
        schema: &'a Valid<Schema>,
        document: &'a ExecutableDocument,
        imports: &'a ImportRegistry,
    ) -> Self {
        Self {
            schema,
            document,
            imports,
            resolved_fragments: IndexMap::new(),
            used_named_types: UsedNamedTypes::default(),
        }
    }

    pub fn is_resolved(&self, name: &str) -> bool {
        self.resolved_fragments.contains_key(name)
    }

    pub fn resolved_fragment(&self, name: &str) -> Option<&ResolvedFragment> {
        self.resolved_fragments.get(name)
    }

    pub fn used_named_types(&self) -> &UsedNamedTypes {
        &self.used_named_types
    }

    pub fn used_named_types_mut(&mut self) -> &mut UsedNamedTypes {
        &mut self.used_named_types
    }

    pub fn into_resolved_fragments(self) -> IndexMap<String, ResolvedFragment> {
        self.resolved_fragments
    }

    /// Attempts to resolve one fragment. Returns `Ok(false)` (not an
    /// error) when the fragment spreads another local fragment that isn't
    /// resolved yet — the caller retries it on the next fixpoint sweep.
    pub fn try_resolve_fragment(&mut self, name: &str) -> Result<bool> {
        if self.is_resolved(name) {
            return Ok(true);
        }

        let Some(fragment) = self.document.fragments.get(name) else {
            return Ok(true);
        };

        let type_condition = fragment.selection_set.ty.to_string();

        if !self.local_spread_dependencies_ready(&fragment.selection_set) {
            return Ok(false);
        }

        let host_type = convert_selection_set(self, &fragment.selection_set)?.force_non_nullable();

        self.resolved_fragments.insert(
            name.to_string(),
            ResolvedFragment {
                name: name.to_string(),
                type_condition,
                host_type,
            },
        );

        Ok(true)
    }

    fn local_spread_dependencies_ready(
        &self,
        selection_set: &apollo_compiler::executable::SelectionSet,
    ) -> bool {
        use apollo_compiler::executable::Selection;

        for selection in &selection_set.selections {
            match selection {
                Selection::FragmentSpread(spread) => {
                    let name = spread.fragment_name.as_str();
                    if self.document.fragments.contains_key(name) && !self.is_resolved(name) {
                        return false;
                    }
                }
                Selection::Field(field) => {
                    if !self.local_spread_dependencies_ready(&field.selection_set) {
                        return false;
                    }
                }
                Selection::InlineFragment(_) => {}
            }
        }
        true
    }
}
