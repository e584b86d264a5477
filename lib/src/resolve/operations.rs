//! Resolves operations (spec.md §4.E) into their result type, variables
//! type, and the transitive list of fragments they depend on — the last
//! of which the emitter turns into import statements (spec.md §4.F).

use super::context::ResolveContext;
use super::convert::{convert_selection_set, convert_variable_type};
use crate::error::Result;
use crate::types::HostType;
use apollo_compiler::executable::{Selection, SelectionSet};
use indexmap::IndexMap;
use indexmap::IndexSet;

#[derive(Debug, Clone)]
pub struct ResolvedFragment {
    pub name: String,
    pub type_condition: String,
    pub host_type: HostType,
}

#[derive(Debug, Clone)]
pub struct ResolvedOperation {
    pub name: String,
    pub operation_type: String,
    pub result_type: HostType,
    pub variables_type: HostType,
    /// Every fragment (local or imported) this operation's selection set
    /// depends on, transitively, in first-encountered order.
    pub fragment_dependencies: Vec<String>,
}

pub fn resolve_operations(ctx: &mut ResolveContext<'_>) -> Result<Vec<ResolvedOperation>> {
    let mut results = Vec::new();

    for operation in ctx.document.operations.iter() {
        let name = operation
            .name
            .as_ref()
            .expect("anonymous operations are rejected during validation")
            .to_string();
        let operation_type = operation.operation_type.to_string();

        let result_type =
            convert_selection_set(ctx, &operation.selection_set)?.force_non_nullable();

        let mut variable_fields = IndexMap::new();
        for variable in &operation.variables {
            let host_type = convert_variable_type(ctx, &variable.ty)?;
            variable_fields.insert(variable.name.to_string(), host_type);
        }
        let variables_type = HostType::object(variable_fields, false);

        let fragment_dependencies = collect_fragment_dependencies(ctx, &operation.selection_set);

        results.push(ResolvedOperation {
            name,
            operation_type,
            result_type,
            variables_type,
            fragment_dependencies,
        });
    }

    Ok(results)
}

fn collect_fragment_dependencies(
    ctx: &ResolveContext<'_>,
    selection_set: &SelectionSet,
) -> Vec<String> {
    let mut seen = IndexSet::new();
    walk_fragment_spreads(ctx, selection_set, &mut seen);
    seen.into_iter().collect()
}

fn walk_fragment_spreads(
    ctx: &ResolveContext<'_>,
    selection_set: &SelectionSet,
    seen: &mut IndexSet<String>,
) {
    for selection in &selection_set.selections {
        match selection {
            Selection::Field(field) => {
                walk_fragment_spreads(ctx, &field.selection_set, seen);
            }
            Selection::FragmentSpread(spread) => {
                let name = spread.fragment_name.to_string();
                if seen.insert(name.clone()) {
                    if let Some(fragment) = ctx.document.fragments.get(name.as_str()) {
                        walk_fragment_spreads(ctx, &fragment.selection_set, seen);
                    }
                }
            }
            Selection::InlineFragment(_) => {}
        }
    }
}
