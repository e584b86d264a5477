//! Selection-set-to-`HostType` conversion (spec.md §4.E "Conversion
//! rules"), the heart of the resolver.
//!
//! A selection set made only of plain fields becomes an [`HostType::Object`].
//! A selection set made of exactly one fragment spread and nothing else
//! short-circuits to that fragment's own type — no wrapper is introduced.
//! Anything else that mixes fields and spreads, or spreads more than one
//! fragment, becomes an [`HostType::Intersection`] with spreads first and
//! the selection's own fields last, matching the field-shadowing semantics
//! a host-language intersection type gives you for free.

use super::context::ResolveContext;
use crate::error::{Error, Result};
use crate::types::{builtin_scalar, HostType, ARBITRARY_OBJECT_TYPE};
use apollo_compiler::ast::Type as GraphQLType;
use apollo_compiler::executable::{Field, Selection, SelectionSet};
use indexmap::IndexMap;

pub fn convert_selection_set(
    ctx: &mut ResolveContext<'_>,
    selection_set: &SelectionSet,
) -> Result<HostType> {
    let parent_type = selection_set.ty.as_str();
    let mut own_fields: IndexMap<String, HostType> = IndexMap::new();
    let mut spread_types: Vec<HostType> = Vec::new();
    let mut spread_count = 0usize;
    let mut field_count = 0usize;

    for selection in &selection_set.selections {
        match selection {
            Selection::Field(field) => {
                field_count += 1;
                let response_key = field.response_key().to_string();
                let host_type = convert_field(ctx, parent_type, field)?;
                own_fields.insert(response_key, host_type);
            }
            Selection::FragmentSpread(spread) => {
                spread_count += 1;
                spread_types.push(resolve_spread(ctx, spread.fragment_name.as_str())?);
            }
            Selection::InlineFragment(_) => {
                return Err(Error::Unsupported(
                    "inline fragments are not supported".to_string(),
                ));
            }
        }
    }

    if spread_count == 1 && field_count == 0 {
        return Ok(spread_types.into_iter().next().unwrap());
    }

    let object = HostType::object(own_fields, false);
    if spread_types.is_empty() {
        return Ok(object);
    }

    let mut members: Vec<HostType> = spread_types
        .into_iter()
        .map(|t| t.force_non_nullable())
        .collect();
    if field_count > 0 {
        members.push(object);
    }
    Ok(HostType::Intersection {
        members,
        nullable: false,
    })
}

/// A fragment spread always resolves to a named reference to the
/// fragment's own emitted type (`<Name>Fragment`), never to the
/// fragment's inlined body — the body lives once, in the fragment's own
/// type alias, and every spread site just points at it (spec.md §4.C/§4.E
/// invariants 5 & 6).
fn resolve_spread(ctx: &mut ResolveContext<'_>, name: &str) -> Result<HostType> {
    if ctx.resolved_fragment(name).is_some() || ctx.imports.contains(name) {
        return Ok(HostType::named(format!("{name}Fragment"), false));
    }
    Err(Error::ImportResolution(format!(
        "fragment '{name}' is not defined locally or imported"
    )))
}

fn convert_field(
    ctx: &mut ResolveContext<'_>,
    parent_type: &str,
    field: &Field,
) -> Result<HostType> {
    if field.name.as_str() == "__typename" {
        return Ok(HostType::named("string", false));
    }

    let field_def = ctx
        .schema
        .type_field(parent_type, field.name.as_str())
        .map_err(|_| {
            Error::Unsupported(format!(
                "unknown field '{}' on type '{parent_type}'",
                field.name
            ))
        })?;
    let field_type = field_def.ty.clone();

    if field.selection_set.selections.is_empty() {
        wrap_for_type(ctx, &field_type, &mut |ctx| {
            Ok(convert_leaf(ctx, field_type.inner_named_type().as_str()))
        })
    } else {
        wrap_for_type(ctx, &field_type, &mut |ctx| {
            convert_selection_set(ctx, &field.selection_set)
        })
    }
}

fn convert_leaf(ctx: &mut ResolveContext<'_>, name: &str) -> HostType {
    if let Some(scalar) = builtin_scalar(name) {
        return HostType::named(scalar, false);
    }
    ctx.used_named_types_mut().record(ctx.schema, name);
    if ctx.schema.types.get(name).is_some() {
        HostType::named(name, false)
    } else {
        HostType::named(ARBITRARY_OBJECT_TYPE, false)
    }
}

/// Expands a variable's declared type into a `HostType`, recursing into
/// input object fields rather than emitting a named reference for them
/// (spec.md §4.E "Variables objects are fully expanded").
pub(crate) fn convert_variable_type(ctx: &mut ResolveContext<'_>, ty: &GraphQLType) -> Result<HostType> {
    let inner_name = ty.inner_named_type().to_string();
    wrap_for_type(ctx, ty, &mut move |ctx| Ok(expand_input_named(ctx, &inner_name)))
}

fn expand_input_named(ctx: &mut ResolveContext<'_>, name: &str) -> HostType {
    use apollo_compiler::schema::ExtendedType;

    if let Some(scalar) = builtin_scalar(name) {
        return HostType::named(scalar, false);
    }

    match ctx.schema.types.get(name) {
        Some(ExtendedType::Enum(_)) => {
            ctx.used_named_types_mut().record(ctx.schema, name);
            HostType::named(name, false)
        }
        Some(ExtendedType::InputObject(input)) => {
            ctx.used_named_types_mut().record(ctx.schema, name);
            let mut fields = IndexMap::new();
            for (field_name, field_def) in input.fields.iter() {
                let field_ty = field_def.ty.clone();
                let host_type = wrap_for_type(ctx, &field_ty, &mut |ctx| {
                    Ok(expand_input_named(ctx, field_ty.inner_named_type().as_str()))
                })
                .unwrap_or_else(|_| HostType::named(ARBITRARY_OBJECT_TYPE, true));
                fields.insert(field_name.to_string(), host_type);
            }
            HostType::object(fields, false)
        }
        _ => HostType::named(ARBITRARY_OBJECT_TYPE, false),
    }
}

fn wrap_for_type(
    ctx: &mut ResolveContext<'_>,
    ty: &GraphQLType,
    build_leaf: &mut dyn FnMut(&mut ResolveContext<'_>) -> Result<HostType>,
) -> Result<HostType> {
    match ty {
        GraphQLType::Named(_) => Ok(build_leaf(ctx)?.with_nullable(true)),
        GraphQLType::NonNullNamed(_) => Ok(build_leaf(ctx)?.with_nullable(false)),
        GraphQLType::List(inner) => {
            Ok(HostType::array(wrap_for_type(ctx, inner, build_leaf)?, true))
        }
        GraphQLType::NonNullList(inner) => Ok(HostType::array(
            wrap_for_type(ctx, inner, build_leaf)?,
            false,
        )),
    }
}
