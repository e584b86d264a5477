//! Renders a resolved [`HostType`] to a TypeScript type expression
//! (spec.md §4.F "Field ordering" and the object-literal/alias split).

use crate::types::HostType;

/// Capitalizes the first character of an operation kind (`query` ->
/// `Query`) for building the `<Name><Kind>` family of emitted names.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Renders `ty` to TypeScript. Object literals render their fields sorted
/// by name regardless of selection order, matching spec.md's
/// determinism requirement for diffable output.
pub fn render_host_type(ty: &HostType) -> String {
    let rendered = render_inner(ty);
    if ty.nullable() {
        format!("{rendered} | null")
    } else {
        rendered
    }
}

fn render_inner(ty: &HostType) -> String {
    match ty {
        HostType::Named { name, .. } => name.clone(),
        HostType::Object { fields, .. } => {
            if fields.is_empty() {
                return "Record<string, never>".to_string();
            }
            let mut entries: Vec<(&String, &HostType)> = fields.iter().collect();
            entries.sort_by_key(|(name, _)| name.as_str());
            let body = entries
                .into_iter()
                .map(|(name, field_ty)| format!("{name}: {}", render_host_type(field_ty)))
                .collect::<Vec<_>>()
                .join("; ");
            format!("{{ {body} }}")
        }
        HostType::Array { element, .. } => {
            format!("Array<{}>", render_host_type(element))
        }
        HostType::Intersection { members, .. } => members
            .iter()
            .map(render_host_type)
            .collect::<Vec<_>>()
            .join(" & "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn renders_nullable_named_type() {
        let ty = HostType::named("string", true);
        assert_eq!(render_host_type(&ty), "string | null");
    }

    #[test]
    fn sorts_object_fields_by_name() {
        let mut fields = IndexMap::new();
        fields.insert("zeta".to_string(), HostType::named("string", false));
        fields.insert("alpha".to_string(), HostType::named("number", false));
        let ty = HostType::object(fields, false);
        assert_eq!(render_host_type(&ty), "{ alpha: number; zeta: string }");
    }

    #[test]
    fn renders_array_of_nullable_elements() {
        let ty = HostType::array(HostType::named("string", true), false);
        assert_eq!(render_host_type(&ty), "Array<string | null>");
    }

    #[test]
    fn joins_intersection_members_with_ampersand() {
        let mut fields = IndexMap::new();
        fields.insert("id".to_string(), HostType::named("string", false));
        let object = HostType::object(fields, false);
        let ty = HostType::Intersection {
            members: vec![HostType::named("UserFields", false), object],
            nullable: false,
        };
        assert_eq!(
            render_host_type(&ty),
            "UserFields & { id: string }"
        );
    }
}
