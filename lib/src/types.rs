//! Host-type model (spec.md §3, §4.C) — the algebraic type describing what
//! will be emitted in the target host language.

use indexmap::IndexMap;
use serde::Serialize;

/// Name of the opaque alias emitted for any scalar outside the built-in
/// map (spec.md §3 "Built-in scalar map").
pub const ARBITRARY_OBJECT_TYPE: &str = "ArbitraryObjectType";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum HostType {
    Named {
        name: String,
        nullable: bool,
    },
    Object {
        /// Ordered by insertion; the emitter sorts by field name separately
        /// when rendering (spec.md §4.F "Field ordering").
        fields: IndexMap<String, HostType>,
        nullable: bool,
        /// Hint carried from the source's `asNamed` flag. Unused by this
        /// pipeline (see DESIGN.md) but kept on the type so a future
        /// emitter target can act on it without a data-model change.
        as_named: Option<String>,
    },
    Array {
        element: Box<HostType>,
        nullable: bool,
    },
    Intersection {
        /// First spread first, local object last (spec.md §4.C invariant).
        members: Vec<HostType>,
        nullable: bool,
    },
}

impl HostType {
    pub fn named(name: impl Into<String>, nullable: bool) -> Self {
        HostType::Named {
            name: name.into(),
            nullable,
        }
    }

    pub fn object(fields: IndexMap<String, HostType>, nullable: bool) -> Self {
        HostType::Object {
            fields,
            nullable,
            as_named: None,
        }
    }

    pub fn array(element: HostType, nullable: bool) -> Self {
        HostType::Array {
            element: Box::new(element),
            nullable,
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            HostType::Named { nullable, .. }
            | HostType::Object { nullable, .. }
            | HostType::Array { nullable, .. }
            | HostType::Intersection { nullable, .. } => *nullable,
        }
    }

    /// Returns a copy with nullability forced to `false`. Used for the
    /// "top-level hack" (spec.md §3 invariant): operation results,
    /// variables objects, and fragment bodies are never nullable at the
    /// top level regardless of the GraphQL wrapper.
    pub fn force_non_nullable(self) -> Self {
        match self {
            HostType::Named { name, .. } => HostType::Named {
                name,
                nullable: false,
            },
            HostType::Object {
                fields, as_named, ..
            } => HostType::Object {
                fields,
                nullable: false,
                as_named,
            },
            HostType::Array { element, .. } => HostType::Array {
                element,
                nullable: false,
            },
            HostType::Intersection { members, .. } => HostType::Intersection {
                members,
                nullable: false,
            },
        }
    }

    /// Returns a copy with the top-level nullable flag set to `nullable`,
    /// leaving any nested types untouched. Used by the resolver when
    /// wrapping a selection's converted type in the field's own
    /// nullability (spec.md §4.E "Type wrapping").
    pub fn with_nullable(self, nullable: bool) -> Self {
        match self {
            HostType::Named { name, .. } => HostType::Named { name, nullable },
            HostType::Object { fields, as_named, .. } => HostType::Object {
                fields,
                nullable,
                as_named,
            },
            HostType::Array { element, .. } => HostType::Array { element, nullable },
            HostType::Intersection { members, .. } => HostType::Intersection { members, nullable },
        }
    }

    /// `true` when this type renders as a literal object/interface body
    /// rather than a type alias — the "starts with `{`?" toggle from
    /// spec.md §4.F.
    pub fn renders_as_object_literal(&self) -> bool {
        matches!(self, HostType::Object { .. })
    }
}

/// Maps a GraphQL built-in scalar name to its host scalar, or `None` for
/// any custom scalar (caller falls back to [`ARBITRARY_OBJECT_TYPE`]).
pub fn builtin_scalar(name: &str) -> Option<&'static str> {
    match name {
        "String" => Some("string"),
        "Int" => Some("number"),
        "Float" => Some("number"),
        "Boolean" => Some("boolean"),
        "ID" => Some("string"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_non_nullable_clears_only_the_top_level_flag() {
        let inner = HostType::named("String", true);
        let arr = HostType::array(inner.clone(), true).force_non_nullable();
        assert!(!arr.nullable());
        if let HostType::Array { element, .. } = arr {
            assert!(element.nullable(), "inner nullability must be untouched");
        } else {
            panic!("expected array");
        }
    }

    #[test]
    fn builtin_scalar_map_matches_spec() {
        assert_eq!(builtin_scalar("String"), Some("string"));
        assert_eq!(builtin_scalar("Int"), Some("number"));
        assert_eq!(builtin_scalar("Float"), Some("number"));
        assert_eq!(builtin_scalar("Boolean"), Some("boolean"));
        assert_eq!(builtin_scalar("ID"), Some("string"));
        assert_eq!(builtin_scalar("DateTime"), None);
    }
}
