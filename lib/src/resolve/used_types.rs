//! Tracks the transitive closure of named schema types (enums and input
//! objects) touched while resolving fragments, operations, and variable
//! types (spec.md §4.E "Used named types").
//!
//! The emitter needs every enum and input object that appears anywhere in
//! the generated output, not just the ones referenced directly by an
//! operation's root selection, so each conversion records what it visits
//! here as it walks the schema.

use apollo_compiler::validation::Valid;
use apollo_compiler::Schema;
use indexmap::{IndexMap, IndexSet};

#[derive(Debug, Default, Clone)]
pub struct UsedNamedTypes {
    pub enums: IndexSet<String>,
    pub input_objects: IndexSet<String>,
}

impl UsedNamedTypes {
    /// Records that `name` was touched, and if it's an enum or input
    /// object, recurses into its members/fields so dependency chains
    /// (input object A referencing input object B) are fully captured.
    pub fn record(&mut self, schema: &Valid<Schema>, name: &str) {
        use apollo_compiler::schema::ExtendedType;

        let Some(extended) = schema.types.get(name) else {
            return;
        };

        match extended {
            ExtendedType::Enum(_) => {
                if self.enums.insert(name.to_string()) {
                    // leaf: nothing further to recurse into.
                }
            }
            ExtendedType::InputObject(input) => {
                if self.input_objects.insert(name.to_string()) {
                    for field in input.fields.values() {
                        self.record(schema, field.ty.inner_named_type().as_str());
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sets_are_empty() {
        let used = UsedNamedTypes::default();
        assert!(used.enums.is_empty());
        assert!(used.input_objects.is_empty());
    }
}
