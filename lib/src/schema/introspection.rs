//! Introspection query execution and SDL conversion.
//!
//! Grounded in
//! `examples/trevor-scheer-graphql-analyzer/crates/graphql-introspect`:
//! same shape (a standard introspection query, a typed response, and a
//! pure SDL-rendering pass), reworked onto this crate's error type and
//! wired through `reqwest` directly instead of a dedicated crate.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Standard introspection query. `descriptions:false` and
/// `inputValueDeprecation:false` are passed as variables at the call site
/// (spec.md §6) to keep the document itself stable across schemas.
pub const INTROSPECTION_QUERY: &str = r"
query IntrospectionQuery($descriptions: Boolean = true, $inputValueDeprecation: Boolean = false) {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types { ...FullType }
    directives {
      name
      description @include(if: $descriptions)
      locations
      args(includeDeprecated: $inputValueDeprecation) { ...InputValue }
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description @include(if: $descriptions)
  fields(includeDeprecated: true) {
    name
    description @include(if: $descriptions)
    args(includeDeprecated: $inputValueDeprecation) { ...InputValue }
    type { ...TypeRef }
    isDeprecated
    deprecationReason
  }
  inputFields(includeDeprecated: $inputValueDeprecation) { ...InputValue }
  interfaces { ...TypeRef }
  enumValues(includeDeprecated: true) {
    name
    description @include(if: $descriptions)
    isDeprecated
    deprecationReason
  }
  possibleTypes { ...TypeRef }
}

fragment InputValue on __InputValue {
  name
  description @include(if: $descriptions)
  type { ...TypeRef }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType { kind name }
            }
          }
        }
      }
    }
  }
}
";

#[derive(Debug, Deserialize)]
pub struct IntrospectionEnvelope {
    pub data: Option<IntrospectionData>,
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

#[derive(Debug, Deserialize)]
pub struct IntrospectionSchema {
    #[serde(rename = "queryType")]
    pub query_type: Option<NamedRef>,
    #[serde(rename = "mutationType")]
    pub mutation_type: Option<NamedRef>,
    #[serde(rename = "subscriptionType")]
    pub subscription_type: Option<NamedRef>,
    pub types: Vec<IntrospectionType>,
    #[serde(default)]
    pub directives: Vec<IntrospectionDirective>,
}

#[derive(Debug, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct IntrospectionDirective {
    pub name: String,
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
}

#[derive(Debug, Deserialize)]
pub struct IntrospectionType {
    pub kind: String,
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<IntrospectionField>>,
    #[serde(rename = "inputFields", default)]
    pub input_fields: Option<Vec<IntrospectionInputValue>>,
    #[serde(rename = "enumValues", default)]
    pub enum_values: Option<Vec<IntrospectionEnumValue>>,
}

#[derive(Debug, Deserialize)]
pub struct IntrospectionField {
    pub name: String,
    pub args: Vec<IntrospectionInputValue>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

#[derive(Debug, Deserialize)]
pub struct IntrospectionInputValue {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

#[derive(Debug, Deserialize)]
pub struct IntrospectionEnumValue {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypeRef {
    pub kind: String,
    pub name: Option<String>,
    #[serde(rename = "ofType")]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// Renders this type reference back to GraphQL type syntax
    /// (`[String!]!`-style), used for directive argument signatures in the
    /// emitted SDL.
    pub fn to_type_string(&self) -> String {
        match self.kind.as_str() {
            "NON_NULL" => format!(
                "{}!",
                self.of_type.as_ref().expect("NON_NULL has ofType").to_type_string()
            ),
            "LIST" => format!(
                "[{}]",
                self.of_type.as_ref().expect("LIST has ofType").to_type_string()
            ),
            _ => self.name.clone().unwrap_or_default(),
        }
    }
}

const BUILTIN_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "ID"];
const BUILTIN_DIRECTIVES: &[&str] = &["skip", "include", "deprecated", "specifiedBy"];

/// Executes the introspection query against `url`, with an optional bearer
/// token (spec.md §6 `-t/--token`).
pub async fn execute_introspection(
    client: &reqwest::Client,
    url: &str,
    token: Option<&str>,
) -> Result<IntrospectionSchema> {
    let mut request = client.post(url).json(&serde_json::json!({
        "query": INTROSPECTION_QUERY,
        "variables": { "descriptions": false, "inputValueDeprecation": false },
    }));
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request
        .send()
        .await
        .map_err(|e| Error::SchemaFetch(format!("{url}: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::SchemaFetch(format!(
            "{url}: HTTP {}",
            response.status()
        )));
    }

    let envelope: IntrospectionEnvelope = response
        .json()
        .await
        .map_err(|e| Error::SchemaFetch(format!("{url}: invalid introspection response: {e}")))?;

    if !envelope.errors.is_empty() {
        let messages = envelope
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(Error::SchemaFetch(format!("{url}: {messages}")));
    }

    envelope
        .data
        .map(|d| d.schema)
        .ok_or_else(|| Error::SchemaFetch(format!("{url}: introspection response had no data")))
}

/// Converts an introspection result into SDL text, suitable for
/// [`super::parse_sdl`]. Filters built-in scalars, introspection types
/// (`__*`), and built-in directives, matching
/// `graphql-introspect::introspection_to_sdl`'s filtering rules.
pub fn introspection_to_sdl(schema: &IntrospectionSchema) -> String {
    let mut sdl = String::new();

    let needs_schema_def = schema.query_type.as_ref().is_some_and(|t| t.name != "Query")
        || schema
            .mutation_type
            .as_ref()
            .is_some_and(|t| t.name != "Mutation")
        || schema
            .subscription_type
            .as_ref()
            .is_some_and(|t| t.name != "Subscription");

    if needs_schema_def {
        sdl.push_str("schema {\n");
        if let Some(t) = &schema.query_type {
            writeln!(sdl, "  query: {}", t.name).unwrap();
        }
        if let Some(t) = &schema.mutation_type {
            writeln!(sdl, "  mutation: {}", t.name).unwrap();
        }
        if let Some(t) = &schema.subscription_type {
            writeln!(sdl, "  subscription: {}", t.name).unwrap();
        }
        sdl.push_str("}\n\n");
    }

    for directive in &schema.directives {
        if BUILTIN_DIRECTIVES.contains(&directive.name.as_str()) {
            continue;
        }
        write!(sdl, "directive @{}", directive.name).unwrap();
        if !directive.args.is_empty() {
            sdl.push('(');
            for (i, arg) in directive.args.iter().enumerate() {
                if i > 0 {
                    sdl.push_str(", ");
                }
                write!(sdl, "{}: {}", arg.name, arg.type_ref.to_type_string()).unwrap();
            }
            sdl.push(')');
        }
        sdl.push_str(" on FIELD\n\n");
    }

    let mut types: Vec<_> = schema
        .types
        .iter()
        .filter(|t| {
            let name = t.name.as_deref().unwrap_or_default();
            !name.starts_with("__") && !BUILTIN_SCALARS.contains(&name)
        })
        .collect();
    types.sort_by(|a, b| a.name.cmp(&b.name));

    for ty in types {
        write_type(&mut sdl, ty);
    }

    sdl
}

fn write_type(sdl: &mut String, ty: &IntrospectionType) {
    let Some(name) = &ty.name else { return };
    match ty.kind.as_str() {
        "OBJECT" => {
            writeln!(sdl, "type {name} {{").unwrap();
            for field in ty.fields.as_deref().unwrap_or_default() {
                writeln!(sdl, "  {}: {}", field.name, field.type_ref.to_type_string()).unwrap();
            }
            sdl.push_str("}\n\n");
        }
        "INPUT_OBJECT" => {
            writeln!(sdl, "input {name} {{").unwrap();
            for field in ty.input_fields.as_deref().unwrap_or_default() {
                writeln!(sdl, "  {}: {}", field.name, field.type_ref.to_type_string()).unwrap();
            }
            sdl.push_str("}\n\n");
        }
        "ENUM" => {
            writeln!(sdl, "enum {name} {{").unwrap();
            for value in ty.enum_values.as_deref().unwrap_or_default() {
                writeln!(sdl, "  {}", value.name).unwrap();
            }
            sdl.push_str("}\n\n");
        }
        "SCALAR" => {
            writeln!(sdl, "scalar {name}\n").unwrap();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ref_renders_nested_wrappers() {
        let inner = TypeRef {
            kind: "SCALAR".into(),
            name: Some("String".into()),
            of_type: None,
        };
        let non_null_inner = TypeRef {
            kind: "NON_NULL".into(),
            name: None,
            of_type: Some(Box::new(inner)),
        };
        let list = TypeRef {
            kind: "LIST".into(),
            name: None,
            of_type: Some(Box::new(non_null_inner)),
        };
        let non_null_list = TypeRef {
            kind: "NON_NULL".into(),
            name: None,
            of_type: Some(Box::new(list)),
        };
        assert_eq!(non_null_list.to_type_string(), "[String!]!");
    }

    #[test]
    fn sdl_omits_builtins() {
        let schema = IntrospectionSchema {
            query_type: Some(NamedRef { name: "Query".into() }),
            mutation_type: None,
            subscription_type: None,
            types: vec![
                IntrospectionType {
                    kind: "SCALAR".into(),
                    name: Some("String".into()),
                    fields: None,
                    input_fields: None,
                    enum_values: None,
                },
                IntrospectionType {
                    kind: "OBJECT".into(),
                    name: Some("__Type".into()),
                    fields: Some(vec![]),
                    input_fields: None,
                    enum_values: None,
                },
                IntrospectionType {
                    kind: "OBJECT".into(),
                    name: Some("Widget".into()),
                    fields: Some(vec![]),
                    input_fields: None,
                    enum_values: None,
                },
            ],
            directives: vec![],
        };
        let sdl = introspection_to_sdl(&schema);
        assert!(!sdl.contains("scalar String"));
        assert!(!sdl.contains("__Type"));
        assert!(sdl.contains("type Widget"));
    }
}
