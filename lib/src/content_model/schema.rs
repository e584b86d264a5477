//! Typed JSON schema model for content models (spec.md §4.G).
//!
//! Top level is `{ name, label?, json }`; `json` is a closed union tagged
//! by `type`, with `kind` carried alongside as an opaque classification
//! string — only `type` and `validation.enum` drive validator selection.

use crate::error::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ContentModel {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    pub json: ContentModelJson,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentModelJson {
    String {
        kind: String,
        #[serde(default)]
        validation: Option<StringValidation>,
        #[serde(default)]
        help: Option<String>,
    },
    Number {
        kind: String,
        #[serde(default)]
        help: Option<String>,
    },
    Boolean {
        kind: String,
        #[serde(default)]
        help: Option<String>,
    },
    Datetime {
        kind: String,
        #[serde(default)]
        help: Option<String>,
    },
    Object {
        fields: Vec<ContentModelObjectField>,
        #[serde(default)]
        help: Option<String>,
    },
}

/// A field inside an `object`-typed schema: a name/label pair plus its
/// own `json` shape. The spec restricts these to non-object schemas;
/// nothing here enforces that beyond what upstream schema sources send.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentModelObjectField {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(flatten)]
    pub json: ContentModelJson,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StringValidation {
    #[serde(rename = "enum", default)]
    pub enum_values: Vec<EnumOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumOption {
    pub label: String,
    pub value: String,
}

/// Parses one content model's JSON schema text, tagging parse failures
/// with the model name so a batch fetch can report which one failed.
pub fn parse_content_model(name: &str, json: &str) -> Result<ContentModel> {
    serde_json::from_str(json).map_err(|e| Error::ContentModelParse {
        name: name.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_with_enum_validation() {
        let json = r#"{
            "name": "Color",
            "json": {
                "type": "string",
                "kind": "short-text",
                "validation": {
                    "enum": [
                        { "label": "Red", "value": "red" },
                        { "label": "Blue", "value": "blue" }
                    ]
                }
            }
        }"#;
        let model = parse_content_model("Color", json).unwrap();
        assert_eq!(model.name, "Color");
        match model.json {
            ContentModelJson::String { validation, .. } => {
                let validation = validation.expect("enum validation present");
                assert_eq!(validation.enum_values.len(), 2);
            }
            other => panic!("expected string variant, got {other:?}"),
        }
    }

    #[test]
    fn parses_nested_object_fields() {
        let json = r#"{
            "name": "Article",
            "label": "Article",
            "json": {
                "type": "object",
                "fields": [
                    { "name": "title", "type": "string", "kind": "short-text" },
                    { "name": "publishedAt", "type": "datetime", "kind": "datetime" }
                ]
            }
        }"#;
        let model = parse_content_model("Article", json).unwrap();
        match model.json {
            ContentModelJson::Object { fields, .. } => assert_eq!(fields.len(), 2),
            other => panic!("expected object variant, got {other:?}"),
        }
    }

    #[test]
    fn reports_parse_errors_with_the_model_name() {
        let err = parse_content_model("Broken", "{ not json").unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }
}
