//! Renders a single runtime validator module mapping each content
//! model's schema `name` to a validator expression (spec.md §4.G
//! "Emission").

use super::schema::{ContentModel, ContentModelJson, ContentModelObjectField, EnumOption};
use std::fmt::Write as _;

pub fn render_validator_module(models: &[ContentModel]) -> String {
    let mut out = String::new();
    out.push_str("// GENERATED FILE - DO NOT EDIT BY HAND\n\n");
    out.push_str("export const validators: Record<string, (value: unknown) => boolean> = {\n");

    let mut sorted: Vec<&ContentModel> = models.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    for model in sorted {
        writeln!(
            out,
            "  {:?}: {},",
            model.name,
            render_validator_expr(&model.json)
        )
        .unwrap();
    }
    out.push_str("};\n");
    out
}

/// Renders the validator expression for one `json` shape. `string`
/// falls through to the plain string validator when no enum validation
/// is present, and `datetime` reuses that same string validator —
/// preserving the upstream emitter's string -> datetime fallthrough
/// behavior (spec.md §9 open question) without the implicit break.
fn render_validator_expr(json: &ContentModelJson) -> String {
    match json {
        ContentModelJson::String { validation, .. } => {
            let enum_values = validation
                .as_ref()
                .map(|v| v.enum_values.as_slice())
                .unwrap_or(&[]);
            if enum_values.is_empty() {
                string_validator()
            } else {
                enum_validator(enum_values)
            }
        }
        ContentModelJson::Datetime { .. } => string_validator(),
        ContentModelJson::Number { .. } => {
            "(value) => typeof value === \"number\"".to_string()
        }
        ContentModelJson::Boolean { .. } => {
            "(value) => typeof value === \"boolean\"".to_string()
        }
        ContentModelJson::Object { fields, .. } => object_validator(fields),
    }
}

fn string_validator() -> String {
    "(value) => typeof value === \"string\"".to_string()
}

fn enum_validator(options: &[EnumOption]) -> String {
    let mut values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    values.sort();
    let list = values
        .iter()
        .map(|v| format!("{v:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("(value) => typeof value === \"string\" && [{list}].includes(value)")
}

fn object_validator(fields: &[ContentModelObjectField]) -> String {
    let mut sorted: Vec<&ContentModelObjectField> = fields.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    let entries = sorted
        .iter()
        .map(|field| format!("{:?}: {}", field.name, render_validator_expr(&field.json)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "(value) => typeof value === \"object\" && value !== null && Object.entries({{ {entries} }}).every(([key, check]) => check((value as Record<string, unknown>)[key]))"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_model(name: &str) -> ContentModel {
        ContentModel {
            name: name.to_string(),
            label: None,
            json: ContentModelJson::String {
                kind: "short-text".to_string(),
                validation: None,
                help: None,
            },
        }
    }

    #[test]
    fn renders_a_name_to_validator_mapping() {
        let rendered = render_validator_module(&[string_model("Title")]);
        assert!(rendered.contains("export const validators"));
        assert!(rendered.contains("\"Title\": (value) => typeof value === \"string\","));
    }

    #[test]
    fn string_with_enum_validation_renders_a_closed_set_check() {
        let model = ContentModel {
            name: "Color".to_string(),
            label: None,
            json: ContentModelJson::String {
                kind: "short-text".to_string(),
                validation: Some(super::super::schema::StringValidation {
                    enum_values: vec![
                        EnumOption {
                            label: "Red".to_string(),
                            value: "red".to_string(),
                        },
                        EnumOption {
                            label: "Blue".to_string(),
                            value: "blue".to_string(),
                        },
                    ],
                }),
                help: None,
            },
        };
        let rendered = render_validator_module(&[model]);
        assert!(rendered.contains("[\"blue\", \"red\"].includes(value)"));
    }

    #[test]
    fn datetime_falls_through_to_the_string_validator() {
        let model = ContentModel {
            name: "PublishedAt".to_string(),
            label: None,
            json: ContentModelJson::Datetime {
                kind: "datetime".to_string(),
                help: None,
            },
        };
        let rendered = render_validator_module(&[model]);
        assert!(rendered.contains("\"PublishedAt\": (value) => typeof value === \"string\","));
    }

    #[test]
    fn object_renders_a_record_validator_over_its_fields() {
        let model = ContentModel {
            name: "Article".to_string(),
            label: None,
            json: ContentModelJson::Object {
                fields: vec![ContentModelObjectField {
                    name: "title".to_string(),
                    label: None,
                    json: ContentModelJson::String {
                        kind: "short-text".to_string(),
                        validation: None,
                        help: None,
                    },
                }],
                help: None,
            },
        };
        let rendered = render_validator_module(&[model]);
        assert!(rendered.contains("\"title\": (value) => typeof value === \"string\""));
        assert!(rendered.contains("Object.entries"));
    }
}
