use graphql_codegen_core::content_model::{parse_content_model, render_validator_module, ContentModelJson};

#[test]
fn parses_and_renders_a_fixture_content_model() {
    let text = std::fs::read_to_string("tests/fixtures/content_model/article.json")
        .expect("fixture file exists");
    let model = parse_content_model("Article", &text).expect("fixture parses");

    assert_eq!(model.name, "Article");
    let ContentModelJson::Object { fields, .. } = &model.json else {
        panic!("expected an object-typed content model");
    };
    assert_eq!(fields.len(), 6);
    let status = fields.iter().find(|f| f.name == "status").unwrap();
    assert!(matches!(
        status.json,
        ContentModelJson::String { validation: Some(_), .. }
    ));

    let rendered = render_validator_module(&[model]);
    assert!(rendered.contains("export const validators"));
    assert!(rendered.contains("\"Article\":"));
    assert!(rendered.contains("[\"ARCHIVED\", \"DRAFT\", \"PUBLISHED\"].includes(value)"));
    assert!(rendered.contains("\"publishedAt\": (value) => typeof value === \"string\""));
    assert!(rendered.contains("\"authorVerified\": (value) => typeof value === \"boolean\""));
}
