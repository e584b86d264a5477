use crate::args::GraphqlArgs;
use crate::prompt::ConfirmOrphanDeletion;
use anyhow::{Context, Result};
use graphql_codegen_core::directives::strip_import_directives;
use graphql_codegen_core::document::loader::load_documents;
use graphql_codegen_core::document::validation::{validate_document, ValidationOptions};
use graphql_codegen_core::emit::fragment_files::render_fragment_files;
use graphql_codegen_core::emit::operation_files::render_operation_files;
use graphql_codegen_core::emit::types_module::render_types_module;
use graphql_codegen_core::imports::build_import_registry;
use graphql_codegen_core::include_rules::parse_include_rules;
use graphql_codegen_core::output::{write_output, DeleteAllOrphans, OutputFile};
use graphql_codegen_core::resolve::resolve_document;
use graphql_codegen_core::schema::introspection::{execute_introspection, introspection_to_sdl};
use graphql_codegen_core::schema::{classify_schema_arg, parse_sdl, read_local_schema, SchemaSource};
use std::path::PathBuf;

pub async fn run(args: GraphqlArgs) -> Result<()> {
    let schema = acquire_schema(&args).await?;

    let sources = load_documents(&args.input_dir).context("reading .graphql source files")?;
    if sources.is_empty() {
        tracing::warn!(dir = %args.input_dir.display(), "no .graphql files found");
    }

    let include_rules = parse_include_rules(args.include.iter().map(String::as_str));
    let imports = build_import_registry(&sources, &args.input_dir, &include_rules)
        .context("resolving import directives")?;

    let concatenated: String = sources
        .iter()
        .map(|file| strip_import_directives(&file.text))
        .collect::<Vec<_>>()
        .join("\n");

    let options = ValidationOptions {
        allow_unused_fragments: args.allow_unused_fragments,
    };
    let document = validate_document(&schema, &concatenated, "documents", &options)
        .context("validating GraphQL documents")?;

    let resolved = resolve_document(&schema, &document, &imports)
        .context("resolving fragments and operations to host types")?;

    tracing::info!(
        fragments = resolved.fragments.len(),
        operations = resolved.operations.len(),
        "resolved document"
    );

    let mut files = Vec::new();
    files.push(OutputFile {
        relative_path: PathBuf::from(suffix("types", args.js_suffix)),
        contents: render_types_module(&schema, &resolved),
    });
    for fragment_file in render_fragment_files(&document, &resolved) {
        files.push(OutputFile {
            relative_path: PathBuf::from(format!(
                "fragments/{}",
                suffix(&fragment_file.name, args.js_suffix)
            )),
            contents: fragment_file.contents,
        });
    }
    for operation_file in render_operation_files(&document, &resolved, &imports) {
        files.push(OutputFile {
            relative_path: PathBuf::from(format!(
                "operations/{}",
                suffix(&operation_file.name, args.js_suffix)
            )),
            contents: operation_file.contents,
        });
    }

    let output_dir = args.output_dir.clone().unwrap_or_else(|| args.input_dir.clone());
    let outcomes = if args.quiet {
        write_output(&output_dir, &files, &mut DeleteAllOrphans)
    } else {
        write_output(&output_dir, &files, &mut ConfirmOrphanDeletion)
    }
    .context("writing output files")?;

    let written = outcomes
        .iter()
        .filter(|(_, outcome)| *outcome == graphql_codegen_core::output::WriteOutcome::Written)
        .count();
    tracing::info!(written, total = outcomes.len(), "wrote output");

    Ok(())
}

fn suffix(name: &str, js_suffix: bool) -> String {
    if js_suffix {
        format!("{name}.ts")
    } else {
        name.to_string()
    }
}

async fn acquire_schema(
    args: &GraphqlArgs,
) -> Result<apollo_compiler::validation::Valid<apollo_compiler::Schema>> {
    match classify_schema_arg(&args.schema) {
        SchemaSource::LocalFile(path) => {
            read_local_schema(path).context("reading local schema file")
        }
        SchemaSource::RawSdlUrl(url) => {
            let text = reqwest::get(url)
                .await
                .and_then(|r| r.error_for_status())
                .context("downloading raw SDL schema")?
                .text()
                .await
                .context("reading raw SDL schema body")?;
            parse_sdl(&text, url).context("parsing downloaded schema")
        }
        SchemaSource::IntrospectionUrl(url) => {
            let client = reqwest::Client::new();
            let introspected = execute_introspection(&client, url, args.token.as_deref())
                .await
                .context("running introspection query")?;
            let sdl = introspection_to_sdl(&introspected);
            parse_sdl(&sdl, url).context("parsing introspected schema")
        }
    }
}
