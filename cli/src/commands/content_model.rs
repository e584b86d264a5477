use crate::args::ContentModelArgs;
use anyhow::{Context, Result};
use graphql_codegen_core::content_model::{
    fetch::fetch_content_models, parse_content_model, render_validator_module,
};
use graphql_codegen_core::output::{write_if_changed, WriteOutcome};
use std::path::Path;

pub async fn run(args: ContentModelArgs) -> Result<()> {
    let mut models = Vec::new();

    for path in &args.input {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let model = parse_content_model(&name, &text)
            .with_context(|| format!("parsing content model {}", path.display()))?;
        models.push(model);
    }

    if let Some(api) = &args.api {
        let client = reqwest::Client::new();
        let builtins = fetch_content_models(&client, api).await;
        models.splice(0..0, builtins);
    }

    let rendered = render_validator_module(&models);
    tracing::info!(count = models.len(), "generated content model validators");

    if args.output == "-" {
        print!("{rendered}");
        return Ok(());
    }

    let outcome = write_if_changed(Path::new(&args.output), &rendered)
        .with_context(|| format!("writing {}", args.output))?;
    if !args.quiet {
        match outcome {
            WriteOutcome::Written => tracing::info!(output = %args.output, "wrote validator module"),
            WriteOutcome::Unchanged => tracing::info!(output = %args.output, "validator module unchanged"),
        }
    }

    Ok(())
}
