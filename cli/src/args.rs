//! CLI surface (spec.md §6): two subcommands, `graphql` and
//! `content-model`, each a thin wrapper around one pipeline in
//! `graphql_codegen_core`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphql-codegen", version, about = "Generates TypeScript from GraphQL documents and content-model schemas")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolves a directory of `.graphql` documents into TypeScript.
    Graphql(GraphqlArgs),
    /// Generates runtime validators from content-model JSON schemas.
    ContentModel(ContentModelArgs),
}

#[derive(Args)]
pub struct GraphqlArgs {
    /// Directory of `.graphql` files to resolve.
    pub input_dir: PathBuf,

    /// Local path, raw-SDL URL (ending in `.graphql`), or introspection
    /// endpoint URL.
    #[arg(long = "schema")]
    pub schema: String,

    /// `NAME=DIR=PREFIX` include rule for `@NAME/...` import abbreviations.
    /// May be given multiple times.
    #[arg(short = 'I', long = "include", action = clap::ArgAction::Append)]
    pub include: Vec<String>,

    /// Bearer token for introspection requests.
    #[arg(short = 't', long = "token")]
    pub token: Option<String>,

    /// Delete orphaned output files without prompting.
    #[arg(short = 'q', long = "quiet", default_value_t = false)]
    pub quiet: bool,

    /// Keep fragments with no referencing operation in this directory
    /// instead of failing validation.
    #[arg(long = "allow-unused-fragments", default_value_t = false)]
    pub allow_unused_fragments: bool,

    /// Emit `.js`-suffixed relative imports instead of extensionless ones.
    #[arg(long = "js-suffix", default_value_t = false)]
    pub js_suffix: bool,

    /// Output directory. Defaults to `input_dir` itself.
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ContentModelArgs {
    /// Content-model JSON schema files.
    #[arg(short = 'i', long = "input", required = true, num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// Output file path, or `-` for stdout.
    #[arg(short = 'o', long = "output", required = true)]
    pub output: String,

    /// Suppress informational logging.
    #[arg(short = 'q', long = "quiet", default_value_t = false)]
    pub quiet: bool,

    /// Base URL of the content-model API to fetch built-in schemas from.
    #[arg(long = "api")]
    pub api: Option<String>,
}
