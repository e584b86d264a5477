mod args;
mod commands;
mod logging;
mod prompt;

use args::{Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let quiet = match &cli.command {
        Command::Graphql(args) => args.quiet,
        Command::ContentModel(args) => args.quiet,
    };
    logging::init(quiet);

    match cli.command {
        Command::Graphql(args) => commands::graphql::run(args).await,
        Command::ContentModel(args) => commands::content_model::run(args).await,
    }
}
