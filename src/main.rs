use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    let config = match &cli.config {
        Some(path) => BookshelfConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => BookshelfConfig::discover(&cwd).context("Failed to load config")?,
    };

    let log_file = cli.log_file.clone().or_else(|| config.logging.file.clone());
    bookshelf::logging::init(cli.verbose, log_file);

    let ctx = CommandContext::new(config);
    match cli.command {
        Commands::Init { force } => handle_init(&cwd, force),
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(),
    }
}
