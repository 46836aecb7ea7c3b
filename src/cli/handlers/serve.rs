use crate::graphql::{build_schema, run_server};
use crate::store::SharedStore;
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut settings = ctx.config.server.clone();
    if let Some(host) = host {
        settings.host = host;
    }
    if let Some(port) = port {
        settings.port = port;
    }

    let store = ctx.config.open_store()?;
    tracing::info!(
        books = store.book_count(),
        authors = store.author_count(),
        "Record store ready"
    );
    let schema = build_schema(SharedStore::new(store));

    println!(
        "Starting GraphQL server on http://{}{}",
        settings.address(),
        settings.path
    );
    if settings.graphiql {
        println!("GraphiQL: http://{}{}", settings.address(), settings.path);
    }

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &settings).await })?;
    Ok(())
}
