use crate::graphql::build_schema;
use crate::store::SharedStore;
use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    execute(ctx, query, variables)
}

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    execute(ctx, query, variables)
}

fn execute(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let store = ctx.config.open_store()?;
    let schema = build_schema(SharedStore::new(store));

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Failed to parse --variables as JSON")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    if response.is_err() {
        anyhow::bail!("GraphQL request returned errors");
    }
    Ok(())
}
