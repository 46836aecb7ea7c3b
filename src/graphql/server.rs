use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post_service};

use crate::config::ServerSettings;
use crate::error::Result;

use super::BookshelfSchema;

/// Build the HTTP router: `POST path` executes queries, `GET path` serves the
/// GraphiQL console when enabled.
pub fn router(schema: BookshelfSchema, settings: &ServerSettings) -> Router {
    let path = settings.path.as_str();
    if settings.graphiql {
        let endpoint = settings.path.clone();
        Router::new().route(
            path,
            get(move || graphiql(endpoint.clone())).post_service(GraphQL::new(schema)),
        )
    } else {
        Router::new().route(path, post_service(GraphQL::new(schema)))
    }
}

async fn graphiql(endpoint: String) -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(&endpoint).finish())
}

/// Serve the schema until Ctrl-C.
pub async fn run_server(schema: BookshelfSchema, settings: &ServerSettings) -> Result<()> {
    let app = router(schema, settings);
    let listener = tokio::net::TcpListener::bind(settings.address()).await?;
    let local = listener.local_addr()?;

    tracing::info!(address = %local, path = %settings.path, "GraphQL server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::build_schema;
    use crate::store::{RecordStore, SharedStore};
    use serde_json::{Value, json};

    async fn spawn(settings: ServerSettings) -> String {
        let schema = build_schema(SharedStore::new(RecordStore::seeded()));
        let app = router(schema, &settings);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("{}{}", addr, settings.path)
    }

    async fn http(addr_path: &str, request: &str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let (addr, _) = addr_path.split_once('/').unwrap();
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    fn post(path: &str, body: &str) -> String {
        format!(
            "POST {} HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            path,
            body.len(),
            body
        )
    }

    fn body_json(response: &str) -> Value {
        let (_, body) = response.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    #[tokio::test]
    async fn test_post_executes_query() {
        let addr = spawn(ServerSettings::default()).await;
        let body = json!({ "query": "{ book(id: \"2\") { title } }" }).to_string();

        let response = http(&addr, &post("/graphql", &body)).await;

        assert!(response.starts_with("HTTP/1.1 200"));
        assert_eq!(
            body_json(&response),
            json!({ "data": { "book": { "title": "To Kill a Mockingbird" } } })
        );
    }

    #[tokio::test]
    async fn test_get_serves_graphiql() {
        let addr = spawn(ServerSettings::default()).await;
        let request = "GET /graphql HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n";

        let response = http(&addr, request).await;

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("graphiql"));
    }

    #[tokio::test]
    async fn test_graphiql_can_be_disabled() {
        let settings = ServerSettings {
            graphiql: false,
            ..ServerSettings::default()
        };
        let addr = spawn(settings).await;
        let request = "GET /graphql HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n";

        let response = http(&addr, request).await;

        assert!(response.starts_with("HTTP/1.1 405"));
    }
}
