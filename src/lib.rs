//! # Bookshelf - a small in-memory GraphQL API
//!
//! Bookshelf serves books and authors over GraphQL. Records live in memory
//! only: every start begins from the same seed data and nothing is persisted.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API and GraphiQL on http://127.0.0.1:4000/graphql
//! bookshelf serve
//!
//! # Run a one-off query against the seed data
//! bookshelf query '{ book(id: "1") { title author { name } } }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Book, Author)
//! - [`store`]: In-memory record store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.yml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server around it.
pub mod graphql;

pub mod logging;

/// Data models for books and authors.
pub mod model;

/// In-memory record store.
pub mod store;
