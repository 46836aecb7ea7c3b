//! GraphQL schema, resolvers and HTTP server for bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! bookshelf serve --port 4000
//!
//! # Execute a query from CLI
//! bookshelf query '{ books { id title author { name } } }'
//!
//! # Execute a mutation from CLI
//! bookshelf mutate 'addBook(title: "Brave New World", authorId: "1") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `updateBook`, `deleteBook`, `createBook`, `createAuthor`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema, sdl};
pub use server::{router, run_server};
pub use types::*;
