use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::model::BookUpdate;
use crate::store::SharedStore;

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Schema definition language for the bookshelf API.
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

fn get_store<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single book by ID
    async fn book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Book>> {
        let store = get_store(ctx)?.read()?;
        Ok(store.get_book(&id).map(Book::from))
    }

    /// List every book
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = get_store(ctx)?.read()?;
        Ok(store.all_books().into_iter().map(Book::from).collect())
    }

    /// Get a single author by ID
    async fn author(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Author>> {
        let store = get_store(ctx)?.read()?;
        Ok(store.get_author(&id).map(Author::from))
    }

    /// List every author
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let store = get_store(ctx)?.read()?;
        Ok(store.all_authors().into_iter().map(Author::from).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book with a title and author
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        author_id: ID,
    ) -> async_graphql::Result<Book> {
        let mut store = get_store(ctx)?.write()?;
        Ok(store.add_book(title, author_id.0)?.into())
    }

    /// Replace a book's title and author. Omitted arguments clear the field.
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        author_id: Option<ID>,
    ) -> async_graphql::Result<Option<Book>> {
        let mut store = get_store(ctx)?.write()?;
        let update = BookUpdate {
            title,
            author_id: author_id.map(|a| a.0),
        };
        Ok(store.update_book(&id, update).map(Book::from))
    }

    /// Delete a book, returning it if it existed
    async fn delete_book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Book>> {
        let mut store = get_store(ctx)?.write()?;
        Ok(store.delete_book(&id).map(Book::from))
    }

    /// Create a book from an input object
    async fn create_book(
        &self,
        ctx: &Context<'_>,
        input: Option<BookInput>,
    ) -> async_graphql::Result<Book> {
        let mut store = get_store(ctx)?.write()?;
        Ok(store.create_book(input.unwrap_or_default().into())?.into())
    }

    /// Create an author from an input object
    async fn create_author(
        &self,
        ctx: &Context<'_>,
        input: Option<AuthorInput>,
    ) -> async_graphql::Result<Author> {
        let mut store = get_store(ctx)?.write()?;
        Ok(store.create_author(input.unwrap_or_default().into())?.into())
    }
}
