use crate::model::{self, Author as ModelAuthor, Book as ModelBook};
use crate::store::SharedStore;
use async_graphql::{ComplexObject, Context, ID, InputObject, SimpleObject};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: ID,
    pub title: Option<String>,
    pub author_id: Option<ID>,
}

#[ComplexObject]
impl Book {
    /// The referenced author, or null when the id is unset or dangling
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let Some(author_id) = &self.author_id else {
            return Ok(None);
        };
        let store = ctx.data::<SharedStore>()?.read()?;
        Ok(store.get_author(author_id).map(Author::from))
    }
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Self {
            id: ID(b.id),
            title: b.title,
            author_id: b.author_id.map(ID),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: Option<String>,
}

#[ComplexObject]
impl Author {
    /// Books that reference this author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = ctx.data::<SharedStore>()?.read()?;
        Ok(store
            .books_by_author(&self.id)
            .into_iter()
            .map(Book::from)
            .collect())
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: ID(a.id),
            name: a.name,
        }
    }
}

#[derive(InputObject, Default)]
pub struct BookInput {
    pub title: Option<String>,
    pub author_id: Option<ID>,
}

impl From<BookInput> for model::NewBook {
    fn from(input: BookInput) -> Self {
        Self {
            title: input.title,
            author_id: input.author_id.map(|id| id.0),
        }
    }
}

#[derive(InputObject, Default)]
pub struct AuthorInput {
    pub name: Option<String>,
}

impl From<AuthorInput> for model::NewAuthor {
    fn from(input: AuthorInput) -> Self {
        Self { name: input.name }
    }
}
