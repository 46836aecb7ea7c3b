use super::{IdSequence, SeedData};
use crate::error::{BookshelfError, Result};
use crate::model::{Author, Book, BookUpdate, NewAuthor, NewBook};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Book and author collections for one process.
///
/// Lookups hand out owned copies, never references into the collections.
#[derive(Debug, Default)]
pub struct RecordStore {
    books: Vec<Book>,
    authors: Vec<Author>,
    book_ids: IdSequence,
    author_ids: IdSequence,
}

impl RecordStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in seed records.
    pub fn seeded() -> Self {
        Self::from_seed(SeedData::builtin())
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let book_ids = IdSequence::after(seed.books.iter().map(|b| b.id.as_str()));
        let author_ids = IdSequence::after(seed.authors.iter().map(|a| a.id.as_str()));
        Self {
            books: seed.books,
            authors: seed.authors,
            book_ids,
            author_ids,
        }
    }

    pub fn get_book(&self, id: &str) -> Option<Book> {
        self.books.iter().find(|b| b.id == id).cloned()
    }

    pub fn all_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    pub fn books_by_author(&self, author_id: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.is_by(author_id))
            .cloned()
            .collect()
    }

    pub fn get_author(&self, id: &str) -> Option<Author> {
        self.authors.iter().find(|a| a.id == id).cloned()
    }

    pub fn all_authors(&self) -> Vec<Author> {
        self.authors.clone()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn add_book(&mut self, title: String, author_id: String) -> Result<Book> {
        self.create_book(NewBook {
            title: Some(title),
            author_id: Some(author_id),
        })
    }

    pub fn create_book(&mut self, input: NewBook) -> Result<Book> {
        let book = Book::new(self.book_ids.next_id()?)
            .with_title(input.title)
            .with_author(input.author_id);

        tracing::info!(id = %book.id, title = ?book.title, "Creating book");
        self.books.push(book.clone());
        Ok(book)
    }

    /// Overwrite both fields of an existing book. Fields left as `None` in
    /// `update` are cleared, not kept.
    pub fn update_book(&mut self, id: &str, update: BookUpdate) -> Option<Book> {
        let book = self.books.iter_mut().find(|b| b.id == id)?;

        tracing::info!(id = %id, title = ?update.title, "Updating book");
        book.title = update.title;
        book.author_id = update.author_id;
        Some(book.clone())
    }

    pub fn delete_book(&mut self, id: &str) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.id == id)?;

        tracing::info!(id = %id, "Deleting book");
        Some(self.books.remove(pos))
    }

    pub fn create_author(&mut self, input: NewAuthor) -> Result<Author> {
        let author = Author::new(self.author_ids.next_id()?).with_name(input.name);

        tracing::info!(id = %author.id, name = ?author.name, "Creating author");
        self.authors.push(author.clone());
        Ok(author)
    }
}

/// A [`RecordStore`] shared between concurrent GraphQL requests.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<RecordStore>>,
}

impl SharedStore {
    pub fn new(store: RecordStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, RecordStore>> {
        self.inner
            .read()
            .map_err(|_| BookshelfError::Storage("record store lock poisoned".to_string()))
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, RecordStore>> {
        self.inner
            .write()
            .map_err(|_| BookshelfError::Storage("record store lock poisoned".to_string()))
    }
}
