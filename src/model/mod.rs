//! Data models for bookshelf.
//!
//! - [`Book`]: a book record, referencing its author by id
//! - [`Author`]: an author record
//! - [`NewBook`], [`NewAuthor`], [`BookUpdate`]: the allowed fields for
//!   creating and updating records

mod author;
mod book;

pub use author::{Author, NewAuthor};
pub use book::{Book, BookUpdate, NewBook};
