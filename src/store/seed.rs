use crate::error::{BookshelfError, Result};
use crate::model::{Author, Book};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial contents of a [`RecordStore`](super::RecordStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub books: Vec<Book>,

    #[serde(default)]
    pub authors: Vec<Author>,
}

impl SeedData {
    /// The records every server starts with unless configured otherwise.
    pub fn builtin() -> Self {
        Self {
            books: vec![
                Book::new("1".to_string())
                    .with_title(Some("1984".to_string()))
                    .with_author(Some("1".to_string())),
                Book::new("2".to_string())
                    .with_title(Some("To Kill a Mockingbird".to_string()))
                    .with_author(Some("2".to_string())),
            ],
            authors: vec![
                Author::new("1".to_string()).with_name(Some("George Orwell".to_string())),
                Author::new("2".to_string()).with_name(Some("Harper Lee".to_string())),
            ],
        }
    }

    /// Load seed records from a YAML or JSON file, picked by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let seed: SeedData = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        seed.check_unique_ids()?;
        tracing::debug!(
            path = %path.display(),
            books = seed.books.len(),
            authors = seed.authors.len(),
            "Loaded seed data"
        );
        Ok(seed)
    }

    fn check_unique_ids(&self) -> Result<()> {
        if let Some(id) = first_duplicate(self.books.iter().map(|b| b.id.as_str())) {
            return Err(BookshelfError::Config(format!(
                "Seed data contains duplicate book id '{}'",
                id
            )));
        }
        if let Some(id) = first_duplicate(self.authors.iter().map(|a| a.id.as_str())) {
            return Err(BookshelfError::Config(format!(
                "Seed data contains duplicate author id '{}'",
                id
            )));
        }
        Ok(())
    }
}

fn first_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}
