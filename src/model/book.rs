use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(
        default,
        rename = "authorId",
        alias = "author_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub author_id: Option<String>,
}

impl Book {
    pub fn new(id: String) -> Self {
        Self {
            id,
            title: None,
            author_id: None,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_author(mut self, author_id: Option<String>) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn is_by(&self, author_id: &str) -> bool {
        self.author_id.as_deref() == Some(author_id)
    }
}

/// Fields accepted when creating a book. Anything else is rejected at the
/// schema boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: Option<String>,
    pub author_id: Option<String>,
}

/// Replacement values for `update_book`.
///
/// Both fields overwrite the stored record, so `None` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author_id: Option<String>,
}
