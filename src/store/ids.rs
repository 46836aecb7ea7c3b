use crate::error::{BookshelfError, Result};

/// Sequential id generator for one collection.
///
/// Ids are decimal strings starting at `"1"`. The counter only moves forward,
/// so deleting a record never frees its id for reuse.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start after the highest numeric id in `ids`. Non-numeric ids are
    /// ignored since the sequence can never produce them.
    pub fn after<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let last = ids
            .into_iter()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { last }
    }

    /// Hand out the next id. Fails once the counter is exhausted instead of
    /// wrapping back onto ids that may still be in use.
    pub fn next_id(&mut self) -> Result<String> {
        let next = self
            .last
            .checked_add(1)
            .ok_or_else(|| BookshelfError::Storage("id sequence exhausted".to_string()))?;
        self.last = next;
        Ok(next.to_string())
    }
}
