//! In-memory record storage for bookshelf.
//!
//! All books and authors live in a single [`RecordStore`]. The GraphQL layer
//! shares it between requests as a [`SharedStore`] and takes the lock once
//! per operation, so each lookup or mutation runs to completion before the
//! next one starts.
//!
//! ## Components
//!
//! - [`RecordStore`]: the two collections plus their id sequences
//! - [`IdSequence`]: per-collection id counter that never hands out an id twice
//! - [`SeedData`]: the records a store starts with

mod ids;
mod record_store;
mod seed;

pub use ids::IdSequence;
pub use record_store::{RecordStore, SharedStore};
pub use seed::SeedData;
