mod execute;
mod init;
mod schema;
mod serve;

pub use execute::{handle_mutate, handle_query};
pub use init::handle_init;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BookshelfConfig;

/// Common context passed to command handlers that need configuration
pub struct CommandContext {
    pub config: BookshelfConfig,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig) -> Self {
        Self { config }
    }
}
