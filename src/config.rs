use crate::error::{BookshelfError, Result};
use crate::store::{RecordStore, SeedData};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookshelf.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_path() -> String {
    "/graphql".to_string()
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Start with the built-in books and authors
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Load the initial records from this file instead (relative to the
    /// config file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            seed_file: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl BookshelfConfig {
    /// Load the config file at `path`, resolving relative paths inside it
    /// against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: BookshelfConfig = serde_yaml::from_str(&content)?;
        let base = path
            .parent()
            .ok_or_else(|| BookshelfError::Config("Config file has no parent directory".to_string()))?;

        if let Some(seed_file) = config.store.seed_file.take() {
            config.store.seed_file = Some(base.join(seed_file));
        }
        if let Some(log_file) = config.logging.file.take() {
            config.logging.file = Some(base.join(log_file));
        }
        config.validate()?;
        Ok(config)
    }

    /// Search upward from `start_path` for a config file. Falls back to the
    /// defaults when there is none.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using config file");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.server.path.starts_with('/') {
            return Err(BookshelfError::Config(format!(
                "server.path must start with '/', got '{}'",
                self.server.path
            )));
        }
        // axum reserves these for captures and wildcards, and panics on them
        // in a static route.
        let reserved = self.server.path.split('/').any(|segment| {
            segment.starts_with(':')
                || segment.starts_with('*')
                || segment.contains(['{', '}'])
        });
        if reserved {
            return Err(BookshelfError::Config(format!(
                "server.path must be a static path without ':', '*', '{{' or '}}' segments, got '{}'",
                self.server.path
            )));
        }
        Ok(())
    }

    /// Build the record store described by the `store` section.
    pub fn open_store(&self) -> Result<RecordStore> {
        if let Some(path) = &self.store.seed_file {
            return Ok(RecordStore::from_seed(SeedData::load(path)?));
        }
        if self.store.seed {
            Ok(RecordStore::seeded())
        } else {
            Ok(RecordStore::new())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
