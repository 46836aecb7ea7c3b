use crate::config::{BookshelfConfig, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle_init(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    BookshelfConfig::default()
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Initialized {}", path.display());
    Ok(())
}
