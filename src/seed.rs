use crate::todo::TodoStore;
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the initial list comes from
///
/// Seed data is read once at startup and never written back.
pub struct SeedSource {
    file_path: Option<PathBuf>,
}

impl SeedSource {
    /// The built-in sample todos
    pub fn builtin() -> Self {
        Self { file_path: None }
    }

    /// A TOML file with `[[todos]]` tables
    pub fn file(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: Some(file_path.as_ref().to_path_buf()),
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn load(&self) -> Result<TodoStore> {
        let Some(path) = &self.file_path else {
            let store = TodoStore::with_sample_data();
            info!("event=seed_load module=seed source=builtin count={}", store.len());
            return Ok(store);
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file '{}'", path.display()))?;
        let store: TodoStore = toml::from_str(&content)
            .with_context(|| format!("invalid seed file '{}'", path.display()))?;
        info!(
            "event=seed_load module=seed source={} count={}",
            path.display(),
            store.len()
        );
        Ok(store)
    }
}
