// src/infrastructure/storage.rs
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::FileStore,
};

/// Stores uploads on the local filesystem under a single directory, named
/// by a fresh UUID with the original extension preserved.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> ApplicationResult<PathBuf> {
        let relative = Path::new(path);
        // Stored paths are single flat file names; anything else is not ours.
        if relative.components().count() != 1
            || !matches!(relative.components().next(), Some(Component::Normal(_)))
        {
            return Err(ApplicationError::validation("invalid storage path"));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> ApplicationResult<String> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| ext.chars().all(char::is_alphanumeric));
        let name = match extension {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext.to_ascii_lowercase()),
            None => Uuid::new_v4().to_string(),
        };

        tokio::fs::write(self.root.join(&name), bytes)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(name)
    }

    async fn delete(&self, path: &str) -> ApplicationResult<()> {
        let full = self.resolve(path)?;
        match tokio::fs::remove_file(&full).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(err.to_string())),
        }
    }
}
