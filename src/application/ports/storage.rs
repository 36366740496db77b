// src/application/ports/storage.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// File/image storage collaborator. The core never inspects file bytes;
/// it stores what it is handed and deletes by the returned path.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist the bytes and return a storage-relative path.
    async fn store(&self, original_name: &str, bytes: &[u8]) -> ApplicationResult<String>;
    async fn delete(&self, path: &str) -> ApplicationResult<()>;
}
