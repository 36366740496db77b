use crate::domain::errors::DomainResult;
use crate::domain::trash::entity::NewTrashRecord;
use async_trait::async_trait;

#[async_trait]
pub trait TrashRepository: Send + Sync {
    async fn insert(&self, record: NewTrashRecord) -> DomainResult<()>;
}
