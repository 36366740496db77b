use crate::domain::actor::entity::Actor;
use crate::domain::actor::value_objects::{ActorId, ActorKind};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ActorRepository: Send + Sync {
    async fn find(&self, kind: ActorKind, id: ActorId) -> DomainResult<Option<Actor>>;
    async fn mark_verified(&self, id: ActorId, at: DateTime<Utc>) -> DomainResult<Actor>;
}
