// src/domain/trash/entity.rs
use crate::domain::actor::value_objects::{ActorId, ActorKind};
use chrono::{DateTime, Utc};

/// Point-in-time snapshot of a deleted article. Written exactly once,
/// immediately before the article row is removed; never read back or
/// restored from.
#[derive(Debug, Clone)]
pub struct NewTrashRecord {
    pub article_data: serde_json::Value,
    pub deleted_by: ActorId,
    pub deleted_by_kind: ActorKind,
    pub deleted_at: DateTime<Utc>,
}
