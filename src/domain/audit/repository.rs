use crate::domain::actor::value_objects::{ActorId, ActorKind};
use crate::domain::audit::cursor::AuditLogCursor;
use crate::domain::audit::entity::AuditLogEntry;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Filters for the review listing. `include_noise` admits login/logout
/// rows; the UI-facing listing never sets it.
#[derive(Debug, Clone, Default)]
pub struct AuditLogFilter {
    pub actor_kind: Option<ActorKind>,
    pub actor_id: Option<ActorId>,
    pub include_noise: bool,
}

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn insert(&self, entry: AuditLogEntry) -> DomainResult<()>;

    /// Offset-paginated listing, newest first (ties broken by id), with the
    /// total row count for pagination arithmetic.
    async fn list_page(
        &self,
        filter: &AuditLogFilter,
        page: u32,
        per_page: u32,
    ) -> DomainResult<(Vec<AuditLogEntry>, u64)>;

    /// Keyset export of the full stream, login/logout included.
    async fn list_raw(
        &self,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLogEntry>, Option<AuditLogCursor>)>;
}
