// src/application/queries/audit/export.rs
use super::{common::normalize_per_page, service::AuditQueryService};
use crate::{
    application::{
        dto::{AuditLogEntryDto, AuthenticatedActor, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::audit::AuditLogCursor,
};

#[derive(Debug, Clone, Default)]
pub struct ExportLogsQuery {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl AuditQueryService {
    /// Raw keyset export of the complete stream, login/logout included.
    /// Admin-only; the per-moderator scoped view goes through the listing.
    pub async fn export_logs(
        &self,
        actor: &AuthenticatedActor,
        query: ExportLogsQuery,
    ) -> ApplicationResult<CursorPage<AuditLogEntryDto>> {
        if !actor.has_capability("audit", "read:any") {
            return Err(ApplicationError::forbidden(
                "not allowed to export audit logs",
            ));
        }

        let limit = normalize_per_page(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(AuditLogCursor::decode)
            .transpose()?;

        let (entries, next) = self.log_repo.list_raw(limit, cursor).await?;

        let items = entries.into_iter().map(AuditLogEntryDto::from).collect();
        Ok(CursorPage::new(items, next.map(|c| c.encode())))
    }
}
