// src/application/queries/audit/common.rs
use crate::{
    application::{
        dto::AuthenticatedActor,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{actor::ActorKind, audit::AuditLogFilter},
};

pub(crate) const DEFAULT_PER_PAGE: u32 = 20;
pub(crate) const MAX_PER_PAGE: u32 = 100;

pub(crate) fn normalize_page(page: Option<u32>) -> u32 {
    page.unwrap_or(1).max(1)
}

pub(crate) fn normalize_per_page(per_page: Option<u32>) -> u32 {
    per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
}

/// Scope a log query to what the actor may see. `audit:read:any` passes the
/// requested filter through untouched; `audit:read:own` forces the filter
/// onto the actor's own moderator stream, regardless of what was asked for.
pub(super) fn ensure_log_access(
    actor: &AuthenticatedActor,
    mut filter: AuditLogFilter,
) -> ApplicationResult<AuditLogFilter> {
    if actor.has_capability("audit", "read:any") {
        return Ok(filter);
    }
    if actor.has_capability("audit", "read:own") {
        filter.actor_kind = Some(ActorKind::Moderator);
        filter.actor_id = Some(actor.id);
        return Ok(filter);
    }
    Err(ApplicationError::forbidden("not allowed to read audit logs"))
}
