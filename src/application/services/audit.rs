// src/application/services/audit.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::audit::{AuditLogEntry, AuditLogRepository};

/// Appends one attributable record per privileged mutation. The write is
/// synchronous with the triggering request but best-effort: a failed log
/// write never rolls back the mutation it describes, it is surfaced to
/// operators through the log stream instead.
pub struct AuditRecorder {
    repo: Arc<dyn AuditLogRepository>,
    clock: Arc<dyn Clock>,
}

impl AuditRecorder {
    pub fn new(repo: Arc<dyn AuditLogRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn record(&self, mut entry: AuditLogEntry) {
        if entry.created_at.is_none() {
            entry.created_at = Some(self.clock.now());
        }

        let action = entry.action;
        let actor_kind = entry.actor_kind;
        let actor_id = i64::from(entry.actor_id);

        if let Err(err) = self.repo.insert(entry).await {
            tracing::warn!(
                error = %err,
                action = action.as_str(),
                actor_kind = actor_kind.as_str(),
                actor_id,
                "failed to write audit log entry"
            );
        }
    }
}
