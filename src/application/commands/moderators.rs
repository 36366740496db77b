// src/application/commands/moderators.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ActorDto, AuthenticatedActor, RequestMeta},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::AuditRecorder,
    },
    domain::{
        actor::{ActorId, ActorKind, ActorRepository},
        audit::{AuditAction, AuditLogEntry, AuditTarget},
    },
};

pub struct VerifyModeratorCommand {
    pub id: ActorId,
}

pub struct ModeratorCommandService {
    actor_repo: Arc<dyn ActorRepository>,
    clock: Arc<dyn Clock>,
    audit: Arc<AuditRecorder>,
}

impl ModeratorCommandService {
    pub fn new(
        actor_repo: Arc<dyn ActorRepository>,
        clock: Arc<dyn Clock>,
        audit: Arc<AuditRecorder>,
    ) -> Self {
        Self {
            actor_repo,
            clock,
            audit,
        }
    }

    /// Marks a moderator as verified, unlocking article creation and editing
    /// for them. Verifying twice is a no-op and leaves the original
    /// timestamp in place.
    pub async fn verify_moderator(
        &self,
        actor: &AuthenticatedActor,
        meta: &RequestMeta,
        command: VerifyModeratorCommand,
    ) -> ApplicationResult<ActorDto> {
        if !actor.has_capability("moderators", "verify") {
            return Err(ApplicationError::forbidden(
                "missing capability moderators:verify",
            ));
        }

        let moderator = self
            .actor_repo
            .find(ActorKind::Moderator, command.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("moderator not found"))?;

        if moderator.verified_at.is_some() {
            return Ok(moderator.into());
        }

        let verified = self
            .actor_repo
            .mark_verified(command.id, self.clock.now())
            .await?;

        let entry = AuditLogEntry::new(actor.kind, actor.id, AuditAction::VerifyModerator)
            .with_target(AuditTarget::Moderator(verified.id))
            .with_details(format!("Verified moderator: {}", verified.display_name))
            .with_request_meta(meta.ip_address.clone(), meta.user_agent.clone());
        self.audit.record(entry).await;

        Ok(verified.into())
    }
}
