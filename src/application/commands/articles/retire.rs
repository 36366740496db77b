// src/application/commands/articles/retire.rs
use super::service::{ArticleCommandService, headline};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedActor, RequestMeta},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, specifications::CanDeleteArticleSpec},
        audit::{AuditAction, AuditLogEntry, AuditTarget},
        trash::NewTrashRecord,
    },
};

pub struct RetireArticleCommand {
    pub id: ArticleId,
}

impl ArticleCommandService {
    /// Snapshot-then-delete: the full article JSON lands in the trash table
    /// before the row disappears. There is no restore path; the snapshot is
    /// for operator forensics.
    pub async fn retire_article(
        &self,
        actor: &AuthenticatedActor,
        meta: &RequestMeta,
        command: RetireArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self
            .read_repo
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let spec = CanDeleteArticleSpec::new(&actor.capabilities, &article, &actor.display_name);
        if !spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "not allowed to delete this article",
            ));
        }

        let details = format!("Deleted article: {}", headline(&article));
        let image_paths: Vec<String> =
            article.images.iter().map(|img| img.path.clone()).collect();

        let snapshot = serde_json::to_value(ArticleDto::from(article.clone()))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        self.trash_repo
            .insert(NewTrashRecord {
                article_data: snapshot,
                deleted_by: actor.id,
                deleted_by_kind: actor.kind,
                deleted_at: self.clock.now(),
            })
            .await?;

        self.write_repo.delete(article.id).await?;

        // Stored files are cleaned up after the row is gone; a failed unlink
        // leaves an orphan on disk, not a dangling row.
        for path in image_paths {
            if let Err(err) = self.file_store.delete(&path).await {
                tracing::warn!(error = %err, path, "failed to remove stored image file");
            }
        }

        let entry = AuditLogEntry::new(actor.kind, actor.id, AuditAction::Delete)
            .with_target(AuditTarget::Article(article.id))
            .with_details(details)
            .with_request_meta(meta.ip_address.clone(), meta.user_agent.clone());
        self.audit.record(entry).await;

        Ok(())
    }
}
