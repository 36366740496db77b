// src/application/commands/articles/remove_image.rs
use super::service::ArticleCommandService;
use crate::{
    application::{
        dto::{AuthenticatedActor, RequestMeta},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ImageId, specifications::CanRemoveImageSpec},
        audit::{AuditAction, AuditLogEntry, AuditTarget},
    },
};

pub struct RemoveImageCommand {
    pub article_id: ArticleId,
    pub image_id: ImageId,
}

impl ArticleCommandService {
    pub async fn remove_image(
        &self,
        actor: &AuthenticatedActor,
        meta: &RequestMeta,
        command: RemoveImageCommand,
    ) -> ApplicationResult<()> {
        let image = self
            .read_repo
            .find_image(command.image_id)
            .await?
            .filter(|image| image.article_id == command.article_id)
            .ok_or_else(|| ApplicationError::not_found("image not found"))?;

        let article = self
            .read_repo
            .find_by_id(command.article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let spec = CanRemoveImageSpec::new(&actor.capabilities, &article, &actor.display_name);
        if !spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "not allowed to delete this image",
            ));
        }

        if let Err(err) = self.file_store.delete(&image.path).await {
            tracing::warn!(error = %err, path = image.path, "failed to remove stored image file");
        }
        self.write_repo.delete_image(image.id).await?;

        let entry = AuditLogEntry::new(actor.kind, actor.id, AuditAction::DeleteImage)
            .with_target(AuditTarget::Image(image.id))
            .with_details(format!(
                "Deleted image {} from article {}",
                image
                    .original_name
                    .as_deref()
                    .unwrap_or_else(|| image.path.as_str()),
                article.slug.as_str()
            ))
            .with_request_meta(meta.ip_address.clone(), meta.user_agent.clone());
        self.audit.record(entry).await;

        Ok(())
    }
}
