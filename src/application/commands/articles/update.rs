// src/application/commands/articles/update.rs
use super::service::{ArticleCommandService, SLUG_CONFLICT_RETRIES, headline};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedActor, RequestMeta},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            Article, ArticleDraft, ArticleId, ArticleUpdate, NewImage,
            specifications::CanUpdateArticleSpec,
        },
        audit::{AuditAction, AuditLogEntry, AuditTarget},
        errors::DomainError,
    },
};

use super::create::ImageUpload;

pub struct UpdateArticleCommand {
    pub id: ArticleId,
    pub draft: ArticleDraft,
    /// Explicit replacement slug; when absent the slug is only re-derived
    /// if a title changed.
    pub slug: Option<String>,
    pub images: Vec<ImageUpload>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedActor,
        meta: &RequestMeta,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self
            .read_repo
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let spec = CanUpdateArticleSpec::new(&actor.capabilities, &article, &actor.display_name);
        if !spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "not allowed to update this article",
            ));
        }

        let mut draft = command.draft;
        // Only update:any may reassign the byline.
        if !actor.has_capability("articles", "update:any") {
            draft.author = Some(article.author.clone());
        }
        let merged = draft.merged_over(&article);
        let language = merged.validate()?;
        let now = self.clock.now();

        let slug_candidate = command
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let title_changed = merged.title.as_deref() != article.title.as_deref()
            || merged.title_urdu.as_deref() != article.title_urdu.as_deref();

        let mut updated = if slug_candidate.is_some() || title_changed {
            self.update_with_slug_retry(&article, slug_candidate, merged, language, now)
                .await?
        } else {
            self.write_repo
                .update(ArticleUpdate::new(article.id, merged, language, now))
                .await?
        };

        for upload in command.images {
            let path = self
                .file_store
                .store(&upload.original_name, &upload.bytes)
                .await?;
            let image = self
                .write_repo
                .add_image(
                    updated.id,
                    NewImage {
                        path,
                        original_name: Some(upload.original_name),
                        mime_type: upload.mime_type,
                        created_at: now,
                    },
                )
                .await?;
            updated.images.push(image);
        }

        let entry = AuditLogEntry::new(actor.kind, actor.id, AuditAction::Update)
            .with_target(AuditTarget::Article(updated.id))
            .with_details(format!("Updated article: {}", headline(&updated)))
            .with_request_meta(meta.ip_address.clone(), meta.user_agent.clone());
        self.audit.record(entry).await;

        Ok(updated.into())
    }

    async fn update_with_slug_retry(
        &self,
        article: &Article,
        candidate: Option<&str>,
        merged: ArticleDraft,
        language: crate::domain::article::Language,
        now: chrono::DateTime<chrono::Utc>,
    ) -> ApplicationResult<Article> {
        let mut attempt = 0;
        loop {
            let slug = self
                .slug_allocator
                .allocate(
                    candidate,
                    merged.title.as_deref(),
                    merged.title_urdu.as_deref(),
                    Some(article.id),
                )
                .await?;

            let update =
                ArticleUpdate::new(article.id, merged.clone(), language, now).with_slug(slug);

            match self.write_repo.update(update).await {
                Ok(updated) => return Ok(updated),
                Err(DomainError::Conflict(_)) if attempt < SLUG_CONFLICT_RETRIES => {
                    attempt += 1;
                    tracing::debug!(attempt, "slug conflict on update, re-allocating");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
