// src/application/commands/articles/create.rs
use super::{
    capability::ensure_capability,
    service::{ArticleCommandService, SLUG_CONFLICT_RETRIES, headline},
};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedActor, RequestMeta},
        error::ApplicationResult,
    },
    domain::{
        actor::ActorKind,
        article::{Article, ArticleDraft, NewArticle, NewImage},
        audit::{AuditAction, AuditLogEntry, AuditTarget, LanguageCounters},
        errors::DomainError,
    },
};

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub original_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

pub struct CreateArticleCommand {
    pub draft: ArticleDraft,
    /// Explicit slug candidate; when absent the slug is derived from the
    /// titles.
    pub slug: Option<String>,
    pub images: Vec<ImageUpload>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedActor,
        meta: &RequestMeta,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        let mut draft = command.draft;
        // Moderators always publish under their own name; that name is
        // also the ownership key for later edits.
        if actor.kind == ActorKind::Moderator || draft.author.is_none() {
            draft.author = Some(actor.display_name.clone());
        }
        let language = draft.validate()?;
        let now = self.clock.now();

        let candidate = command
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let mut created = self
            .insert_with_slug_retry(candidate, draft, language, now)
            .await?;

        for upload in command.images {
            let path = self
                .file_store
                .store(&upload.original_name, &upload.bytes)
                .await?;
            let image = self
                .write_repo
                .add_image(
                    created.id,
                    NewImage {
                        path,
                        original_name: Some(upload.original_name),
                        mime_type: upload.mime_type,
                        created_at: now,
                    },
                )
                .await?;
            created.images.push(image);
        }

        let mut entry = AuditLogEntry::new(actor.kind, actor.id, AuditAction::Create)
            .with_target(AuditTarget::Article(created.id))
            .with_details(format!("Created article: {}", headline(&created)))
            .with_request_meta(meta.ip_address.clone(), meta.user_agent.clone());
        if actor.kind == ActorKind::Moderator {
            entry = entry.with_counters(LanguageCounters::for_language(created.language));
        }
        self.audit.record(entry).await;

        Ok(created.into())
    }

    /// The allocator's existence check and the insert are not one atomic
    /// step; the unique index on `slug` closes the race and a conflicting
    /// insert re-allocates and retries a bounded number of times.
    async fn insert_with_slug_retry(
        &self,
        candidate: Option<&str>,
        draft: ArticleDraft,
        language: crate::domain::article::Language,
        now: chrono::DateTime<chrono::Utc>,
    ) -> ApplicationResult<Article> {
        let mut attempt = 0;
        loop {
            let slug = self
                .slug_allocator
                .allocate(
                    candidate,
                    draft.title.as_deref(),
                    draft.title_urdu.as_deref(),
                    None,
                )
                .await?;

            let new_article = NewArticle {
                slug,
                draft: draft.clone(),
                language,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_article).await {
                Ok(article) => return Ok(article),
                Err(DomainError::Conflict(_)) if attempt < SLUG_CONFLICT_RETRIES => {
                    attempt += 1;
                    tracing::debug!(attempt, "slug conflict on insert, re-allocating");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
