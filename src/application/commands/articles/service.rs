// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::{storage::FileStore, time::Clock},
        services::AuditRecorder,
    },
    domain::{
        article::{Article, ArticleReadRepository, ArticleWriteRepository, services::SlugAllocator},
        trash::TrashRepository,
    },
};

/// How many times a write is retried when the slug unique constraint
/// trips underneath the allocator (concurrent creates with the same
/// title).
pub(super) const SLUG_CONFLICT_RETRIES: u32 = 3;

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) trash_repo: Arc<dyn TrashRepository>,
    pub(super) slug_allocator: Arc<SlugAllocator>,
    pub(super) file_store: Arc<dyn FileStore>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) audit: Arc<AuditRecorder>,
}

/// Display name used in audit details: the English title when set,
/// otherwise the Urdu one, otherwise the slug.
pub(super) fn headline(article: &Article) -> &str {
    article
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| {
            article
                .title_urdu
                .as_deref()
                .filter(|t| !t.trim().is_empty())
        })
        .unwrap_or_else(|| article.slug.as_str())
}

impl ArticleCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        trash_repo: Arc<dyn TrashRepository>,
        slug_allocator: Arc<SlugAllocator>,
        file_store: Arc<dyn FileStore>,
        clock: Arc<dyn Clock>,
        audit: Arc<AuditRecorder>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            trash_repo,
            slug_allocator,
            file_store,
            clock,
            audit,
        }
    }
}
