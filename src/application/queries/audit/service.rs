// src/application/queries/audit/service.rs
use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, audit::AuditLogRepository};

pub struct AuditQueryService {
    pub(super) log_repo: Arc<dyn AuditLogRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
}

impl AuditQueryService {
    pub fn new(
        log_repo: Arc<dyn AuditLogRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            log_repo,
            article_repo,
        }
    }
}
