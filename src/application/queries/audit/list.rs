// src/application/queries/audit/list.rs
use std::collections::HashMap;

use super::{
    common::{ensure_log_access, normalize_page, normalize_per_page},
    service::AuditQueryService,
};
use crate::{
    application::{
        dto::{ArticleRefDto, AuditLogEntryDto, AuthenticatedActor, Page},
        error::ApplicationResult,
    },
    domain::{
        article::ArticleId,
        audit::{AuditLogFilter, AuditTarget},
    },
};

const LIST_BASE_PATH: &str = "/api/v1/logs";

#[derive(Debug, Clone, Default)]
pub struct ListLogsQuery {
    pub filter: AuditLogFilter,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl AuditQueryService {
    /// Review listing: newest first, login/logout hidden, article targets
    /// resolved to their current title and slug in one batch lookup.
    pub async fn list_logs(
        &self,
        actor: &AuthenticatedActor,
        query: ListLogsQuery,
    ) -> ApplicationResult<Page<AuditLogEntryDto>> {
        let mut filter = ensure_log_access(actor, query.filter)?;
        filter.include_noise = false;

        let page = normalize_page(query.page);
        let per_page = normalize_per_page(query.per_page);

        let (entries, total) = self.log_repo.list_page(&filter, page, per_page).await?;

        let article_ids: Vec<ArticleId> = entries
            .iter()
            .filter_map(|entry| match entry.target {
                Some(AuditTarget::Article(id)) => Some(id),
                _ => None,
            })
            .collect();

        let summaries = if article_ids.is_empty() {
            HashMap::new()
        } else {
            self.article_repo
                .find_summaries_by_ids(&article_ids)
                .await?
                .into_iter()
                .map(|summary| (summary.id, summary))
                .collect()
        };

        let data = entries
            .into_iter()
            .map(|entry| {
                let target = entry.target;
                let mut dto = AuditLogEntryDto::from(entry);
                if let Some(AuditTarget::Article(id)) = target {
                    // Deleted articles simply have no snapshot attached.
                    dto.article = summaries.get(&id).map(ArticleRefDto::from);
                }
                dto
            })
            .collect();

        Ok(Page::new(data, total, page, per_page, LIST_BASE_PATH))
    }
}
