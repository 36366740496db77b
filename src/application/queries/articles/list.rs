// src/application/queries/articles/list.rs
use super::service::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleListItemDto, Page},
        error::ApplicationResult,
        queries::audit::common::{normalize_page, normalize_per_page},
    },
    domain::article::{ArticleListFilter, Locale},
};

const LIST_BASE_PATH: &str = "/api/v1/articles";

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub filter: ArticleListFilter,
    pub locale: Locale,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleListItemDto>> {
        let page = normalize_page(query.page);
        let per_page = normalize_per_page(query.per_page);

        let (articles, total) = self
            .read_repo
            .list_page(&query.filter, page, per_page)
            .await?;

        let items = articles
            .iter()
            .map(|article| ArticleListItemDto::from_article(article, query.locale))
            .collect();

        Ok(Page::new(items, total, page, per_page, LIST_BASE_PATH))
    }
}
