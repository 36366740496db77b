// src/application/queries/articles/get_by_slug.rs
use super::service::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleViewDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleSlug, Locale},
};

impl ArticleQueryService {
    /// Reader-facing fetch: bilingual fields are resolved for `locale`
    /// before the article leaves the application layer.
    pub async fn get_article_by_slug(
        &self,
        slug: &str,
        locale: Locale,
    ) -> ApplicationResult<ArticleViewDto> {
        let slug = ArticleSlug::new(slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        Ok(ArticleViewDto::from_article(article, locale))
    }

    /// Editor-facing fetch: both language sets, unresolved.
    pub async fn get_article_by_id(&self, id: ArticleId) -> ApplicationResult<ArticleDto> {
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        Ok(article.into())
    }
}
