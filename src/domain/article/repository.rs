use crate::domain::article::entity::{Article, ArticleUpdate, Image, NewArticle, NewImage};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ImageId, Language};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Listing filters for the public/admin article index.
#[derive(Debug, Clone, Default)]
pub struct ArticleListFilter {
    pub category: Option<String>,
    pub language: Option<Language>,
    pub author: Option<String>,
}

/// Denormalized snapshot used to enrich audit rows in one batch lookup.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: Option<String>,
    pub title_urdu: Option<String>,
    pub slug: ArticleSlug,
}

impl ArticleSummary {
    /// Title for display in log listings: English title, or the Urdu title
    /// when no English one is stored.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref().filter(|t| !t.is_empty()) {
            Some(title) => title,
            None => self.title_urdu.as_deref().unwrap_or(""),
        }
    }
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    async fn add_image(&self, article_id: ArticleId, image: NewImage) -> DomainResult<Image>;
    async fn delete_image(&self, id: ImageId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Id of the article currently holding `slug`, if any. Used by the slug
    /// allocator's probe loop.
    async fn find_id_by_slug(&self, slug: &str) -> DomainResult<Option<ArticleId>>;
    async fn list_page(
        &self,
        filter: &ArticleListFilter,
        page: u32,
        per_page: u32,
    ) -> DomainResult<(Vec<Article>, u64)>;
    async fn find_summaries_by_ids(
        &self,
        ids: &[ArticleId],
    ) -> DomainResult<Vec<ArticleSummary>>;
    async fn find_image(&self, id: ImageId) -> DomainResult<Option<Image>>;
}
