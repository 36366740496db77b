// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleSlug, ArticleSummary,
    ArticleUpdate, ArticleWriteRepository, Image, ImageId, NewArticle, NewImage,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, slug, title, title_urdu, summary, summary_urdu, content, \
     content_urdu, language, category, article_type, region, country, tags, image_url, \
     is_featured, is_trending, is_breaking, is_top_story, show_in_section, section_priority, \
     author, created_at, updated_at";

const IMAGE_COLUMNS: &str = "id, article_id, path, original_name, mime_type, created_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_images(&self, article_ids: &[i64]) -> DomainResult<Vec<Image>> {
        let query = format!(
            "SELECT {IMAGE_COLUMNS} FROM images WHERE article_id = ANY($1) ORDER BY created_at, id"
        );
        let rows = sqlx::query_as::<_, ImageRow>(&query)
            .bind(article_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Image::try_from).collect()
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    title: Option<String>,
    title_urdu: Option<String>,
    summary: Option<String>,
    summary_urdu: Option<String>,
    content: Option<String>,
    content_urdu: Option<String>,
    language: String,
    category: String,
    article_type: String,
    region: Option<String>,
    country: Option<String>,
    tags: Option<String>,
    image_url: Option<String>,
    is_featured: bool,
    is_trending: bool,
    is_breaking: bool,
    is_top_story: bool,
    show_in_section: bool,
    section_priority: Option<i32>,
    author: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            title: row.title,
            title_urdu: row.title_urdu,
            summary: row.summary,
            summary_urdu: row.summary_urdu,
            content: row.content,
            content_urdu: row.content_urdu,
            language: row.language.parse()?,
            category: row.category,
            article_type: row.article_type,
            region: row.region,
            country: row.country,
            tags: row.tags,
            image_url: row.image_url,
            is_featured: row.is_featured,
            is_trending: row.is_trending,
            is_breaking: row.is_breaking,
            is_top_story: row.is_top_story,
            show_in_section: row.show_in_section,
            section_priority: row.section_priority,
            author: row.author,
            images: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ImageRow {
    id: i64,
    article_id: i64,
    path: String,
    original_name: Option<String>,
    mime_type: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ImageRow> for Image {
    type Error = DomainError;

    fn try_from(row: ImageRow) -> Result<Self, Self::Error> {
        Ok(Image {
            id: ImageId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            path: row.path,
            original_name: row.original_name,
            mime_type: row.mime_type,
            created_at: row.created_at,
        })
    }
}

/// Attach each image to its parent in one pass. Both inputs are small: one
/// page of articles and their images.
fn attach_images(articles: &mut [Article], images: Vec<Image>) {
    for image in images {
        if let Some(article) = articles.iter_mut().find(|a| a.id == image.article_id) {
            article.images.push(image);
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            slug,
            draft,
            language,
            created_at,
            updated_at,
        } = article;

        let query = format!(
            "INSERT INTO articles (slug, title, title_urdu, summary, summary_urdu, content, \
             content_urdu, language, category, article_type, region, country, tags, image_url, \
             is_featured, is_trending, is_breaking, is_top_story, show_in_section, \
             section_priority, author, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, \
             $18, $19, $20, $21, $22, $23)
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(slug.as_str())
            .bind(draft.title)
            .bind(draft.title_urdu)
            .bind(draft.summary)
            .bind(draft.summary_urdu)
            .bind(draft.content)
            .bind(draft.content_urdu)
            .bind(language.as_str())
            .bind(draft.category.unwrap_or_default())
            .bind(draft.article_type.unwrap_or_default())
            .bind(draft.region)
            .bind(draft.country)
            .bind(draft.tags)
            .bind(draft.image_url)
            .bind(draft.is_featured)
            .bind(draft.is_trending)
            .bind(draft.is_breaking)
            .bind(draft.is_top_story)
            .bind(draft.show_in_section)
            .bind(draft.section_priority)
            .bind(draft.author.unwrap_or_default())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            draft,
            language,
            slug,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }

        builder.push(", title = ");
        builder.push_bind(draft.title);
        builder.push(", title_urdu = ");
        builder.push_bind(draft.title_urdu);
        builder.push(", summary = ");
        builder.push_bind(draft.summary);
        builder.push(", summary_urdu = ");
        builder.push_bind(draft.summary_urdu);
        builder.push(", content = ");
        builder.push_bind(draft.content);
        builder.push(", content_urdu = ");
        builder.push_bind(draft.content_urdu);
        builder.push(", language = ");
        builder.push_bind(language.as_str());
        builder.push(", category = ");
        builder.push_bind(draft.category.unwrap_or_default());
        builder.push(", article_type = ");
        builder.push_bind(draft.article_type.unwrap_or_default());
        builder.push(", region = ");
        builder.push_bind(draft.region);
        builder.push(", country = ");
        builder.push_bind(draft.country);
        builder.push(", tags = ");
        builder.push_bind(draft.tags);
        builder.push(", image_url = ");
        builder.push_bind(draft.image_url);
        builder.push(", is_featured = ");
        builder.push_bind(draft.is_featured);
        builder.push(", is_trending = ");
        builder.push_bind(draft.is_trending);
        builder.push(", is_breaking = ");
        builder.push_bind(draft.is_breaking);
        builder.push(", is_top_story = ");
        builder.push_bind(draft.is_top_story);
        builder.push(", show_in_section = ");
        builder.push_bind(draft.show_in_section);
        builder.push(", section_priority = ");
        builder.push_bind(draft.section_priority);
        builder.push(", author = ");
        builder.push_bind(draft.author.unwrap_or_default());

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {ARTICLE_COLUMNS}"));

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn add_image(&self, article_id: ArticleId, image: NewImage) -> DomainResult<Image> {
        let query = format!(
            "INSERT INTO images (article_id, path, original_name, mime_type, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {IMAGE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ImageRow>(&query)
            .bind(i64::from(article_id))
            .bind(image.path)
            .bind(image.original_name)
            .bind(image.mime_type)
            .bind(image.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Image::try_from(row)
    }

    async fn delete_image(&self, id: ImageId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("image not found".into()));
        }
        Ok(())
    }
}

fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ArticleListFilter) {
    let mut has_where = false;
    let mut push_clause = |builder: &mut QueryBuilder<'a, Postgres>| {
        if has_where {
            builder.push(" AND ");
        } else {
            builder.push(" WHERE ");
            has_where = true;
        }
    };

    if let Some(category) = &filter.category {
        push_clause(builder);
        builder.push("category = ");
        builder.push_bind(category.as_str());
    }
    if let Some(language) = filter.language {
        push_clause(builder);
        builder.push("language = ");
        builder.push_bind(language.as_str());
    }
    if let Some(author) = &filter.author {
        push_clause(builder);
        builder.push("author = ");
        builder.push_bind(author.as_str());
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let query = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let Some(row) = row else { return Ok(None) };
        let mut article = Article::try_from(row)?;
        article.images = self.load_images(&[i64::from(article.id)]).await?;
        Ok(Some(article))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let query = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let Some(row) = row else { return Ok(None) };
        let mut article = Article::try_from(row)?;
        article.images = self.load_images(&[i64::from(article.id)]).await?;
        Ok(Some(article))
    }

    async fn find_id_by_slug(&self, slug: &str) -> DomainResult<Option<ArticleId>> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM articles WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|(id,)| ArticleId::new(id)).transpose()
    }

    async fn list_page(
        &self,
        filter: &ArticleListFilter,
        page: u32,
        per_page: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles");
        apply_filter(&mut count_builder, filter);
        let (total,): (i64,) = count_builder
            .build_query_as()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        apply_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(per_page));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(page.saturating_sub(1)) * i64::from(per_page));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if !articles.is_empty() {
            let ids: Vec<i64> = articles.iter().map(|a| i64::from(a.id)).collect();
            let images = self.load_images(&ids).await?;
            attach_images(&mut articles, images);
        }

        Ok((articles, total.max(0) as u64))
    }

    async fn find_summaries_by_ids(&self, ids: &[ArticleId]) -> DomainResult<Vec<ArticleSummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();

        let rows: Vec<(i64, Option<String>, Option<String>, String)> = sqlx::query_as(
            "SELECT id, title, title_urdu, slug FROM articles WHERE id = ANY($1)",
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|(id, title, title_urdu, slug)| {
                Ok(ArticleSummary {
                    id: ArticleId::new(id)?,
                    title,
                    title_urdu,
                    slug: ArticleSlug::new(slug)?,
                })
            })
            .collect()
    }

    async fn find_image(&self, id: ImageId) -> DomainResult<Option<Image>> {
        let query = format!("SELECT {IMAGE_COLUMNS} FROM images WHERE id = $1");
        let row = sqlx::query_as::<_, ImageRow>(&query)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Image::try_from).transpose()
    }
}
