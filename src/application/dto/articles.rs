use crate::domain::article::bilingual::{self, BilingualField};
use crate::domain::article::{Article, Image, Language, Locale};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Full article shape: both language sets, classification and flags. Also
/// the exact JSON written into a trash snapshot on retirement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub slug: String,
    pub title: Option<String>,
    pub title_urdu: Option<String>,
    pub summary: Option<String>,
    pub summary_urdu: Option<String>,
    pub content: Option<String>,
    pub content_urdu: Option<String>,
    #[schema(value_type = String)]
    pub language: Language,
    pub category: String,
    #[serde(rename = "type")]
    pub article_type: String,
    pub region: Option<String>,
    pub country: Option<String>,
    pub tags: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub is_trending: bool,
    pub is_breaking: bool,
    pub is_top_story: bool,
    pub show_in_section: bool,
    pub section_priority: Option<i32>,
    pub author: String,
    pub images: Vec<ImageDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            slug: article.slug.into(),
            title: article.title,
            title_urdu: article.title_urdu,
            summary: article.summary,
            summary_urdu: article.summary_urdu,
            content: article.content,
            content_urdu: article.content_urdu,
            language: article.language,
            category: article.category,
            article_type: article.article_type,
            region: article.region,
            country: article.country,
            tags: article.tags,
            image_url: article.image_url,
            is_featured: article.is_featured,
            is_trending: article.is_trending,
            is_breaking: article.is_breaking,
            is_top_story: article.is_top_story,
            show_in_section: article.show_in_section,
            section_priority: article.section_priority,
            author: article.author,
            images: article.images.into_iter().map(ImageDto::from).collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImageDto {
    pub id: i64,
    pub article_id: i64,
    pub path: String,
    pub original_name: Option<String>,
    pub mime_type: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Image> for ImageDto {
    fn from(image: Image) -> Self {
        Self {
            id: image.id.into(),
            article_id: image.article_id.into(),
            path: image.path,
            original_name: image.original_name,
            mime_type: image.mime_type,
            created_at: image.created_at,
        }
    }
}

/// Reader-facing view: fields already resolved for the requested locale.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleViewDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    #[schema(value_type = String)]
    pub language: Language,
    pub category: String,
    #[serde(rename = "type")]
    pub article_type: String,
    pub region: Option<String>,
    pub country: Option<String>,
    pub tags: Option<String>,
    pub cover_image: Option<String>,
    pub author: String,
    pub images: Vec<ImageDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl ArticleViewDto {
    pub fn from_article(article: Article, locale: Locale) -> Self {
        let title = bilingual::resolve_field(&article, BilingualField::Title, locale).to_string();
        let summary = bilingual::display_summary(&article, locale);
        let content =
            bilingual::resolve_field(&article, BilingualField::Content, locale).to_string();
        let cover_image = article.cover_image_path().map(str::to_string);

        Self {
            id: article.id.into(),
            slug: article.slug.into(),
            title,
            summary,
            content,
            language: article.language,
            category: article.category,
            article_type: article.article_type,
            region: article.region,
            country: article.country,
            tags: article.tags,
            cover_image,
            author: article.author,
            images: article.images.into_iter().map(ImageDto::from).collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Compact list-view row with locale-resolved, word-budgeted title and
/// summary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListItemDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub summary: String,
    #[schema(value_type = String)]
    pub language: Language,
    pub category: String,
    #[serde(rename = "type")]
    pub article_type: String,
    pub author: String,
    pub is_featured: bool,
    pub is_trending: bool,
    pub is_breaking: bool,
    pub is_top_story: bool,
    pub show_in_section: bool,
    pub section_priority: Option<i32>,
    pub cover_image: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl ArticleListItemDto {
    pub fn from_article(article: &Article, locale: Locale) -> Self {
        Self {
            id: article.id.into(),
            slug: article.slug.as_str().to_string(),
            title: bilingual::display_title(article, locale),
            summary: bilingual::display_summary(article, locale),
            language: article.language,
            category: article.category.clone(),
            article_type: article.article_type.clone(),
            author: article.author.clone(),
            is_featured: article.is_featured,
            is_trending: article.is_trending,
            is_breaking: article.is_breaking,
            is_top_story: article.is_top_story,
            show_in_section: article.show_in_section,
            section_priority: article.section_priority,
            cover_image: article.cover_image_path().map(str::to_string),
            created_at: article.created_at,
        }
    }
}
