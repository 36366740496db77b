// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ImageId, Language};
use crate::domain::errors::{DomainResult, FieldErrors};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub title: Option<String>,
    pub title_urdu: Option<String>,
    pub summary: Option<String>,
    pub summary_urdu: Option<String>,
    pub content: Option<String>,
    pub content_urdu: Option<String>,
    pub language: Language,
    pub category: String,
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
    pub images: Vec<Image>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Cover image: an explicit `image_url` wins, otherwise the most
    /// recently attached image.
    pub fn cover_image_path(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| self.images.last().map(|image| image.path.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct Image {
    pub id: ImageId,
    pub article_id: ArticleId,
    pub path: String,
    pub original_name: Option<String>,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewImage {
    pub path: String,
    pub original_name: Option<String>,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied shape of an article, before a slug or identity has
/// been assigned. Holds every mutable field and knows the required-if rules
/// keyed on `language`.
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: Option<String>,
    pub title_urdu: Option<String>,
    pub summary: Option<String>,
    pub summary_urdu: Option<String>,
    pub content: Option<String>,
    pub content_urdu: Option<String>,
    pub language: Option<Language>,
    pub category: Option<String>,
    pub article_type: Option<String>,
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
    pub author: Option<String>,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl ArticleDraft {
    /// Validate the required-if rules. `category`, `type` and `author` are
    /// always required; the language tag dictates which content set must be
    /// present.
    pub fn validate(&self) -> DomainResult<Language> {
        let mut errors = FieldErrors::new();

        Self::check_required(&mut errors, "category", &self.category);
        Self::check_required(&mut errors, "type", &self.article_type);
        Self::check_required(&mut errors, "author", &self.author);

        match self.language {
            None => errors.add("language", "language is required"),
            Some(language) => {
                if language.requires_english() {
                    if !present(&self.title) {
                        errors.add("title", "English title is required");
                    }
                    if !present(&self.content) {
                        errors.add("content", "English content is required");
                    }
                }
                if language.requires_urdu() {
                    if !present(&self.title_urdu) {
                        errors.add("title_urdu", "Urdu title is required");
                    }
                    if !present(&self.content_urdu) {
                        errors.add("content_urdu", "Urdu content is required");
                    }
                }
            }
        }

        errors.into_result()?;
        self.language
            .ok_or_else(|| crate::domain::errors::DomainError::Validation("language is required".into()))
    }

    fn check_required(errors: &mut FieldErrors, field: &'static str, value: &Option<String>) {
        if !present(value) {
            errors.add(field, format!("{field} is required"));
        }
    }

    /// Merge caller-provided changes over the current article state, for
    /// update validation against the resulting whole.
    pub fn merged_over(mut self, article: &Article) -> Self {
        self.title = self.title.or_else(|| article.title.clone());
        self.title_urdu = self.title_urdu.or_else(|| article.title_urdu.clone());
        self.summary = self.summary.or_else(|| article.summary.clone());
        self.summary_urdu = self.summary_urdu.or_else(|| article.summary_urdu.clone());
        self.content = self.content.or_else(|| article.content.clone());
        self.content_urdu = self.content_urdu.or_else(|| article.content_urdu.clone());
        self.language = self.language.or(Some(article.language));
        self.category = self.category.or_else(|| Some(article.category.clone()));
        self.article_type = self
            .article_type
            .or_else(|| Some(article.article_type.clone()));
        self.region = self.region.or_else(|| article.region.clone());
        self.country = self.country.or_else(|| article.country.clone());
        self.tags = self.tags.or_else(|| article.tags.clone());
        self.image_url = self.image_url.or_else(|| article.image_url.clone());
        self.section_priority = self.section_priority.or(article.section_priority);
        self.author = self.author.or_else(|| Some(article.author.clone()));
        self
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub draft: ArticleDraft,
    pub language: Language,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A full-state update: the merged, validated draft plus an optional
/// re-derived slug. The slug column is only touched when one is supplied.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub draft: ArticleDraft,
    pub language: Language,
    pub slug: Option<ArticleSlug>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(
        id: ArticleId,
        draft: ArticleDraft,
        language: Language,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            draft,
            language,
            slug: None,
            updated_at,
        }
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }
}
