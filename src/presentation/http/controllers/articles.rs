// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, ImageUpload, RemoveImageCommand, RetireArticleCommand,
        UpdateArticleCommand,
    },
    dto::{ArticleDto, ArticleListItemDto, ArticleViewDto, Page},
    error::ApplicationError,
    queries::articles::ListArticlesQuery,
};
use crate::domain::article::{ArticleDraft, ArticleId, ArticleListFilter, ImageId, Locale};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ClientMeta};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct LocaleParams {
    #[serde(default)]
    pub locale: Option<String>,
}

/// Full article payload for create and update. Updates are full-state:
/// absent text fields keep their stored values, flags are taken as sent.
#[derive(Debug, Deserialize, Default)]
pub struct ArticlePayload {
    pub title: Option<String>,
    pub title_urdu: Option<String>,
    pub summary: Option<String>,
    pub summary_urdu: Option<String>,
    pub content: Option<String>,
    pub content_urdu: Option<String>,
    pub language: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub article_type: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub tags: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_trending: bool,
    #[serde(default)]
    pub is_breaking: bool,
    #[serde(default)]
    pub is_top_story: bool,
    #[serde(default)]
    pub show_in_section: bool,
    pub section_priority: Option<i32>,
    pub author: Option<String>,
    pub slug: Option<String>,
}

impl ArticlePayload {
    fn into_draft(self) -> Result<(ArticleDraft, Option<String>), HttpError> {
        let language = self
            .language
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|err| HttpError::from_error(ApplicationError::Domain(err)))?;

        let draft = ArticleDraft {
            title: self.title,
            title_urdu: self.title_urdu,
            summary: self.summary,
            summary_urdu: self.summary_urdu,
            content: self.content,
            content_urdu: self.content_urdu,
            language,
            category: self.category,
            article_type: self.article_type,
            region: self.region,
            country: self.country,
            tags: self.tags,
            image_url: self.image_url,
            is_featured: self.is_featured,
            is_trending: self.is_trending,
            is_breaking: self.is_breaking,
            is_top_story: self.is_top_story,
            show_in_section: self.show_in_section,
            section_priority: self.section_priority,
            author: self.author,
        };
        Ok((draft, self.slug))
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageUploadParams {
    pub name: String,
    #[serde(default)]
    pub mime: Option<String>,
}

fn parse_locale(raw: Option<&str>) -> Result<Locale, HttpError> {
    raw.map(str::parse)
        .transpose()
        .map_err(|err| HttpError::from_error(ApplicationError::Domain(err)))
        .map(Option::unwrap_or_default)
}

fn article_id(raw: i64) -> Result<ArticleId, HttpError> {
    ArticleId::new(raw)
        .map_err(|_| HttpError::from_error(ApplicationError::not_found("article not found")))
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Page<ArticleListItemDto>>> {
    let locale = parse_locale(params.locale.as_deref())?;
    let language = params
        .language
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(|err| HttpError::from_error(ApplicationError::Domain(err)))?;

    let query = ListArticlesQuery {
        filter: ArticleListFilter {
            category: params.category,
            language,
            author: params.author,
        },
        locale,
        page: params.page,
        per_page: params.per_page,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> HttpResult<Json<ArticleViewDto>> {
    let locale = parse_locale(params.locale.as_deref())?;
    state
        .services
        .article_queries
        .get_article_by_slug(&slug, locale)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(_actor): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    let id = article_id(id)?;
    state
        .services
        .article_queries
        .get_article_by_id(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Json(payload): Json<ArticlePayload>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let (draft, slug) = payload.into_draft()?;
    let command = CreateArticleCommand {
        draft,
        slug,
        images: Vec::new(),
    };

    let created = state
        .services
        .article_commands
        .create_article(&actor, &meta, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Path(id): Path<i64>,
    Json(payload): Json<ArticlePayload>,
) -> HttpResult<Json<ArticleDto>> {
    let id = article_id(id)?;
    let (draft, slug) = payload.into_draft()?;
    let command = UpdateArticleCommand {
        id,
        draft,
        slug,
        images: Vec::new(),
    };

    state
        .services
        .article_commands
        .update_article(&actor, &meta, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    let id = article_id(id)?;
    state
        .services
        .article_commands
        .retire_article(&actor, &meta, RetireArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Path(id): Path<i64>,
    Query(params): Query<ImageUploadParams>,
    body: Bytes,
) -> HttpResult<Json<ArticleDto>> {
    let id = article_id(id)?;
    let command = UpdateArticleCommand {
        id,
        draft: ArticleDraft::default(),
        slug: None,
        images: vec![ImageUpload {
            original_name: params.name,
            mime_type: params.mime,
            bytes: body.to_vec(),
        }],
    };

    state
        .services
        .article_commands
        .update_article(&actor, &meta, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_image(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ClientMeta(meta): ClientMeta,
    Path((article_raw, image_raw)): Path<(i64, i64)>,
) -> HttpResult<StatusCode> {
    let command = RemoveImageCommand {
        article_id: article_id(article_raw)?,
        image_id: ImageId::new(image_raw).map_err(|_| {
            HttpError::from_error(ApplicationError::not_found("image not found"))
        })?,
    };

    state
        .services
        .article_commands
        .remove_image(&actor, &meta, command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
