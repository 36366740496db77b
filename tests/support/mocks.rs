// tests/support/mocks.rs
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use akhbar_core::application::error::ApplicationResult;
use akhbar_core::application::ports::{storage::FileStore, time::Clock};
use akhbar_core::domain::actor::{Actor, ActorId, ActorKind, ActorRepository};
use akhbar_core::domain::article::{
    Article, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleSlug, ArticleSummary,
    ArticleUpdate, ArticleWriteRepository, Image, ImageId, NewArticle, NewImage,
};
use akhbar_core::domain::audit::{
    AuditLogCursor, AuditLogEntry, AuditLogFilter, AuditLogRepository,
};
use akhbar_core::domain::errors::{DomainError, DomainResult};
use akhbar_core::domain::trash::{NewTrashRecord, TrashRepository};

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
struct ArticlesState {
    articles: Vec<Article>,
    next_article_id: i64,
    next_image_id: i64,
}

/// In-memory article store backing both the read and write repository
/// traits, with the same slug uniqueness behavior as the real table.
#[derive(Default)]
pub struct InMemoryArticles {
    state: Mutex<ArticlesState>,
}

impl InMemoryArticles {
    pub fn seed(&self, article: Article) {
        let mut state = self.state.lock().unwrap();
        state.next_article_id = state.next_article_id.max(i64::from(article.id));
        self.seed_locked(&mut state, article);
    }

    fn seed_locked(&self, state: &mut ArticlesState, article: Article) {
        state.articles.push(article);
    }

    pub fn all(&self) -> Vec<Article> {
        self.state.lock().unwrap().articles.clone()
    }

    pub fn by_id(&self, id: ArticleId) -> Option<Article> {
        self.state
            .lock()
            .unwrap()
            .articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }
}

fn materialize(id: ArticleId, new: NewArticle) -> Article {
    let NewArticle {
        slug,
        draft,
        language,
        created_at,
        updated_at,
    } = new;
    Article {
        id,
        slug,
        title: draft.title,
        title_urdu: draft.title_urdu,
        summary: draft.summary,
        summary_urdu: draft.summary_urdu,
        content: draft.content,
        content_urdu: draft.content_urdu,
        language,
        category: draft.category.unwrap_or_default(),
        article_type: draft.article_type.unwrap_or_default(),
        region: draft.region,
        country: draft.country,
        tags: draft.tags,
        image_url: draft.image_url,
        is_featured: draft.is_featured,
        is_trending: draft.is_trending,
        is_breaking: draft.is_breaking,
        is_top_story: draft.is_top_story,
        show_in_section: draft.show_in_section,
        section_priority: draft.section_priority,
        author: draft.author.unwrap_or_default(),
        images: Vec::new(),
        created_at,
        updated_at,
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if state
            .articles
            .iter()
            .any(|a| a.slug.as_str() == article.slug.as_str())
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        state.next_article_id += 1;
        let id = ArticleId::new(state.next_article_id)?;
        let created = materialize(id, article);
        state.articles.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &update.slug {
            if state
                .articles
                .iter()
                .any(|a| a.id != update.id && a.slug.as_str() == slug.as_str())
            {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        let article = state
            .articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        let images = std::mem::take(&mut article.images);
        let slug = update.slug.unwrap_or_else(|| article.slug.clone());
        let mut replacement = materialize(
            update.id,
            NewArticle {
                slug,
                draft: update.draft,
                language: update.language,
                created_at: article.created_at,
                updated_at: update.updated_at,
            },
        );
        replacement.images = images;
        *article = replacement.clone();
        Ok(replacement)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|a| a.id != id);
        if state.articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn add_image(&self, article_id: ArticleId, image: NewImage) -> DomainResult<Image> {
        let mut state = self.state.lock().unwrap();
        state.next_image_id += 1;
        let stored = Image {
            id: ImageId::new(state.next_image_id)?,
            article_id,
            path: image.path,
            original_name: image.original_name,
            mime_type: image.mime_type,
            created_at: image.created_at,
        };
        let article = state
            .articles
            .iter_mut()
            .find(|a| a.id == article_id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.images.push(stored.clone());
        Ok(stored)
    }

    async fn delete_image(&self, id: ImageId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        for article in &mut state.articles {
            let before = article.images.len();
            article.images.retain(|img| img.id != id);
            if article.images.len() != before {
                return Ok(());
            }
        }
        Err(DomainError::NotFound("image not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.by_id(id))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .articles
            .iter()
            .find(|a| a.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn find_id_by_slug(&self, slug: &str) -> DomainResult<Option<ArticleId>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .articles
            .iter()
            .find(|a| a.slug.as_str() == slug)
            .map(|a| a.id))
    }

    async fn list_page(
        &self,
        filter: &ArticleListFilter,
        page: u32,
        per_page: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let state = self.state.lock().unwrap();
        let mut matches: Vec<Article> = state
            .articles
            .iter()
            .filter(|a| {
                filter
                    .category
                    .as_deref()
                    .is_none_or(|category| a.category == category)
                    && filter.language.is_none_or(|language| a.language == language)
                    && filter.author.as_deref().is_none_or(|author| a.author == author)
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });

        let total = matches.len() as u64;
        let start = ((page.max(1) - 1) * per_page) as usize;
        let data = matches
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect();
        Ok((data, total))
    }

    async fn find_summaries_by_ids(&self, ids: &[ArticleId]) -> DomainResult<Vec<ArticleSummary>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .filter(|a| ids.contains(&a.id))
            .map(|a| ArticleSummary {
                id: a.id,
                title: a.title.clone(),
                title_urdu: a.title_urdu.clone(),
                slug: a.slug.clone(),
            })
            .collect())
    }

    async fn find_image(&self, id: ImageId) -> DomainResult<Option<Image>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .flat_map(|a| a.images.iter())
            .find(|img| img.id == id)
            .cloned())
    }
}

#[derive(Default)]
struct AuditState {
    entries: Vec<AuditLogEntry>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryAuditLog {
    state: Mutex<AuditState>,
    failing: AtomicBool,
}

impl InMemoryAuditLog {
    pub fn entries(&self) -> Vec<AuditLogEntry> {
        self.state.lock().unwrap().entries.clone()
    }

    /// Make subsequent inserts fail, for exercising best-effort recording.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn sorted_desc(&self, filter: &AuditLogFilter) -> Vec<AuditLogEntry> {
        let state = self.state.lock().unwrap();
        let mut entries: Vec<AuditLogEntry> = state
            .entries
            .iter()
            .filter(|e| {
                filter.actor_kind.is_none_or(|kind| e.actor_kind == kind)
                    && filter.actor_id.is_none_or(|id| e.actor_id == id)
                    && (filter.include_noise || !e.action.is_noise())
            })
            .cloned()
            .collect();
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.id.cmp(&a.id))
        });
        entries
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLog {
    async fn insert(&self, mut entry: AuditLogEntry) -> DomainResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("audit store unavailable".into()));
        }
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        entry.id = Some(state.next_id);
        state.entries.push(entry);
        Ok(())
    }

    async fn list_page(
        &self,
        filter: &AuditLogFilter,
        page: u32,
        per_page: u32,
    ) -> DomainResult<(Vec<AuditLogEntry>, u64)> {
        let entries = self.sorted_desc(filter);
        let total = entries.len() as u64;
        let start = ((page.max(1) - 1) * per_page) as usize;
        let data = entries
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect();
        Ok((data, total))
    }

    async fn list_raw(
        &self,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLogEntry>, Option<AuditLogCursor>)> {
        let all = self.sorted_desc(&AuditLogFilter {
            include_noise: true,
            ..AuditLogFilter::default()
        });
        let mut entries: Vec<AuditLogEntry> = all
            .into_iter()
            .filter(|e| {
                cursor.as_ref().is_none_or(|c| {
                    let created_at = e.created_at.unwrap_or_default();
                    let id = e.id.unwrap_or_default();
                    (created_at, id) < (c.created_at, c.id)
                })
            })
            .take(limit as usize + 1)
            .collect();

        let mut next_cursor = None;
        if entries.len() > limit as usize {
            entries.pop();
            if let Some(last) = entries.last() {
                if let (Some(created_at), Some(id)) = (last.created_at, last.id) {
                    next_cursor = Some(AuditLogCursor::new(created_at, id));
                }
            }
        }
        Ok((entries, next_cursor))
    }
}

#[derive(Default)]
pub struct InMemoryTrash {
    records: Mutex<Vec<NewTrashRecord>>,
}

impl InMemoryTrash {
    pub fn records(&self) -> Vec<NewTrashRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrashRepository for InMemoryTrash {
    async fn insert(&self, record: NewTrashRecord) -> DomainResult<()> {
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryActors {
    actors: Mutex<Vec<Actor>>,
}

impl InMemoryActors {
    pub fn seed(&self, actor: Actor) {
        self.actors.lock().unwrap().push(actor);
    }
}

#[async_trait]
impl ActorRepository for InMemoryActors {
    async fn find(&self, kind: ActorKind, id: ActorId) -> DomainResult<Option<Actor>> {
        Ok(self
            .actors
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.kind == kind && a.id == id)
            .cloned())
    }

    async fn mark_verified(&self, id: ActorId, at: DateTime<Utc>) -> DomainResult<Actor> {
        let mut actors = self.actors.lock().unwrap();
        let actor = actors
            .iter_mut()
            .find(|a| a.kind == ActorKind::Moderator && a.id == id)
            .ok_or_else(|| DomainError::NotFound("moderator not found".into()))?;
        if actor.verified_at.is_none() {
            actor.verified_at = Some(at);
        }
        Ok(actor.clone())
    }
}

/// Records stored and deleted paths without touching the filesystem.
#[derive(Default)]
pub struct RecordingFileStore {
    counter: AtomicI64,
    pub stored: Mutex<Vec<String>>,
    pub deleted: Mutex<Vec<String>>,
}

#[async_trait]
impl FileStore for RecordingFileStore {
    async fn store(&self, original_name: &str, _bytes: &[u8]) -> ApplicationResult<String> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let path = format!("stored-{n}-{original_name}");
        self.stored.lock().unwrap().push(path.clone());
        Ok(path)
    }

    async fn delete(&self, path: &str) -> ApplicationResult<()> {
        self.deleted.lock().unwrap().push(path.to_string());
        Ok(())
    }
}
