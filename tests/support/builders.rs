// tests/support/builders.rs
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use akhbar_core::application::dto::{AuthenticatedActor, RequestMeta};
use akhbar_core::domain::actor::{Actor, ActorId, ActorKind};
use akhbar_core::domain::article::{Article, ArticleDraft, ArticleId, ArticleSlug, Language};

static T0: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
});

pub fn t0() -> DateTime<Utc> {
    *T0
}

pub fn admin(id: i64, name: &str) -> AuthenticatedActor {
    AuthenticatedActor {
        id: ActorId::new(id).unwrap(),
        kind: ActorKind::Admin,
        display_name: name.to_string(),
        verified: true,
        capabilities: ActorKind::Admin.capabilities(true),
    }
}

pub fn moderator(id: i64, name: &str, verified: bool) -> AuthenticatedActor {
    AuthenticatedActor {
        id: ActorId::new(id).unwrap(),
        kind: ActorKind::Moderator,
        display_name: name.to_string(),
        verified,
        capabilities: ActorKind::Moderator.capabilities(verified),
    }
}

pub fn actor_record(id: i64, kind: ActorKind, name: &str, verified: bool) -> Actor {
    Actor {
        id: ActorId::new(id).unwrap(),
        kind,
        display_name: name.to_string(),
        email: None,
        verified_at: verified.then(t0),
        is_active: true,
        created_at: t0(),
    }
}

pub fn meta() -> RequestMeta {
    RequestMeta {
        ip_address: Some("203.0.113.7".into()),
        user_agent: Some("newsroom-tests".into()),
    }
}

pub fn english_draft(author: &str) -> ArticleDraft {
    ArticleDraft {
        title: Some("Budget 2025".into()),
        content: Some("The annual budget was announced today in parliament.".into()),
        language: Some(Language::En),
        category: Some("Business".into()),
        article_type: Some("news".into()),
        author: Some(author.to_string()),
        ..ArticleDraft::default()
    }
}

pub fn urdu_draft(author: &str) -> ArticleDraft {
    ArticleDraft {
        title_urdu: Some("بجٹ ۲۰۲۵".into()),
        content_urdu: Some("سالانہ بجٹ کا اعلان آج پارلیمنٹ میں کیا گیا۔".into()),
        language: Some(Language::Ur),
        category: Some("Business".into()),
        article_type: Some("news".into()),
        author: Some(author.to_string()),
        ..ArticleDraft::default()
    }
}

pub struct ArticleBuilder {
    id: i64,
    slug: String,
    title: Option<String>,
    title_urdu: Option<String>,
    language: Language,
    author: String,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            slug: format!("test-article-{id}"),
            title: Some("Test Article".into()),
            title_urdu: None,
            language: Language::En,
            author: "Admin".into(),
            created_at: t0(),
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            title: self.title,
            title_urdu: self.title_urdu,
            summary: None,
            summary_urdu: None,
            content: Some("Body text.".into()),
            content_urdu: None,
            language: self.language,
            category: "News".into(),
            article_type: "news".into(),
            region: None,
            country: None,
            tags: None,
            image_url: None,
            is_featured: false,
            is_trending: false,
            is_breaking: false,
            is_top_story: false,
            show_in_section: false,
            section_priority: None,
            author: self.author,
            images: Vec::new(),
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
