use crate::domain::actor::ActorKind;
use crate::domain::article::ArticleSummary;
use crate::domain::audit::AuditLogEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Denormalized article snapshot attached to article-targeted log rows at
/// read time. `title` falls back to the Urdu title when no English one is
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleRefDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

impl From<&ArticleSummary> for ArticleRefDto {
    fn from(summary: &ArticleSummary) -> Self {
        Self {
            id: summary.id.into(),
            title: summary.display_title().to_string(),
            slug: summary.slug.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditLogEntryDto {
    pub id: i64,
    #[schema(value_type = String)]
    pub actor_kind: ActorKind,
    pub actor_id: i64,
    pub action: String,
    pub model_type: Option<String>,
    pub model_id: Option<i64>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_articles_en: i32,
    pub created_articles_ur: i32,
    pub created_articles_multi: i32,
    #[serde(default, with = "serde_time::option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Resolved target article, when the row points at one that still
    /// exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleRefDto>,
}

impl From<AuditLogEntry> for AuditLogEntryDto {
    fn from(entry: AuditLogEntry) -> Self {
        Self {
            id: entry.id.unwrap_or_default(),
            actor_kind: entry.actor_kind,
            actor_id: entry.actor_id.into(),
            action: entry.action.as_str().to_string(),
            model_type: entry.target.map(|t| t.model_type().to_string()),
            model_id: entry.target.map(|t| t.model_id()),
            details: entry.details,
            ip_address: entry.ip_address,
            user_agent: entry.user_agent,
            created_articles_en: entry.counters.created_articles_en,
            created_articles_ur: entry.counters.created_articles_ur,
            created_articles_multi: entry.counters.created_articles_multi,
            created_at: entry.created_at,
            article: None,
        }
    }
}
