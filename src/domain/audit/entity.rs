// src/domain/audit/entity.rs
use crate::domain::actor::value_objects::ActorKind;
use crate::domain::article::value_objects::{ArticleId, ImageId, Language};
use crate::domain::actor::value_objects::ActorId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Login,
    Logout,
    VerifyModerator,
    DeleteImage,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
            AuditAction::Login => "login",
            AuditAction::Logout => "logout",
            AuditAction::VerifyModerator => "verify_moderator",
            AuditAction::DeleteImage => "delete_image",
        }
    }

    /// Session noise that the review listing hides. The rows remain in the
    /// store and are served by the raw export.
    pub fn is_noise(&self) -> bool {
        matches!(self, AuditAction::Login | AuditAction::Logout)
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(AuditAction::Create),
            "update" => Ok(AuditAction::Update),
            "delete" => Ok(AuditAction::Delete),
            "login" => Ok(AuditAction::Login),
            "logout" => Ok(AuditAction::Logout),
            "verify_moderator" => Ok(AuditAction::VerifyModerator),
            "delete_image" => Ok(AuditAction::DeleteImage),
            other => Err(DomainError::Validation(format!(
                "unknown audit action '{other}'"
            ))),
        }
    }
}

/// Tagged reference to the entity a log row points at. Serialized as the
/// `model_type`/`model_id` column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditTarget {
    Article(ArticleId),
    Image(ImageId),
    Moderator(ActorId),
}

impl AuditTarget {
    pub fn model_type(&self) -> &'static str {
        match self {
            AuditTarget::Article(_) => "Article",
            AuditTarget::Image(_) => "Image",
            AuditTarget::Moderator(_) => "Moderator",
        }
    }

    pub fn model_id(&self) -> i64 {
        match self {
            AuditTarget::Article(id) => (*id).into(),
            AuditTarget::Image(id) => (*id).into(),
            AuditTarget::Moderator(id) => (*id).into(),
        }
    }

    pub fn from_columns(model_type: Option<&str>, model_id: Option<i64>) -> DomainResult<Option<Self>> {
        let (model_type, model_id) = match (model_type, model_id) {
            (Some(t), Some(id)) => (t, id),
            _ => return Ok(None),
        };
        let target = match model_type {
            "Article" => AuditTarget::Article(ArticleId::new(model_id)?),
            "Image" => AuditTarget::Image(ImageId::new(model_id)?),
            "Moderator" => AuditTarget::Moderator(ActorId::new(model_id)?),
            other => {
                return Err(DomainError::Validation(format!(
                    "unknown audit target kind '{other}'"
                )));
            }
        };
        Ok(Some(target))
    }
}

/// Per-row language counters carried by moderator `create` entries, so the
/// per-moderator language mix can be aggregated without scanning articles.
/// Column names are part of the persisted contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageCounters {
    pub created_articles_en: i32,
    pub created_articles_ur: i32,
    pub created_articles_multi: i32,
}

impl LanguageCounters {
    pub fn for_language(language: Language) -> Self {
        let mut counters = Self::default();
        match language {
            Language::En => counters.created_articles_en = 1,
            Language::Ur => counters.created_articles_ur = 1,
            Language::Multi => counters.created_articles_multi = 1,
        }
        counters
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// One attributable privileged action. Append-only: the application never
/// updates or deletes stored entries.
#[derive(Debug, Clone)]
pub struct AuditLogEntry {
    pub id: Option<i64>,
    pub actor_kind: ActorKind,
    pub actor_id: ActorId,
    pub action: AuditAction,
    pub target: Option<AuditTarget>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub counters: LanguageCounters,
    pub created_at: Option<DateTime<Utc>>,
}

impl AuditLogEntry {
    pub fn new(actor_kind: ActorKind, actor_id: ActorId, action: AuditAction) -> Self {
        Self {
            id: None,
            actor_kind,
            actor_id,
            action,
            target: None,
            details: None,
            ip_address: None,
            user_agent: None,
            counters: LanguageCounters::default(),
            created_at: None,
        }
    }

    pub fn with_target(mut self, target: AuditTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_request_meta(
        mut self,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        self.ip_address = ip_address;
        self.user_agent = user_agent;
        self
    }

    pub fn with_counters(mut self, counters: LanguageCounters) -> Self {
        self.counters = counters;
        self
    }
}
