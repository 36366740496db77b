use crate::domain::actor::{Actor, ActorId, ActorKind, Capability};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActorDto {
    pub id: i64,
    #[schema(value_type = String)]
    pub kind: ActorKind,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, with = "serde_time::option")]
    pub verified_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Actor> for ActorDto {
    fn from(actor: Actor) -> Self {
        Self {
            id: actor.id.into(),
            kind: actor.kind,
            display_name: actor.display_name,
            email: actor.email,
            verified_at: actor.verified_at,
            is_active: actor.is_active,
            created_at: actor.created_at,
        }
    }
}

/// The resolved identity behind a request: kind and id come from the
/// upstream session layer, the rest from the actor store.
#[derive(Debug, Clone)]
pub struct AuthenticatedActor {
    pub id: ActorId,
    pub kind: ActorKind,
    pub display_name: String,
    pub verified: bool,
    pub capabilities: HashSet<Capability>,
}

impl AuthenticatedActor {
    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}

impl From<Actor> for AuthenticatedActor {
    fn from(actor: Actor) -> Self {
        let verified = actor.is_verified();
        Self {
            id: actor.id,
            kind: actor.kind,
            display_name: actor.display_name,
            verified,
            capabilities: actor.kind.capabilities(verified),
        }
    }
}

/// Request provenance attached to every audit entry.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
