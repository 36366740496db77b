// src/domain/actor/entity.rs
use crate::domain::actor::value_objects::{ActorId, ActorKind};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    pub display_name: String,
    pub email: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Actor {
    /// Admins are implicitly verified; moderators must carry a
    /// verification timestamp.
    pub fn is_verified(&self) -> bool {
        match self.kind {
            ActorKind::Admin => true,
            ActorKind::Moderator => self.verified_at.is_some(),
        }
    }

    pub fn verify(&mut self, now: DateTime<Utc>) {
        if self.verified_at.is_none() {
            self.verified_at = Some(now);
        }
    }
}
