// src/infrastructure/repositories/postgres_actor.rs
use super::map_sqlx;
use crate::domain::actor::{Actor, ActorId, ActorKind, ActorRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ACTOR_COLUMNS: &str = "id, kind, display_name, email, verified_at, is_active, created_at";

#[derive(Clone)]
pub struct PostgresActorRepository {
    pool: PgPool,
}

impl PostgresActorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ActorRow {
    id: i64,
    kind: String,
    display_name: String,
    email: Option<String>,
    verified_at: Option<DateTime<Utc>>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ActorRow> for Actor {
    type Error = DomainError;

    fn try_from(row: ActorRow) -> Result<Self, Self::Error> {
        Ok(Actor {
            id: ActorId::new(row.id)?,
            kind: row.kind.parse()?,
            display_name: row.display_name,
            email: row.email,
            verified_at: row.verified_at,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ActorRepository for PostgresActorRepository {
    async fn find(&self, kind: ActorKind, id: ActorId) -> DomainResult<Option<Actor>> {
        let query = format!("SELECT {ACTOR_COLUMNS} FROM actors WHERE kind = $1 AND id = $2");
        let row = sqlx::query_as::<_, ActorRow>(&query)
            .bind(kind.as_str())
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Actor::try_from).transpose()
    }

    async fn mark_verified(&self, id: ActorId, at: DateTime<Utc>) -> DomainResult<Actor> {
        // COALESCE keeps the first verification timestamp on repeat calls.
        let query = format!(
            "UPDATE actors SET verified_at = COALESCE(verified_at, $2)
             WHERE id = $1 AND kind = 'moderator'
             RETURNING {ACTOR_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ActorRow>(&query)
            .bind(i64::from(id))
            .bind(at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("moderator not found".into()))?;

        Actor::try_from(row)
    }
}
