// src/infrastructure/repositories/postgres_trash.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::trash::{NewTrashRecord, TrashRepository};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresTrashRepository {
    pool: PgPool,
}

impl PostgresTrashRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrashRepository for PostgresTrashRepository {
    async fn insert(&self, record: NewTrashRecord) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO trash (article_data, deleted_by, deleted_by_kind, deleted_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(record.article_data)
        .bind(i64::from(record.deleted_by))
        .bind(record.deleted_by_kind.as_str())
        .bind(record.deleted_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }
}
