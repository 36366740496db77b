// src/infrastructure/repositories/postgres_audit_log.rs
use super::map_sqlx;
use crate::domain::actor::{ActorId, ActorKind};
use crate::domain::audit::{
    AuditAction, AuditLogCursor, AuditLogEntry, AuditLogFilter, AuditLogRepository, AuditTarget,
    LanguageCounters,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const LOG_COLUMNS: &str = "id, actor_kind, actor_id, action, model_type, model_id, details, \
     ip_address, user_agent, created_articles_en, created_articles_ur, created_articles_multi, \
     created_at";

#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    id: i64,
    actor_kind: String,
    actor_id: i64,
    action: String,
    model_type: Option<String>,
    model_id: Option<i64>,
    details: Option<String>,
    ip_address: Option<String>,
    user_agent: Option<String>,
    created_articles_en: i32,
    created_articles_ur: i32,
    created_articles_multi: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuditLogRow> for AuditLogEntry {
    type Error = DomainError;

    fn try_from(row: AuditLogRow) -> Result<Self, Self::Error> {
        Ok(AuditLogEntry {
            id: Some(row.id),
            actor_kind: row.actor_kind.parse::<ActorKind>()?,
            actor_id: ActorId::new(row.actor_id)?,
            action: row.action.parse::<AuditAction>()?,
            target: AuditTarget::from_columns(row.model_type.as_deref(), row.model_id)?,
            details: row.details,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            counters: LanguageCounters {
                created_articles_en: row.created_articles_en,
                created_articles_ur: row.created_articles_ur,
                created_articles_multi: row.created_articles_multi,
            },
            created_at: Some(row.created_at),
        })
    }
}

fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a AuditLogFilter) {
    let mut has_where = false;
    let mut push_clause = |builder: &mut QueryBuilder<'a, Postgres>| {
        if has_where {
            builder.push(" AND ");
        } else {
            builder.push(" WHERE ");
            has_where = true;
        }
    };

    if let Some(kind) = filter.actor_kind {
        push_clause(builder);
        builder.push("actor_kind = ");
        builder.push_bind(kind.as_str());
    }
    if let Some(id) = filter.actor_id {
        push_clause(builder);
        builder.push("actor_id = ");
        builder.push_bind(i64::from(id));
    }
    if !filter.include_noise {
        push_clause(builder);
        builder.push("action NOT IN ('login', 'logout')");
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn insert(&self, entry: AuditLogEntry) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO audit_logs (actor_kind, actor_id, action, model_type, model_id, \
             details, ip_address, user_agent, created_articles_en, created_articles_ur, \
             created_articles_multi, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, COALESCE($12, now()))",
        )
        .bind(entry.actor_kind.as_str())
        .bind(i64::from(entry.actor_id))
        .bind(entry.action.as_str())
        .bind(entry.target.map(|t| t.model_type()))
        .bind(entry.target.map(|t| t.model_id()))
        .bind(entry.details)
        .bind(entry.ip_address)
        .bind(entry.user_agent)
        .bind(entry.counters.created_articles_en)
        .bind(entry.counters.created_articles_ur)
        .bind(entry.counters.created_articles_multi)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn list_page(
        &self,
        filter: &AuditLogFilter,
        page: u32,
        per_page: u32,
    ) -> DomainResult<(Vec<AuditLogEntry>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM audit_logs");
        apply_filter(&mut count_builder, filter);
        let (total,): (i64,) = count_builder
            .build_query_as()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {LOG_COLUMNS} FROM audit_logs"));
        apply_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(per_page));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(page.saturating_sub(1)) * i64::from(per_page));

        let rows = builder
            .build_query_as::<AuditLogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let entries = rows
            .into_iter()
            .map(AuditLogEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((entries, total.max(0) as u64))
    }

    async fn list_raw(
        &self,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLogEntry>, Option<AuditLogCursor>)> {
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {LOG_COLUMNS} FROM audit_logs"));
        if let Some(cursor) = &cursor {
            builder.push(" WHERE (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<AuditLogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut entries = rows
            .into_iter()
            .map(AuditLogEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

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
