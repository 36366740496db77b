// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_actor;
mod postgres_article;
mod postgres_audit_log;
mod postgres_trash;

pub(crate) use error::map_sqlx;
pub use postgres_actor::PostgresActorRepository;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_audit_log::PostgresAuditLogRepository;
pub use postgres_trash::PostgresTrashRepository;
