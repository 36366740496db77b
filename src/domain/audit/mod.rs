pub mod cursor;
pub mod entity;
pub mod repository;

pub use cursor::AuditLogCursor;
pub use entity::{AuditAction, AuditLogEntry, AuditTarget, LanguageCounters};
pub use repository::{AuditLogFilter, AuditLogRepository};
