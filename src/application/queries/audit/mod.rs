pub(crate) mod common;
mod export;
mod list;
mod service;

pub use export::ExportLogsQuery;
pub use list::ListLogsQuery;
pub use service::AuditQueryService;
