pub mod actors;
pub mod articles;
pub mod audit;
pub mod pagination;
pub mod serde_time;

pub use actors::{ActorDto, AuthenticatedActor, RequestMeta};
pub use articles::{ArticleDto, ArticleListItemDto, ArticleViewDto, ImageDto};
pub use audit::{ArticleRefDto, AuditLogEntryDto};
pub use pagination::{CursorPage, Page};
