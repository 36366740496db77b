mod get_by_slug;
mod list;
mod service;

pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
