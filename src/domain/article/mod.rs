pub mod bilingual;
pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleDraft, ArticleUpdate, Image, NewArticle, NewImage};
pub use repository::{
    ArticleListFilter, ArticleReadRepository, ArticleSummary, ArticleWriteRepository,
};
pub use value_objects::{ArticleId, ArticleSlug, ImageId, Language, Locale};
