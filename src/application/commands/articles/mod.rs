mod capability;
mod create;
mod remove_image;
mod retire;
mod service;
mod update;

pub use create::{CreateArticleCommand, ImageUpload};
pub use remove_image::RemoveImageCommand;
pub use retire::RetireArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
