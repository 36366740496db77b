pub mod entity;
pub mod repository;

pub use entity::NewTrashRecord;
pub use repository::TrashRepository;
