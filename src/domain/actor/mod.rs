pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Actor;
pub use repository::ActorRepository;
pub use value_objects::{ActorId, ActorKind, Capability};
