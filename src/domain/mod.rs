pub mod actor;
pub mod article;
pub mod audit;
pub mod errors;
pub mod trash;
