pub mod articles;
pub mod audit;
