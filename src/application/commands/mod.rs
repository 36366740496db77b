pub mod articles;
pub mod moderators;
