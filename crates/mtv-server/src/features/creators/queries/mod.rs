//! Read operations for creators

pub mod get;
pub mod list;

pub use get::{GetCreatorError, GetCreatorQuery};
