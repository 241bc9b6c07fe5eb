//! Read operations for the video catalog

pub mod by_category;
pub mod featured;
pub mod get;
pub mod list;
pub mod most_moronic;
pub mod trending;

pub use get::{GetVideoError, GetVideoQuery};
