//! Video catalog feature
//!
//! Queries: all videos, featured, trending (views descending), most-moronic
//! (rank ascending), by category, and single-video detail (which bumps the
//! view count and reports the average rating). Commands: rate a video.

pub mod commands;
pub mod queries;
pub mod routes;


pub use routes::videos_routes;
