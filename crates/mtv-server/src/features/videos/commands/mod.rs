//! Write operations for the video catalog

pub mod rate;

pub use rate::{RateVideoCommand, RateVideoError};
