//! Write operations for the newsletter

pub mod subscribe;

pub use subscribe::{SubscribeCommand, SubscribeError};
