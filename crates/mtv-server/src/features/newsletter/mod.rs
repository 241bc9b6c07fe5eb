//! Newsletter feature
//!
//! A single subscribe endpoint. Subscriptions are append-only; the only
//! duplicate check is against registered user accounts.

pub mod commands;
pub mod routes;

#[cfg(test)]
mod routes_test;

pub use routes::newsletter_routes;
