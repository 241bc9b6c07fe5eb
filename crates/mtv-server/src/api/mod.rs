//! API response types shared across feature routes

pub mod response;
