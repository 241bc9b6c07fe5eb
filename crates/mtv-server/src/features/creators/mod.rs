//! Creator feature
//!
//! Read-only listing and detail for the site's content creators.

pub mod queries;
pub mod routes;


pub use routes::creators_routes;
