//! MORONS.TV Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging for the MORONS.TV workspace.
//!
//! # Overview
//!
//! This crate provides functionality used across all MORONS.TV workspace
//! members:
//!
//! - **Error Handling**: the workspace-wide [`MtvError`] and `Result` alias
//! - **Logging**: centralized `tracing` setup with console/file targets
//!
//! # Example
//!
//! ```no_run
//! use mtv_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     tracing::info!("Application started");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{MtvError, Result};
