//! # kask-core
//!
//! Core types, errors, and utilities for the kask taproom dashboard.
//!
//! This crate provides:
//! - [`KaskError`] - Error types for startup, logging, and terminal handling
//! - [`logging`] - Tracing setup and log file management
//! - [`types`] - The taproom domain model (taps, kegs, beers, breweries)
//!
//! ## Example
//!
//! ```no_run
//! use kask_core::{KaskError, Result, logging};
//!
//! fn main() -> kask_core::Result<()> {
//!     // Initialize logging
//!     let _guard = logging::init_logging(None, false)?;
//!
//!     let kegs: Vec<kask_core::KegOnTap> = Vec::new();
//!     if kegs.is_empty() {
//!         return Err(KaskError::EmptyDashboard);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export main types for convenience
pub use error::{KaskError, Result};
pub use logging::{LogGuard, init_logging};
pub use types::{Artwork, Beer, Brewery, Keg, KegOnTap, Style, Tap};
