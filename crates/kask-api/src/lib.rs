//! # kask-api
//!
//! HTTP client for the Kask taproom API.
//!
//! This crate provides:
//! - [`KaskClient`] - Fetches taps, keg contents, and artwork
//! - [`ClientConfig`] - Base URL and request timeout
//! - [`ApiError`] - Failures of the tap/keg calls
//! - [`Taproom`] - What a startup fetch found
//!
//! ## Example
//!
//! ```no_run
//! use kask_api::{ClientConfig, KaskClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), kask_api::ApiError> {
//!     let client = KaskClient::new(ClientConfig::default())?;
//!     for k in client.fetch_active_kegs().await? {
//!         println!("{} on {}", k.keg.beer.name, k.keg.tap.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod taproom;

pub use client::KaskClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use taproom::Taproom;
