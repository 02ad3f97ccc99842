//! Kask API client.
//!
//! [`KaskClient`] wraps a reqwest client and knows the two taproom endpoints:
//!
//! - `GET {base}/beers/taps` - every tap
//! - `GET {base}/beers/contents/tap/{id}` - the keg currently on a tap
//!
//! Calls run one after another; there is no retry. A JSON `null` body reads
//! as an empty tap list or an inactive keg. A tap whose keg call is answered
//! with a non-success status is skipped. Any other failure of a tap or keg
//! call aborts the whole collection. Artwork downloads are best-effort and
//! never fail a collection.

use std::time::Duration;

use kask_core::{Artwork, KegOnTap, Tap};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::taproom::Taproom;

/// Client for a single Kask API instance.
#[derive(Debug, Clone)]
pub struct KaskClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl KaskClient {
    /// Create a client from config.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch every tap known to the taproom.
    ///
    /// A `null` body is an empty list.
    pub async fn fetch_taps(&self) -> Result<Vec<Tap>> {
        let url = self.config.taps_url();
        let taps: Vec<Tap> = self.get_json(&url, "tap list").await?;
        debug!(count = taps.len(), "fetched taps");
        Ok(taps)
    }

    /// Fetch the keg contents of one tap.
    ///
    /// A `null` body is an inactive keg.
    pub async fn fetch_keg_on_tap(&self, tap_id: i64) -> Result<KegOnTap> {
        let url = self.config.keg_url(tap_id);
        self.get_json(&url, "keg contents").await
    }

    /// Download and decode an image.
    ///
    /// Returns `None` for an empty URL or on any network, status, or decode
    /// failure.
    pub async fn fetch_image(&self, url: &str) -> Option<Artwork> {
        if url.trim().is_empty() {
            return None;
        }

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "image request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(url, status = %response.status(), "image request rejected");
            return None;
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(url, error = %e, "image download failed");
                return None;
            }
        };

        match Artwork::from_bytes(&bytes) {
            Ok(artwork) => Some(artwork),
            Err(e) => {
                warn!(url, error = %e, "image decode failed");
                None
            }
        }
    }

    /// Fetch the keg on every tap and keep the active ones.
    ///
    /// The result follows the order of `taps`. Each kept keg gets its
    /// originating tap attached, plus the beer label and brewery images when
    /// they can be fetched.
    pub async fn collect_active_kegs(&self, taps: &[Tap]) -> Result<Vec<KegOnTap>> {
        let mut kegs = Vec::with_capacity(taps.len());

        for tap in taps {
            let mut on_tap = match self.fetch_keg_on_tap(tap.id).await {
                Ok(on_tap) => on_tap,
                Err(ApiError::Status { url, status }) => {
                    warn!(tap_id = tap.id, %url, %status, "keg request rejected, skipping tap");
                    continue;
                }
                Err(e) => return Err(e),
            };
            if !on_tap.is_active() {
                debug!(tap_id = tap.id, "tap has no active keg");
                continue;
            }

            on_tap.keg.tap = tap.clone();
            let beer = &mut on_tap.keg.beer;
            beer.image = self.fetch_image(&beer.label_url).await;
            beer.brewery.image = self.fetch_image(&beer.brewery.image_url).await;

            debug!(
                tap_id = tap.id,
                keg_id = on_tap.keg.id,
                beer = %on_tap.keg.beer.name,
                "collected keg"
            );
            kegs.push(on_tap);
        }

        info!(taps = taps.len(), active = kegs.len(), "collected active kegs");
        Ok(kegs)
    }

    /// Fetch the tap list and then every active keg on it.
    pub async fn fetch_active_kegs(&self) -> Result<Vec<KegOnTap>> {
        let taps = self.fetch_taps().await?;
        self.collect_active_kegs(&taps).await
    }

    /// Fetch everything the dashboard needs, telling an empty tap list apart
    /// from taps with nothing active on them.
    pub async fn fetch_taproom(&self) -> Result<Taproom> {
        let taps = self.fetch_taps().await?;
        if taps.is_empty() {
            info!("no taps configured");
            return Ok(Taproom::NoTaps);
        }

        let kegs = self.collect_active_kegs(&taps).await?;
        if kegs.is_empty() {
            info!(taps = taps.len(), "no active kegs");
            return Ok(Taproom::NoKegs);
        }
        Ok(Taproom::Open(kegs))
    }

    /// GET a URL and decode its JSON body. A `null` body decodes to
    /// `T::default()`.
    async fn get_json<T: DeserializeOwned + Default>(&self, url: &str, context: &str) -> Result<T> {
        debug!(url, "GET");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let body = response.bytes().await?;
        let value: Option<T> =
            serde_json::from_slice(&body).map_err(|e| ApiError::decode(context, e))?;
        Ok(value.unwrap_or_default())
    }
}
