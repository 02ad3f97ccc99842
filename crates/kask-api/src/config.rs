//! Configuration for the Kask API client.

/// Public Kask instance used when no URL is given.
pub const DEFAULT_BASE_URL: &str = "https://kask.kabbage.com/api";

/// Kask API client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, without the `/beers/...` suffix
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Use a different base URL. Trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a different request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// URL listing every tap.
    pub fn taps_url(&self) -> String {
        format!("{}/beers/taps", self.base_url)
    }

    /// URL of the keg contents for one tap.
    pub fn keg_url(&self, tap_id: i64) -> String {
        format!("{}/beers/contents/tap/{}", self.base_url, tap_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://kask.kabbage.com/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080/api/");
        assert_eq!(config.taps_url(), "http://localhost:8080/api/beers/taps");
    }

    #[test]
    fn test_keg_url_uses_decimal_id() {
        let config = ClientConfig::default().with_base_url("http://kask");
        assert_eq!(config.keg_url(65), "http://kask/beers/contents/tap/65");
    }
}
