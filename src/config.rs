use std::time::Duration;

use url::Url;

use crate::error::{ArenaError, Result};

/// Default ceiling on detail requests in flight at once.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 32;

const DEFAULT_BASE_URL: &str = "https://armory.example.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for an [`ArenaClient`](crate::ArenaClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root, without a trailing slash.
    pub base_url: String,
    /// Maximum number of match detail requests in flight at once.
    pub max_concurrent_fetches: usize,
    /// Applied to every request so a stalled remote cannot hang a crawl.
    pub request_timeout: Duration,
    /// Sent as the `User-Agent` header on every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config pointing at `base_url` with all other settings default.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn with_max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = max;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Concurrency ceiling actually used by the aggregator (never zero).
    pub(crate) fn concurrency(&self) -> usize {
        self.max_concurrent_fetches.max(1)
    }

    /// Parse `base_url`, rejecting anything that can't take path segments.
    pub(crate) fn base(&self) -> Result<Url> {
        let invalid = |reason: String| ArenaError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) site root".to_string()));
        }
        Ok(url)
    }

    /// URL of a character's match history page. Detail requests are posted
    /// to the same URL.
    pub(crate) fn history_url(&self, character: &str, realm: &str) -> Result<Url> {
        let mut url = self.base()?;
        url.path_segments_mut()
            .map_err(|()| ArenaError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "base url cannot take path segments".to_string(),
            })?
            .pop_if_empty()
            .extend(["character", realm, character, "matches"]);
        Ok(url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            request_timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("arena-history/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.max_concurrent_fetches, 32);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("arena-history/"));
    }

    #[test]
    fn test_zero_concurrency_clamped() {
        let config = ClientConfig::default().with_max_concurrent_fetches(0);
        assert_eq!(config.concurrency(), 1);
    }

    #[test]
    fn test_history_url_encodes_segments() {
        let config = ClientConfig::new("https://armory.test/");
        assert_eq!(
            config.history_url("Zug zug", "Argent Dawn").unwrap().as_str(),
            "https://armory.test/character/Argent%20Dawn/Zug%20zug/matches"
        );
        assert_eq!(
            config.history_url("a/b", "eu?x").unwrap().as_str(),
            "https://armory.test/character/eu%3Fx/a%2Fb/matches"
        );
    }

    #[test]
    fn test_history_url_encodes_non_ascii() {
        let config = ClientConfig::new("https://armory.test");
        assert_eq!(
            config.history_url("Ñor", "eu").unwrap().as_str(),
            "https://armory.test/character/eu/%C3%91or/matches"
        );
    }

    #[test]
    fn test_history_url_keeps_base_path() {
        let config = ClientConfig::new("https://example.test/wow/");
        assert_eq!(
            config.history_url("Thrall", "eu").unwrap().as_str(),
            "https://example.test/wow/character/eu/Thrall/matches"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ClientConfig::new("armory.test").history_url("Thrall", "eu").unwrap_err();
        assert!(matches!(err, ArenaError::InvalidBaseUrl { .. }));

        let err = ClientConfig::new("mailto:admin@armory.test").base().unwrap_err();
        assert!(matches!(err, ArenaError::InvalidBaseUrl { .. }));
    }
}
