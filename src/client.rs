use tracing::instrument;

use crate::aggregate;
use crate::config::ClientConfig;
use crate::error::{ArenaError, Result};
use crate::model::*;
use crate::scraper::{self, details::HttpDetailSource};

/// The main entry point for collecting a character's arena history.
///
/// `ArenaClient` wraps a [`reqwest::Client`] and exposes methods to fetch the
/// match history table, the per-character details of each match, or both in
/// one go.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> arena_history::Result<()> {
/// use arena_history::{ArenaClient, ClientConfig};
///
/// let client = ArenaClient::with_config(ClientConfig::new("https://armory.example.com"))?;
/// let matches = client.fetch_all_match_details("Thrall", "Stormrage").await?;
/// println!("Fetched {} matches", matches.len());
/// # Ok(())
/// # }
/// ```
pub struct ArenaClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ArenaClient {
    /// Create a new client with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client whose HTTP layer applies `config`'s timeout and user agent.
    ///
    /// Fails early if `config.base_url` is not an http(s) URL.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.base()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ArenaError::ClientBuild)?;
        Ok(Self { http, config })
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, TLS, extra headers, etc.
    /// The client's own timeout and user agent take precedence over `config`.
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the match history table of a character.
    #[instrument(skip(self))]
    pub async fn get_match_summaries(
        &self,
        character: &str,
        realm: &str,
    ) -> Result<Vec<MatchSummary>> {
        let url = self.config.history_url(character, realm)?;
        scraper::history::get_match_summaries(&self.http, url.as_str()).await
    }

    /// Fetch the details of every match in `summaries` and join them with
    /// their summaries, preserving order.
    #[instrument(skip(self, summaries))]
    pub async fn get_match_details(
        &self,
        character: &str,
        realm: &str,
        summaries: &[MatchSummary],
    ) -> Result<Vec<MatchDetails>> {
        let url = self.config.history_url(character, realm)?;
        let source = HttpDetailSource {
            client: &self.http,
            url: url.as_str(),
        };
        aggregate::aggregate(
            &source,
            character,
            realm,
            summaries,
            self.config.concurrency(),
        )
        .await
    }

    /// Fetch a character's match history and the details of every match in it.
    #[instrument(skip(self))]
    pub async fn fetch_all_match_details(
        &self,
        character: &str,
        realm: &str,
    ) -> Result<Vec<MatchDetails>> {
        let summaries = self.get_match_summaries(character, realm).await?;
        self.get_match_details(character, realm, &summaries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_history_makes_no_requests() {
        // Nothing listens on this address; any request would fail.
        let config = ClientConfig::new("http://127.0.0.1:9");
        let client = ArenaClient::with_config(config).unwrap();
        let result = client
            .get_match_details("Thrall", "Stormrage", &[])
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_with_config_rejects_bad_base_url() {
        let err = ArenaClient::with_config(ClientConfig::new("not a url"))
            .err()
            .unwrap();
        assert!(matches!(err, ArenaError::InvalidBaseUrl { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_remote_fetch_error() {
        let config = ClientConfig::new("http://127.0.0.1:9")
            .with_request_timeout(std::time::Duration::from_secs(2));
        let client = ArenaClient::with_config(config).unwrap();
        let err = client
            .fetch_all_match_details("Thrall", "Stormrage")
            .await
            .unwrap_err();
        assert!(err.is_remote_fetch());
        assert!(matches!(err, ArenaError::Http { .. }));
    }
}
