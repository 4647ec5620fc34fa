use std::future::Future;

use tracing::{debug, instrument};

use crate::error::{ArenaError, Result};
use crate::model::CharacterDetail;
use crate::scraper;

/// Anything that can produce the raw character records for one match.
///
/// Implementations perform a single lookup per call and must not retry or
/// normalize; that is left to the aggregator.
pub trait DetailSource {
    fn fetch_details(
        &self,
        match_id: &str,
        character: &str,
        realm: &str,
    ) -> impl Future<Output = Result<Vec<CharacterDetail>>> + Send;
}

/// Fetches match details from the site by posting the match identifier to
/// the character's history page.
pub(crate) struct HttpDetailSource<'a> {
    pub(crate) client: &'a reqwest::Client,
    pub(crate) url: &'a str,
}

impl DetailSource for HttpDetailSource<'_> {
    #[instrument(skip(self))]
    async fn fetch_details(
        &self,
        match_id: &str,
        character: &str,
        realm: &str,
    ) -> Result<Vec<CharacterDetail>> {
        let body = scraper::post_match_info(self.client, self.url, match_id).await?;
        let details = decode_details(self.url, &body)?;
        debug!(match_id, count = details.len(), "fetched match details");
        Ok(details)
    }
}

pub(crate) fn decode_details(url: &str, body: &str) -> Result<Vec<CharacterDetail>> {
    serde_json::from_str(body).map_err(|e| ArenaError::Decode {
        url: url.to_owned(),
        source: e,
    })
}
