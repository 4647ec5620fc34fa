use std::future::Future;
use std::pin::pin;

use futures::stream::{self, Stream, StreamExt};
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::model::{CharacterDetail, MatchDetails, MatchSummary};
use crate::normalize::normalize;
use crate::scraper::details::DetailSource;

/// Run `f` over `items` with at most `max_concurrent` futures in flight.
///
/// Futures are started in submission order as slots free up, and results are
/// yielded in submission order regardless of which finishes first.
pub(crate) fn bounded<I, F, Fut>(
    items: I,
    max_concurrent: usize,
    f: F,
) -> impl Stream<Item = Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    stream::iter(items).map(f).buffered(max_concurrent.max(1))
}

/// Fetch, normalize and join the details of every match in `summaries`.
///
/// Output follows the order of `summaries`. The first failed fetch aborts the
/// whole run and cancels whatever is still in flight.
#[instrument(skip(source, summaries), fields(matches = summaries.len()))]
pub async fn aggregate<S>(
    source: &S,
    character: &str,
    realm: &str,
    summaries: &[MatchSummary],
    max_concurrent: usize,
) -> Result<Vec<MatchDetails>>
where
    S: DetailSource + Sync,
{
    let match_ids = summaries.iter().map(|s| s.match_id.as_str()).collect_vec();
    let mut batches = pin!(bounded(match_ids, max_concurrent, |match_id| async move {
        (match_id, source.fetch_details(match_id, character, realm).await)
    }));

    let mut result = Vec::with_capacity(summaries.len());
    while let Some((match_id, batch)) = batches.next().await {
        let batch = batch.inspect_err(|e| warn!(match_id, error = %e, "aborting aggregation"))?;
        let details = batch.into_iter().map(normalize).collect_vec();
        match join(summaries, match_id, details) {
            Some(joined) => result.push(joined),
            None => debug!(match_id, "no summary for fetched match, dropping"),
        }
    }

    debug!(count = result.len(), "aggregated match details");
    Ok(result)
}

/// Pair `details` with the first summary carrying `match_id`.
fn join(
    summaries: &[MatchSummary],
    match_id: &str,
    details: Vec<CharacterDetail>,
) -> Option<MatchDetails> {
    summaries
        .iter()
        .find(|s| s.match_id == match_id)
        .map(|summary| MatchDetails {
            summary: summary.clone(),
            details,
        })
}
