use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use ::scraper::{ElementRef, Selector};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::MatchSummary;
use crate::scraper::{self, element_text};

/// `<team name> (<NvN>)`
static TEAM_BRACKET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*\((\d+v\d+)\)$").expect("team/bracket pattern is valid")
});

#[instrument(skip(client))]
pub(crate) async fn get_match_summaries(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<MatchSummary>> {
    let document = scraper::get_document(client, url).await?;
    let summaries = parse_history(&document)?;
    debug!(count = summaries.len(), "parsed match history");
    Ok(summaries)
}

/// One summary per data row of the history table, in document order.
///
/// Rows without `<td>` cells (headings) are skipped, as are rows of tables
/// nested inside a cell.
pub(crate) fn parse_history(document: &scraper::Html) -> Result<Vec<MatchSummary>> {
    let row_selector = Selector::parse("table > tbody > tr")?;
    Ok(document
        .select(&row_selector)
        .filter(|row| !is_nested(row))
        .filter_map(|row| parse_row(&row))
        .collect_vec())
}

fn is_nested(row: &ElementRef) -> bool {
    row.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|e| e.value().name() == "td")
}

fn parse_row(row: &ElementRef) -> Option<MatchSummary> {
    let cells = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "td")
        .map(|e| element_text(&e))
        .collect_vec();
    if cells.is_empty() {
        return None;
    }
    let cell = |n: usize| cells.get(n).cloned().unwrap_or_default();
    let (team_name, bracket) = split_team_bracket(&cell(1));

    Some(MatchSummary {
        match_id: cell(0),
        team_name,
        bracket,
        outcome: cell(2),
        points: cell(3),
        date: cell(4),
        duration: cell(5),
        arena: cell(6),
    })
}

/// Split `"Alpha Strike (2v2)"` into `("Alpha Strike", "2v2")`. Text that
/// does not follow that shape yields two empty strings.
pub(crate) fn split_team_bracket(text: &str) -> (String, String) {
    TEAM_BRACKET
        .captures(text.trim())
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .unwrap_or_default()
}
