pub(crate) mod details;
pub(crate) mod history;

pub(crate) use ::scraper::Html;
use ::scraper::ElementRef;
use tracing::debug;

use crate::error::{ArenaError, Result};

/// Form key the detail endpoint expects the match identifier under.
const MATCH_INFO_FIELD: &str = "matchinfo";

/// Fetch a URL and parse the response body as an HTML document.
pub(crate) async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| ArenaError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let body = read_body(url, response).await?;
    Ok(Html::parse_document(&body))
}

/// Post `matchinfo=<match_id>` to `url` and return the raw response body.
pub(crate) async fn post_match_info(
    client: &reqwest::Client,
    url: &str,
    match_id: &str,
) -> Result<String> {
    debug!(url, match_id, "requesting match info");

    let response = client
        .post(url)
        .header("X-Requested-With", "XMLHttpRequest")
        .header(reqwest::header::ACCEPT, "application/json")
        .form(&[(MATCH_INFO_FIELD, match_id)])
        .send()
        .await
        .map_err(|e| ArenaError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    read_body(url, response).await
}

async fn read_body(url: &str, response: reqwest::Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(ArenaError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| ArenaError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}

/// Trimmed text content of `element` and its descendants, with line breaks
/// and tabs folded into spaces.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .replace(['\n', '\t'], " ")
        .trim()
        .to_string()
}
