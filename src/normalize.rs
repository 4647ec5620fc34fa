//! Cleanup of the markup the detail endpoint embeds in some fields.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::model::CharacterDetail;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Signed delta right before a closing tag: `+12</span>`.
static DELTA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([+-]\d+)</").expect("delta pattern is valid"));

/// Resulting rating right before an opening tag: `1543 <span`.
static OVERALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?\d+)\s*<[A-Za-z]").expect("overall pattern is valid"));

/// Return `detail` with markup stripped from the rich team name and both
/// rating change fields rewritten as `"<delta> (<overall>)"`.
///
/// A change field that can't be parsed keeps its raw value, and fields the
/// payload didn't carry stay absent.
pub fn normalize(detail: CharacterDetail) -> CharacterDetail {
    CharacterDetail {
        teamnamerich: strip_markup(&detail.teamnamerich),
        matchmaking_change: detail.matchmaking_change.map(format_change),
        personal_change: detail.personal_change.map(format_change),
        ..detail
    }
}

/// Remove every `<...>` span from `text`.
pub fn strip_markup(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

fn format_change(raw: String) -> String {
    if raw.is_empty() {
        return raw;
    }
    match parse_change(&raw) {
        Some((delta, overall)) => format!("{delta} ({overall})"),
        None => {
            trace!(raw, "change field not recognised, keeping raw value");
            raw
        }
    }
}

fn parse_change(raw: &str) -> Option<(&str, &str)> {
    let delta = DELTA.captures(raw)?.get(1)?.as_str();
    let overall = OVERALL.captures(raw)?.get(1)?.as_str();
    Some((delta, overall))
}
