use serde::Serialize;

/// One row of a character's match history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub match_id: String,
    pub team_name: String,
    /// Team-size label such as `2v2` or `3v3`.
    pub bracket: String,
    pub outcome: String,
    /// Signed rating change as shown on the page, e.g. `+14`.
    pub points: String,
    pub date: String,
    pub duration: String,
    pub arena: String,
}

/// A match summary joined with the per-character details of that match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchDetails {
    #[serde(flatten)]
    pub summary: MatchSummary,
    pub details: Vec<super::CharacterDetail>,
}

impl MatchDetails {
    pub fn match_id(&self) -> &str {
        &self.summary.match_id
    }
}
