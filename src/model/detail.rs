use serde::{Deserialize, Deserializer, Serialize};

/// Stats for one character in one match, as returned by the match detail
/// endpoint.
///
/// Fresh off the wire `teamnamerich` and the two change fields still carry
/// markup; see [`normalize`](crate::normalize::normalize).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDetail {
    #[serde(default)]
    pub realm: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default)]
    pub teamname: String,
    #[serde(default)]
    pub teamnamerich: String,
    #[serde(default, deserialize_with = "counter")]
    pub damage: String,
    #[serde(default, deserialize_with = "counter")]
    pub deaths: String,
    #[serde(default, deserialize_with = "counter")]
    pub healing: String,
    #[serde(default, deserialize_with = "counter")]
    pub kills: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchmaking_change: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_change: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Counter {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Counters come back as strings or bare numbers depending on the page
/// version; keep them as text either way.
fn counter<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Counter>::deserialize(deserializer)? {
        Some(Counter::Text(s)) => s,
        Some(Counter::Int(n)) => n.to_string(),
        Some(Counter::Float(n)) => n.to_string(),
        None => String::new(),
    })
}
