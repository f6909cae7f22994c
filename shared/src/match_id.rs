use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Identifier of a match or game. Lichess ids are strings, but other
/// deployments answer with plain numbers of any JSON shape.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(untagged)]
pub enum MatchId {
    Number(Number),
    Text(String),
}

/// Creation time of a game as reported by the API: epoch milliseconds
/// (integral or not), or an HTTP date string when the server serialized a
/// datetime object.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(untagged)]
pub enum CreatedAt {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
}

impl From<&str> for MatchId {
    fn from(value: &str) -> Self {
        MatchId::Text(value.to_string())
    }
}

impl From<String> for MatchId {
    fn from(value: String) -> Self {
        MatchId::Text(value)
    }
}

impl From<i64> for MatchId {
    fn from(value: i64) -> Self {
        MatchId::Number(value.into())
    }
}

impl From<u64> for MatchId {
    fn from(value: u64) -> Self {
        MatchId::Number(value.into())
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchId::Number(value) => write!(f, "{}", value),
            MatchId::Text(value) => write!(f, "{}", value),
        }
    }
}
