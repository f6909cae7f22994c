use crate::{CreatedAt, MatchId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const EXISTS_STATUS: &str = "exists";
const SUCCESS_STATUS: &str = "success";

/// Body of the create and replay calls. `title` is the opponent's username,
/// `body` the caller's API token.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct MatchDraft {
    pub title: String,
    pub body: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct RecentMatchQuery {
    pub username: String,
    pub api_token: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct CreateMatchResponse {
    pub status: Option<String>,
    pub match_id: Option<MatchId>,
    pub message: Option<String>,
    pub existing_match: Option<Value>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum CreateMatchOutcome {
    Created {
        match_id: Option<MatchId>,
    },
    /// The match already exists and can be replayed.
    Exists {
        message: String,
        existing_match: Value,
    },
    /// The server reported an existing match but gave no reference to it.
    Conflict { message: String },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ReplayMatchResponse {
    pub match_id: Option<MatchId>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RecentWinnerResponse {
    pub status: Option<String>,
    pub game_id: Option<MatchId>,
    pub created_at: Option<CreatedAt>,
    pub winner: Option<String>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl From<CreateMatchResponse> for CreateMatchOutcome {
    fn from(response: CreateMatchResponse) -> Self {
        match response.status.as_deref() {
            Some(EXISTS_STATUS) => {
                let message = response.message.unwrap_or_default();
                match response.existing_match {
                    Some(existing_match) if !existing_match.is_null() => {
                        CreateMatchOutcome::Exists {
                            message,
                            existing_match,
                        }
                    }
                    _ => CreateMatchOutcome::Conflict { message },
                }
            }
            _ => CreateMatchOutcome::Created {
                match_id: response.match_id,
            },
        }
    }
}

impl RecentWinnerResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }
}
