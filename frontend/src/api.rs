use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    CreateMatchResponse, ErrorBody, MatchDraft, RecentMatchQuery, RecentWinnerResponse,
    ReplayMatchResponse, CREATE_MATCH_PATH, RECENT_MATCH_WINNER_PATH, REPLAY_MATCH_PATH,
};
use std::fmt;

pub const API_BASE: &str = "http://localhost:5000";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

#[derive(Clone, PartialEq, Debug)]
pub enum ApiError {
    /// The API answered with an `{error}` body.
    Application(String),
    /// No usable answer. The detail is for the log only.
    Transport(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Application(error) => write!(f, "Error: {}", error),
            ApiError::Transport(_) => write!(f, "{}", UNKNOWN_ERROR),
        }
    }
}

/// Maps a raw HTTP answer onto the two error tiers. Any non-2xx status counts
/// as a failure, and only an `{error}` body makes it an application error.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|err| {
            ApiError::Transport(format!("HTTP {} with undecodable body: {}", status, err))
        });
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) => Err(ApiError::Application(error)),
        Err(_) => Err(ApiError::Transport(format!(
            "HTTP {} without an error body",
            status
        ))),
    }
}

async fn post<B, T>(path: &str, payload: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = format!("{}{}", API_BASE, path);
    log::info!("POST {}", url);

    let response = Request::post(&url).json(payload)?.send().await?;
    let status = response.status();
    let body = response.text().await?;
    log::debug!("{} answered {}: {}", path, status, body);

    decode_response(status, &body)
}

pub async fn create_match(draft: &MatchDraft) -> Result<CreateMatchResponse, ApiError> {
    post(CREATE_MATCH_PATH, draft).await
}

pub async fn replay_match(draft: &MatchDraft) -> Result<ReplayMatchResponse, ApiError> {
    post(REPLAY_MATCH_PATH, draft).await
}

pub async fn recent_match_winner(
    query: &RecentMatchQuery,
) -> Result<RecentWinnerResponse, ApiError> {
    post(RECENT_MATCH_WINNER_PATH, query).await
}
