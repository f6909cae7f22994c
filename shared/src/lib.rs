pub use match_id::{CreatedAt, MatchId};
pub use messages::{
    CreateMatchOutcome, CreateMatchResponse, ErrorBody, MatchDraft, RecentMatchQuery,
    RecentWinnerResponse, ReplayMatchResponse,
};

mod match_id;
mod messages;

pub const CREATE_MATCH_PATH: &str = "/create_post";
pub const REPLAY_MATCH_PATH: &str = "/replay_match";
pub const RECENT_MATCH_WINNER_PATH: &str = "/recent_match_winner";
