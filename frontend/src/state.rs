use crate::{api::ApiError, format};
use serde_json::Value;
use shared::{
    CreateMatchOutcome, CreateMatchResponse, MatchDraft, RecentMatchQuery, RecentWinnerResponse,
    ReplayMatchResponse,
};
use std::rc::Rc;
use yew::prelude::*;

const REMATCH_PROMPT: &str = "Do you want to play again with the same opponent?";

/// The two independent status lines of the page. Create and rematch share one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Form {
    Match,
    RecentMatch,
}

#[derive(Clone, PartialEq, Debug)]
pub struct RematchOffer {
    pub existing_match: Value,
}

impl RematchOffer {
    pub fn prompt(&self) -> &str {
        REMATCH_PROMPT
    }
}

pub enum StateAction {
    Title(String),
    Body(String),
    Username(String),
    ApiToken(String),
    Issued {
        form: Form,
        seq: u64,
    },
    MatchCreated {
        seq: u64,
        result: Result<CreateMatchResponse, ApiError>,
    },
    RematchCreated {
        seq: u64,
        result: Result<ReplayMatchResponse, ApiError>,
    },
    RecentWinner {
        seq: u64,
        result: Result<RecentWinnerResponse, ApiError>,
    },
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct State {
    pub draft: MatchDraft,
    pub query: RecentMatchQuery,
    pub message: String,
    pub recent_match_message: String,
    /// Present exactly while the page offers a rematch.
    pub rematch: Option<RematchOffer>,
    match_seq: u64,
    recent_match_seq: u64,
}

impl State {
    pub fn rematch_offered(&self) -> bool {
        self.rematch.is_some()
    }

    /// Only the newest request of a form may update it; older answers are stale.
    pub fn is_current(&self, form: Form, seq: u64) -> bool {
        match form {
            Form::Match => self.match_seq == seq,
            Form::RecentMatch => self.recent_match_seq == seq,
        }
    }

    fn match_created(&self, result: Result<CreateMatchResponse, ApiError>) -> Self {
        match result.map(CreateMatchOutcome::from) {
            Ok(CreateMatchOutcome::Created { match_id }) => Self {
                message: format!(
                    "Match Created. Match ID: {}",
                    format::match_id(match_id.as_ref())
                ),
                draft: MatchDraft::default(),
                ..self.clone()
            },
            Ok(CreateMatchOutcome::Exists {
                message,
                existing_match,
            }) => Self {
                message,
                rematch: Some(RematchOffer { existing_match }),
                ..self.clone()
            },
            // Nothing to replay without a reference, so no offer is made.
            Ok(CreateMatchOutcome::Conflict { message }) => Self {
                message,
                rematch: None,
                ..self.clone()
            },
            Err(err) => Self {
                message: err.to_string(),
                ..self.clone()
            },
        }
    }

    fn rematch_created(&self, result: Result<ReplayMatchResponse, ApiError>) -> Self {
        match result {
            Ok(response) => Self {
                message: format!(
                    "Rematch Created. Match ID: {}",
                    format::match_id(response.match_id.as_ref())
                ),
                rematch: None,
                draft: MatchDraft::default(),
                ..self.clone()
            },
            Err(err) => Self {
                message: err.to_string(),
                ..self.clone()
            },
        }
    }

    fn recent_winner(&self, result: Result<RecentWinnerResponse, ApiError>) -> Self {
        let recent_match_message = match result {
            Ok(response) if response.is_success() => format!(
                "Match ID: {}, Created At: {}, Winner: {}",
                format::match_id(response.game_id.as_ref()),
                format::created_at(response.created_at.as_ref()),
                response.winner.as_deref().unwrap_or("unknown"),
            ),
            Ok(response) => ApiError::Application(response.error.unwrap_or_default()).to_string(),
            Err(err) => err.to_string(),
        };

        // Credentials are dropped after every lookup, failed ones included.
        Self {
            recent_match_message,
            query: RecentMatchQuery::default(),
            ..self.clone()
        }
    }
}

impl Reducible for State {
    type Action = StateAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StateAction::Title(title) => Self {
                draft: MatchDraft {
                    title,
                    ..self.draft.clone()
                },
                ..(*self).clone()
            },
            StateAction::Body(body) => Self {
                draft: MatchDraft {
                    body,
                    ..self.draft.clone()
                },
                ..(*self).clone()
            },
            StateAction::Username(username) => Self {
                query: RecentMatchQuery {
                    username,
                    ..self.query.clone()
                },
                ..(*self).clone()
            },
            StateAction::ApiToken(api_token) => Self {
                query: RecentMatchQuery {
                    api_token,
                    ..self.query.clone()
                },
                ..(*self).clone()
            },
            StateAction::Issued {
                form: Form::Match,
                seq,
            } => Self {
                match_seq: seq,
                ..(*self).clone()
            },
            StateAction::Issued {
                form: Form::RecentMatch,
                seq,
            } => Self {
                recent_match_seq: seq,
                ..(*self).clone()
            },
            StateAction::MatchCreated { seq, result } if self.is_current(Form::Match, seq) => {
                self.match_created(result)
            }
            StateAction::RematchCreated { seq, result } if self.is_current(Form::Match, seq) => {
                self.rematch_created(result)
            }
            StateAction::RecentWinner { seq, result }
                if self.is_current(Form::RecentMatch, seq) =>
            {
                self.recent_winner(result)
            }
            StateAction::MatchCreated { seq, .. }
            | StateAction::RematchCreated { seq, .. }
            | StateAction::RecentWinner { seq, .. } => {
                log::debug!("Dropping stale response for request #{}", seq);
                return self;
            }
        }
        .into()
    }
}
