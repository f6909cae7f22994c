use crate::{
    api,
    state::{Form, State, StateAction},
};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub struct UseMatchFormReturn {
    pub state: State,
    pub on_title_change: Callback<InputEvent>,
    pub on_body_change: Callback<InputEvent>,
    pub on_username_change: Callback<InputEvent>,
    pub on_api_token_change: Callback<InputEvent>,
    pub on_create_match: Callback<SubmitEvent>,
    pub on_rematch: Callback<MouseEvent>,
    pub on_recent_winner: Callback<SubmitEvent>,
}

fn input_callback(
    state: &UseReducerHandle<State>,
    action: fn(String) -> StateAction,
) -> Callback<InputEvent> {
    let state = state.clone();

    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
            state.dispatch(action(input.value()));
        }
    })
}

fn issue(state: &UseReducerHandle<State>, counter: &Rc<RefCell<u64>>, form: Form) -> u64 {
    let seq = {
        let mut counter = counter.borrow_mut();
        *counter += 1;
        *counter
    };
    state.dispatch(StateAction::Issued { form, seq });
    seq
}

#[hook]
pub fn use_match_form() -> UseMatchFormReturn {
    let state = use_reducer(State::default);
    let counter = use_mut_ref(|| 0u64);

    let on_create_match = {
        let state = state.clone();
        let counter = counter.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let seq = issue(&state, &counter, Form::Match);
            let draft = state.draft.clone();
            let state = state.clone();

            spawn_local(async move {
                let result = api::create_match(&draft).await;
                if let Err(err) = &result {
                    log::error!("Failed to create match: {:?}", err);
                }
                state.dispatch(StateAction::MatchCreated { seq, result });
            });
        })
    };

    let on_rematch = {
        let state = state.clone();
        let counter = counter.clone();

        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if !state.rematch_offered() {
                return;
            }

            let seq = issue(&state, &counter, Form::Match);
            let draft = state.draft.clone();
            let state = state.clone();

            spawn_local(async move {
                let result = api::replay_match(&draft).await;
                if let Err(err) = &result {
                    log::error!("Failed to create rematch: {:?}", err);
                }
                state.dispatch(StateAction::RematchCreated { seq, result });
            });
        })
    };

    let on_recent_winner = {
        let state = state.clone();
        let counter = counter.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let seq = issue(&state, &counter, Form::RecentMatch);
            let query = state.query.clone();
            let state = state.clone();

            spawn_local(async move {
                let result = api::recent_match_winner(&query).await;
                if let Err(err) = &result {
                    log::error!("Failed to fetch recent match winner: {:?}", err);
                }
                state.dispatch(StateAction::RecentWinner { seq, result });
            });
        })
    };

    UseMatchFormReturn {
        state: (*state).clone(),
        on_title_change: input_callback(&state, StateAction::Title),
        on_body_change: input_callback(&state, StateAction::Body),
        on_username_change: input_callback(&state, StateAction::Username),
        on_api_token_change: input_callback(&state, StateAction::ApiToken),
        on_create_match,
        on_rematch,
        on_recent_winner,
    }
}
