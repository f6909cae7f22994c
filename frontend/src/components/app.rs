use super::{match_form::MatchForm, rematch_prompt::RematchPrompt, winner_form::WinnerForm};
use crate::hooks::{use_match_form, UseMatchFormReturn};
use yew::prelude::*;

const LICHESS_URL: &str = "https://lichess.org";

#[function_component(App)]
pub fn app() -> Html {
    let UseMatchFormReturn {
        state,
        on_title_change,
        on_body_change,
        on_username_change,
        on_api_token_change,
        on_create_match,
        on_rematch,
        on_recent_winner,
    } = use_match_form();

    html! {
        <div class="app">
            <h1>{ "Crypto Chess Betting" }</h1>
            <p class="instructions">
                { "Go to " }
                <a href={LICHESS_URL} target="_blank" rel="noopener noreferrer">{ "Lichess" }</a>
                { " ➡️ 'Preferences' ➡️ 'API Access Token' ➡️ Create API Token with game permissions ➡️ Insert API Token here." }
            </p>
            <MatchForm
                draft={state.draft.clone()}
                {on_title_change}
                {on_body_change}
                {on_create_match}
            />
            if !state.message.is_empty() {
                <p class={classes!(state.rematch_offered().then_some("bold-center"))}>
                    { state.message.clone() }
                </p>
            }
            if let Some(offer) = &state.rematch {
                <RematchPrompt prompt={offer.prompt().to_string()} {on_rematch} />
            }
            <WinnerForm
                query={state.query.clone()}
                message={state.recent_match_message.clone()}
                {on_username_change}
                {on_api_token_change}
                {on_recent_winner}
            />
        </div>
    }
}
