use shared::RecentMatchQuery;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub query: RecentMatchQuery,
    pub message: String,
    pub on_username_change: Callback<InputEvent>,
    pub on_api_token_change: Callback<InputEvent>,
    pub on_recent_winner: Callback<SubmitEvent>,
}

#[function_component(WinnerForm)]
pub fn winner_form(props: &Props) -> Html {
    html! {
        <>
            <h2>{ "Check Winner" }</h2>
            <form class="form-group" onsubmit={props.on_recent_winner.clone()}>
                <input
                    type="text"
                    name="username"
                    placeholder="Username"
                    oninput={props.on_username_change.clone()}
                    value={props.query.username.clone()}
                />
                <input
                    type="text"
                    name="api_token"
                    placeholder="API Token"
                    oninput={props.on_api_token_change.clone()}
                    value={props.query.api_token.clone()}
                />
                <button type="submit" class="btn">{ "Get Winner" }</button>
            </form>
            if !props.message.is_empty() {
                <p>{ props.message.clone() }</p>
            }
        </>
    }
}
