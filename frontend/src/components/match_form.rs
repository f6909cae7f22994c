use shared::MatchDraft;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub draft: MatchDraft,
    pub on_title_change: Callback<InputEvent>,
    pub on_body_change: Callback<InputEvent>,
    pub on_create_match: Callback<SubmitEvent>,
}

#[function_component(MatchForm)]
pub fn match_form(props: &Props) -> Html {
    html! {
        <form class="form-group" onsubmit={props.on_create_match.clone()}>
            <h2>{ "Create Match" }</h2>
            <input
                type="text"
                name="title"
                placeholder="Opponent Username"
                oninput={props.on_title_change.clone()}
                value={props.draft.title.clone()}
            />
            <input
                type="text"
                name="body"
                placeholder="Your API Token"
                oninput={props.on_body_change.clone()}
                value={props.draft.body.clone()}
            />
            <button type="submit" class="btn">{ "Submit" }</button>
        </form>
    }
}
