use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub prompt: String,
    pub on_rematch: Callback<MouseEvent>,
}

#[function_component(RematchPrompt)]
pub fn rematch_prompt(props: &Props) -> Html {
    html! {
        <div class="rematch-prompt">
            <p>{ props.prompt.clone() }</p>
            <button class="btn" onclick={props.on_rematch.clone()}>{ "Yes" }</button>
        </div>
    }
}
