use yew::prelude::*;

use super::state::{ExplanationAction, ExplanationState};
use crate::api_client::explanation::get_explanation;

#[derive(Properties, PartialEq)]
pub struct ExplanationProps {
    pub prediction: AttrValue,
}

#[function_component(Explanation)]
pub fn explanation(props: &ExplanationProps) -> Html {
    let state = use_reducer(ExplanationState::default);
    let next_ticket = use_mut_ref(|| 0u64);

    let on_click = {
        let state = state.clone();
        let prediction = props.prediction.clone();
        Callback::from(move |_: MouseEvent| {
            let ticket = {
                let mut next_ticket = next_ticket.borrow_mut();
                *next_ticket += 1;
                *next_ticket
            };
            log::debug!("Requesting explanation #{}", ticket);
            state.dispatch(ExplanationAction::Requested(ticket));

            let state = state.clone();
            let prediction = prediction.to_string();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = get_explanation(prediction).await;
                state.dispatch(ExplanationAction::Resolved { ticket, outcome });
            });
        })
    };

    html! {
        <div>
            <h2 class="card-title">{"Explanation"}</h2>
            <button class="btn btn-primary btn-sm mt-2" onclick={on_click}>
                {if state.is_pending() {
                    html! { <span class="loading loading-spinner loading-xs"></span> }
                } else {
                    html! {}
                }}
                {"Get Explanation"}
            </button>
            <p class="mt-4 whitespace-pre-wrap">{&state.text}</p>
        </div>
    }
}
