//! Query form for the volatility ranking.

use crate::state::AppState;
use dioxus::prelude::*;
use qpf_api::client::QueryRequest;

const TOP_K_MIN: usize = 1;
const TOP_K_MAX: usize = 50;

/// Result-count input plus a submit button.
#[component]
pub fn VolatilityForm(onsubmit: EventHandler<QueryRequest>) -> Element {
    let mut state = use_context::<AppState>();
    let top_k = (state.top_k)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(count) = evt.value().parse::<usize>() {
            state.top_k.set(count.clamp(TOP_K_MIN, TOP_K_MAX));
        }
    };

    let submit = move |_| {
        onsubmit.call(QueryRequest::Volatility {
            top_k: (state.top_k)(),
        });
    };

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Show: "
                input {
                    r#type: "number",
                    value: "{top_k}",
                    min: "{TOP_K_MIN}",
                    max: "{TOP_K_MAX}",
                    style: "width: 60px;",
                    onchange: on_change,
                }
                " days"
            }
            button {
                style: "padding: 6px 16px;",
                onclick: submit,
                "Find Volatile Days"
            }
        }
    }
}
