//! Query form for the date-based similarity search.

use crate::state::AppState;
use dioxus::prelude::*;
use qpf_api::client::QueryRequest;

/// Result count requested for date searches.
const DATE_TOP_K: usize = 5;

/// Dropdown of available dates plus a submit button.
///
/// The date list is fetched once at startup; if that failed, the control
/// degrades to a disabled "could not load" placeholder and submission stays
/// disabled, non-fatal to the rest of the page.
#[component]
pub fn DateForm(onsubmit: EventHandler<QueryRequest>) -> Element {
    let mut state = use_context::<AppState>();
    let dates = state.available_dates.read().clone();
    let selected = (state.selected_date)();
    let failed = (state.dates_failed)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_date.set(evt.value());
    };

    let submit = move |_| {
        let target_date = (state.selected_date)();
        if !target_date.is_empty() {
            onsubmit.call(QueryRequest::Date {
                target_date,
                top_k: DATE_TOP_K,
            });
        }
    };

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; margin: 8px 0;",
            label {
                r#for: "date-select",
                style: "font-weight: bold;",
                "Date: "
            }
            if failed {
                select {
                    id: "date-select",
                    disabled: true,
                    option { "could not load dates" }
                }
            } else {
                select {
                    id: "date-select",
                    onchange: on_change,
                    for date in dates.iter() {
                        option {
                            value: "{date}",
                            selected: *date == selected,
                            "{date}"
                        }
                    }
                }
            }
            button {
                style: "padding: 6px 16px;",
                disabled: failed || selected.is_empty(),
                onclick: submit,
                "Find Similar Days"
            }
        }
    }
}
