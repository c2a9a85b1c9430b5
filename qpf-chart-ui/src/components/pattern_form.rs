//! Query form for the OHLC pattern search.

use dioxus::prelude::*;
use qpf_api::client::QueryRequest;

/// Result count requested for pattern searches.
const PATTERN_TOP_K: usize = 5;

fn parse_price(input: &str) -> Option<f64> {
    let value = input.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Four price inputs plus a submit button.
///
/// Submits only when all four prices parse as finite numbers; otherwise an
/// inline hint is shown and nothing is sent.
#[component]
pub fn PatternForm(onsubmit: EventHandler<QueryRequest>) -> Element {
    let mut open_input = use_signal(String::new);
    let mut high_input = use_signal(String::new);
    let mut low_input = use_signal(String::new);
    let mut close_input = use_signal(String::new);
    let mut hint = use_signal(|| false);

    let submit = move |_| {
        let parsed = (
            parse_price(&open_input()),
            parse_price(&high_input()),
            parse_price(&low_input()),
            parse_price(&close_input()),
        );
        if let (Some(open), Some(high), Some(low), Some(close)) = parsed {
            hint.set(false);
            onsubmit.call(QueryRequest::Pattern {
                open,
                high,
                low,
                close,
                top_k: PATTERN_TOP_K,
            });
        } else {
            hint.set(true);
        }
    };

    rsx! {
        div {
            style: "display: flex; gap: 12px; flex-wrap: wrap; align-items: flex-end; margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Open: "
                input {
                    r#type: "number",
                    step: "any",
                    placeholder: "100.0",
                    style: "width: 90px;",
                    value: "{open_input}",
                    onchange: move |evt: Event<FormData>| open_input.set(evt.value()),
                }
            }
            label {
                style: "font-weight: bold;",
                "High: "
                input {
                    r#type: "number",
                    step: "any",
                    placeholder: "102.5",
                    style: "width: 90px;",
                    value: "{high_input}",
                    onchange: move |evt: Event<FormData>| high_input.set(evt.value()),
                }
            }
            label {
                style: "font-weight: bold;",
                "Low: "
                input {
                    r#type: "number",
                    step: "any",
                    placeholder: "99.0",
                    style: "width: 90px;",
                    value: "{low_input}",
                    onchange: move |evt: Event<FormData>| low_input.set(evt.value()),
                }
            }
            label {
                style: "font-weight: bold;",
                "Close: "
                input {
                    r#type: "number",
                    step: "any",
                    placeholder: "101.2",
                    style: "width: 90px;",
                    value: "{close_input}",
                    onchange: move |evt: Event<FormData>| close_input.set(evt.value()),
                }
            }
            button {
                style: "padding: 6px 16px;",
                onclick: submit,
                "Find Similar Patterns"
            }
        }
        if hint() {
            p {
                style: "margin: 4px 0; font-size: 12px; color: #C62828;",
                "Enter all four prices as numbers."
            }
        }
    }
}
