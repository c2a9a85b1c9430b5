//! Placeholder for an empty or non-sequence result payload.

use dioxus::prelude::*;

/// "No results" placeholder.
#[component]
pub fn NoResults() -> Element {
    rsx! {
        div {
            style: "padding: 24px; margin: 8px 0; text-align: center; color: #666; background: #fafafa; border: 1px dashed #ccc; border-radius: 4px;",
            "No results found."
        }
    }
}
