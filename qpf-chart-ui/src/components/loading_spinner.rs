//! Loading indicator component.

use dioxus::prelude::*;

/// Shown while a query fetch is in flight; hidden unconditionally after.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 24px; color: #666;",
            "Searching..."
        }
    }
}
