//! Tab bar switching between the three query operations.

use crate::state::{AppState, QueryTab};
use dioxus::prelude::*;

const TAB_STYLE: &str = "padding: 8px 16px; border: 1px solid #ccc; border-bottom: none; \
     border-radius: 4px 4px 0 0; background: #f5f5f5; color: #444; cursor: pointer;";
const ACTIVE_TAB_STYLE: &str = "padding: 8px 16px; border: 1px solid #ccc; border-bottom: none; \
     border-radius: 4px 4px 0 0; background: #fff; color: #1565C0; font-weight: bold; cursor: pointer;";

/// Query operation tabs.
///
/// Switching tabs clears the current payload, which empties the results
/// area and disposes any live chart regardless of the prior render outcome.
#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        div {
            style: "display: flex; gap: 4px; border-bottom: 1px solid #ccc; margin-top: 12px;",
            for tab in [QueryTab::Pattern, QueryTab::Date, QueryTab::Volatility] {
                button {
                    style: if tab == active { ACTIVE_TAB_STYLE } else { TAB_STYLE },
                    onclick: move |_| {
                        state.active_tab.set(tab);
                        state.payload.set(None);
                    },
                    "{tab.label()}"
                }
            }
        }
    }
}
