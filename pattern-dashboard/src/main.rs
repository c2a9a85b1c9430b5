//! Quantum Stock Pattern Finder dashboard
//!
//! Browser front end for the quantum pattern search service: submits one of
//! three queries (an OHLC price tuple, a dataset date, or a volatility rank
//! count) and renders the ranked response as result cards plus a grouped
//! OHLC bar chart.
//!
//! Data flow:
//! 1. On mount: initialize the D3 chart scripts and fetch the available
//!    dates for the date-search dropdown (failure degrades that control
//!    only).
//! 2. On form submission: spawn one fetch task; the loading indicator is
//!    shown for its duration and hidden unconditionally afterward. Transport
//!    failures are folded into an error-shaped payload so every outcome
//!    renders through the same pipeline.
//! 3. On payload change: plan the render (`qpf_render::plan_render`), let
//!    Dioxus diff the card area, and rebuild the chart imperatively -- the
//!    previous chart handle is always dropped first, so at most one chart
//!    instance is ever live.

use dioxus::prelude::*;
use qpf_api::client::{self, QueryRequest};
use qpf_api::models::{ApiPayload, ErrorResponse};
use qpf_chart_ui::components::{
    ChartContainer, DateForm, ErrorDisplay, LoadingSpinner, NoResults, PatternForm, ResultCard,
    TabBar, VolatilityForm,
};
use qpf_chart_ui::js_bridge::{self, ChartHandle};
use qpf_chart_ui::state::{AppState, QueryTab};
use qpf_render::{plan_render, RenderPlan};

/// Base path of the search API (served from the same host as the page).
const API_BASE: &str = "/api";

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "ohlc-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("pattern-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: one-time startup (chart scripts and the date list) ───
    use_effect(move || {
        js_bridge::init_charts();

        spawn(async move {
            match client::available_dates(API_BASE).await {
                Ok(dates) => {
                    if let Some(first) = dates.first() {
                        state.selected_date.set(first.clone());
                    }
                    state.available_dates.set(dates);
                }
                Err(e) => {
                    log::error!("failed to load available dates: {e}");
                    state.dates_failed.set(true);
                }
            }
        });
    });

    // ─── Effect 2: chart lifecycle, re-runs on every payload change ───
    use_effect(move || {
        let payload = state.payload.read().clone();

        // Dropping the previous handle clears the container before anything
        // new is drawn, whatever state the last cycle ended in.
        state.chart.set(None);

        let Some(payload) = payload else { return };
        if let RenderPlan::Results {
            chart: Some(series),
            ..
        } = plan_render(&payload)
        {
            let data_json = series.datasets_json().to_string();
            let config_json = serde_json::json!({
                "title": "Matched pattern prices",
                "yAxisLabel": "Price",
            })
            .to_string();
            state.chart.set(Some(ChartHandle::render(
                CHART_CONTAINER_ID,
                &data_json,
                &config_json,
            )));
        }
    });

    // One fetch task per submission, no cancellation: if the user submits
    // again before the first resolves, whichever resolves last wins the
    // payload signal.
    let run_query = move |request: QueryRequest| {
        spawn(async move {
            state.loading.set(true);
            let payload = match client::execute(API_BASE, &request).await {
                Ok(payload) => payload,
                Err(e) => {
                    log::error!("query failed: {e}");
                    ApiPayload::Error(ErrorResponse {
                        detail: e.to_string(),
                    })
                }
            };
            state.payload.set(Some(payload));
            // Hidden unconditionally, success or failure.
            state.loading.set(false);
        });
    };

    let active_tab = (state.active_tab)();
    let plan = state.payload.read().as_ref().map(plan_render);

    let form = match active_tab {
        QueryTab::Pattern => rsx! { PatternForm { onsubmit: run_query } },
        QueryTab::Date => rsx! { DateForm { onsubmit: run_query } },
        QueryTab::Volatility => rsx! { VolatilityForm { onsubmit: run_query } },
    };

    let results = match &plan {
        None => rsx! {},
        Some(RenderPlan::Error(detail)) => rsx! {
            ErrorDisplay { message: detail.clone() }
        },
        Some(RenderPlan::Empty) => rsx! {
            NoResults {}
        },
        Some(RenderPlan::Results { cards, chart }) => rsx! {
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 12px; margin: 12px 0;",
                for card in cards.iter() {
                    ResultCard { card: card.clone() }
                }
            }
            if chart.is_some() {
                ChartContainer { id: CHART_CONTAINER_ID.to_string() }
            }
        },
    };

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 8px 0 4px 0;",
                "Quantum Stock Pattern Finder"
            }
            p {
                style: "margin: 0 0 8px 0; font-size: 13px; color: #666;",
                "Find historical trading days whose quantum feature encoding matches your query."
            }

            TabBar {}

            div {
                style: "border: 1px solid #ccc; border-top: none; border-radius: 0 0 4px 4px; padding: 8px 12px; background: #fff;",
                {form}
            }

            if (state.loading)() {
                LoadingSpinner {}
            }

            {results}
        }
    }
}
