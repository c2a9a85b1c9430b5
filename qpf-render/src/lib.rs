//! Pure payload-to-render-plan pipeline for the pattern dashboard.
//!
//! [`plan::plan_render`] turns one decoded API payload into a
//! [`models::RenderPlan`]: the error text to show, the no-results state, or
//! a list of [`models::CardView`]s plus an optional [`models::ChartSeries`]
//! for the grouped OHLC bar chart. The transformation is total (malformed
//! or missing fields degrade to placeholder display values, never errors)
//! and pure, so rendering the same payload twice yields the same plan.
//!
//! View structs derive `Serialize` so chart data can be passed to D3.js as
//! JSON from the Dioxus WASM frontend.

pub mod format;
pub mod models;
pub mod plan;

pub use models::{CardView, ChartSeries, RenderPlan};
pub use plan::plan_render;
