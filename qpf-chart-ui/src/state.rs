//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use crate::js_bridge::ChartHandle;
use dioxus::prelude::*;
use qpf_api::models::ApiPayload;

/// The three query operations offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryTab {
    /// Search by a new OHLC price tuple
    #[default]
    Pattern,
    /// Search by an existing dataset date
    Date,
    /// Rank by quantum feature variance
    Volatility,
}

impl QueryTab {
    pub fn label(&self) -> &'static str {
        match self {
            QueryTab::Pattern => "Pattern Search",
            QueryTab::Date => "Date Search",
            QueryTab::Volatility => "High Volatility",
        }
    }
}

/// Shared application state for the pattern dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Which query form is active
    pub active_tab: Signal<QueryTab>,
    /// Whether a query fetch is in flight
    pub loading: Signal<bool>,
    /// Last decoded response payload (None until the first query, and
    /// cleared on tab switches)
    pub payload: Signal<Option<ApiPayload>>,
    /// Available dates for the date-search dropdown
    pub available_dates: Signal<Vec<String>>,
    /// Whether the date list failed to load (degrades the selector only)
    pub dates_failed: Signal<bool>,
    /// Currently selected date for the date search
    pub selected_date: Signal<String>,
    /// Result count for the volatility search
    pub top_k: Signal<usize>,
    /// The one live chart instance; replacing the value disposes the
    /// predecessor via Drop
    pub chart: Signal<Option<ChartHandle>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            active_tab: Signal::new(QueryTab::default()),
            loading: Signal::new(false),
            payload: Signal::new(None),
            available_dates: Signal::new(Vec::new()),
            dates_failed: Signal::new(false),
            selected_date: Signal::new(String::new()),
            top_k: Signal::new(10),
            chart: Signal::new(None),
        }
    }
}
