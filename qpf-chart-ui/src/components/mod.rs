//! Reusable Dioxus RSX components for the pattern dashboard.

mod chart_container;
mod date_form;
mod error_display;
mod loading_spinner;
mod no_results;
mod pattern_form;
mod result_card;
mod tab_bar;
mod volatility_form;

pub use chart_container::ChartContainer;
pub use date_form::DateForm;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use no_results::NoResults;
pub use pattern_form::PatternForm;
pub use result_card::ResultCard;
pub use tab_bar::TabBar;
pub use volatility_form::VolatilityForm;
