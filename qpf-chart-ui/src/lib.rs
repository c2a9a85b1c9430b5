//! Shared Dioxus components and D3.js bridge for the pattern dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js grouped bar chart via
//!   `js_sys::eval()`, plus [`js_bridge::ChartHandle`], the owned handle to
//!   the single live chart instance
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (query forms, result cards, etc.)
//!
//! The host page is expected to load D3.js itself; the bridge polls for the
//! `d3` global before rendering.

pub mod components;
pub mod js_bridge;
pub mod state;
