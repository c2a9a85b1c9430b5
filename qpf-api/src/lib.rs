//! API contract types and fetch client for the pattern search service.
//!
//! The search service exposes three GET operations, each returning either a
//! JSON array of ranked historical matches or a JSON error object with a
//! single `detail` field, plus a read-only list of available dates. This
//! crate owns the typed model of that contract ([`models`]), the URL
//! construction and dispatch for each operation ([`client`]), and the
//! transport error type ([`error`]).
//!
//! Responses are decoded leniently: missing or malformed fields inside an
//! otherwise well-formed record become `None` rather than failing the whole
//! payload, so the rendering layer can degrade to placeholder values.

pub mod client;
pub mod error;
mod fetch;
pub mod models;

pub use error::FetchError;
pub use models::{ApiPayload, ErrorResponse, QueryResult, Score};
