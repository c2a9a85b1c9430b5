//! Query dispatch for the three search operations and the date list.
//!
//! Each operation is a GET with query parameters against a fixed path. The
//! body is decoded as [`ApiPayload`] no matter what the HTTP status was:
//! the service reports failures as `{"detail": ...}` JSON with a non-2xx
//! status, and that detail text is exactly what the UI should show. Only an
//! undecodable body surfaces the bare status as a transport error.

use crate::error::{FetchError, Result};
use crate::fetch;
use crate::models::ApiPayload;

/// One user-initiated search, as submitted by a query form.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryRequest {
    /// Find rows similar to a new OHLC tuple
    Pattern {
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        top_k: usize,
    },
    /// Find rows similar to an existing date in the dataset
    Date { target_date: String, top_k: usize },
    /// Rank rows by quantum feature variance
    Volatility { top_k: usize },
}

/// Build the request URL for a query against `base` (e.g. `"/api"`).
pub fn request_url(base: &str, request: &QueryRequest) -> String {
    match request {
        QueryRequest::Pattern {
            open,
            high,
            low,
            close,
            top_k,
        } => format!(
            "{base}/search/pattern?open_price={open}&high_price={high}&low_price={low}&close_price={close}&top_k={top_k}"
        ),
        QueryRequest::Date { target_date, top_k } => {
            format!("{base}/search/date?target_date={target_date}&top_k={top_k}")
        }
        QueryRequest::Volatility { top_k } => {
            format!("{base}/search/volatility?top_k={top_k}")
        }
    }
}

/// Execute a search and decode the response payload.
pub async fn execute(base: &str, request: &QueryRequest) -> Result<ApiPayload> {
    let url = request_url(base, request);
    log::info!("query: GET {url}");

    let body = fetch::fetch_text(&url).await?;
    match serde_json::from_str::<ApiPayload>(&body.text) {
        Ok(payload) => Ok(payload),
        Err(e) if body.status >= 400 => {
            log::error!("query: HTTP {} with undecodable body: {e}", body.status);
            Err(FetchError::Http {
                status: body.status,
                status_text: body.status_text,
            })
        }
        Err(e) => Err(FetchError::Decode(e.to_string())),
    }
}

/// Fetch the list of available dates for the date-search dropdown.
///
/// Consumed once at startup; a failure here degrades the date selector only
/// and is non-fatal to the rest of the page.
pub async fn available_dates(base: &str) -> Result<Vec<String>> {
    let url = format!("{base}/dates");
    log::info!("query: GET {url}");

    let body = fetch::fetch_text(&url).await?;
    if body.status >= 400 {
        return Err(FetchError::Http {
            status: body.status,
            status_text: body.status_text,
        });
    }
    let dates: Vec<String> =
        serde_json::from_str(&body.text).map_err(|e| FetchError::Decode(e.to_string()))?;
    log::info!("query: {} available dates", dates.len());
    Ok(dates)
}
