//! Typed model of the search service's response payloads.
//!
//! Every field of a result record is optional on the wire: pattern and date
//! searches return full OHLC rows with a `Similarity` score, while the
//! volatility search returns rows scored by `Variance`. Optionality is
//! modeled with real `Option`s so that a numeric zero is always distinct
//! from an absent field.
//!
//! Deserialization is lenient by design: a price that arrives as a numeric
//! string is parsed, a present-but-garbled value resolves to `0.0`, and an
//! unparsable date becomes `None`. None of these degrade cases fail the
//! payload as a whole.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One ranked historical match returned by the search API.
///
/// Unknown fields (the upstream rows carry extra engineered feature columns)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResult {
    /// 1-based position within the ranked response
    #[serde(rename = "Rank", default)]
    pub rank: Option<u32>,

    /// Trading date of the matched row
    #[serde(rename = "Date", default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "Open", default, deserialize_with = "lenient_number")]
    pub open: Option<f64>,

    #[serde(rename = "High", default, deserialize_with = "lenient_number")]
    pub high: Option<f64>,

    #[serde(rename = "Low", default, deserialize_with = "lenient_number")]
    pub low: Option<f64>,

    #[serde(rename = "Close", default, deserialize_with = "lenient_number")]
    pub close: Option<f64>,

    #[serde(rename = "Volume", default, deserialize_with = "lenient_number")]
    pub volume: Option<f64>,

    /// Cosine similarity against the query pattern (pattern/date searches)
    #[serde(rename = "Similarity", default)]
    pub similarity: Option<f64>,

    /// Quantum feature variance (volatility search)
    #[serde(rename = "Variance", default)]
    pub variance: Option<f64>,
}

impl QueryResult {
    /// Which score this record carries.
    ///
    /// Presence is decided by the `Option`, never by the value, so a true
    /// zero similarity is still reported as `Score::Similarity(0.0)`.
    /// `Similarity` wins if a malformed record somehow carries both.
    pub fn score(&self) -> Score {
        if let Some(s) = self.similarity {
            Score::Similarity(s)
        } else if let Some(v) = self.variance {
            Score::Variance(v)
        } else {
            Score::Unknown
        }
    }
}

/// The score attached to a result record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    Similarity(f64),
    Variance(f64),
    /// Neither score field was present (display-degraded, not an error)
    Unknown,
}

/// Structured server-side failure: `{"detail": "..."}`.
///
/// FastAPI-style services report errors in this shape even on non-2xx
/// statuses, so the body is decoded before the status code is consulted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// A decoded response body from any of the search operations.
///
/// The variants are mutually exclusive on the wire and are tried in
/// declaration order: an object with a `detail` field is an error no matter
/// what else it contains, a JSON array is a result set, and anything else
/// falls through to [`ApiPayload::Other`], which renders as the no-results
/// state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ApiPayload {
    Error(ErrorResponse),
    Results(Vec<QueryResult>),
    Other(Value),
}

/// Accept a JSON number or a numeric string; `null` and absence are `None`.
///
/// A value that is present but unparsable resolves to `Some(0.0)`: price
/// fields are optional for volatility-only result shapes, and a last-resort
/// zero keeps the record renderable while preserving the fact that the
/// field WAS present (chart inclusion keys on presence of `Open`).
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(n.as_f64().unwrap_or(0.0)),
        Some(Value::String(s)) => Some(s.trim().parse::<f64>().unwrap_or(0.0)),
        Some(_) => Some(0.0),
    })
}

/// Accept an ISO `YYYY-MM-DD` date string; anything else becomes `None`.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> ApiPayload {
        serde_json::from_str(json).expect("payload should decode")
    }

    #[test]
    fn result_array_decodes_in_order() {
        let payload = decode(
            r#"[
                {"Rank": 1, "Date": "2023-05-02", "Open": 101.5, "High": 103.0,
                 "Low": 100.1, "Close": 102.2, "Volume": 1200000, "Similarity": 0.9987},
                {"Rank": 2, "Date": "2021-11-15", "Open": 98.0, "High": 99.5,
                 "Low": 97.2, "Close": 99.0, "Volume": 800000, "Similarity": 0.9912}
            ]"#,
        );
        match payload {
            ApiPayload::Results(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].rank, Some(1));
                assert_eq!(rows[1].rank, Some(2));
                assert_eq!(
                    rows[0].date,
                    NaiveDate::from_ymd_opt(2023, 5, 2)
                );
                assert_eq!(rows[0].open, Some(101.5));
            }
            other => panic!("expected Results, got {:?}", other),
        }
    }

    #[test]
    fn detail_object_decodes_as_error_before_sequence_access() {
        let payload = decode(r#"{"detail": "Date 2099-01-01 not found in dataset."}"#);
        assert_eq!(
            payload,
            ApiPayload::Error(ErrorResponse {
                detail: "Date 2099-01-01 not found in dataset.".to_string()
            })
        );
    }

    #[test]
    fn detail_wins_over_extra_fields() {
        // An error object with extra keys is still an error, not Other.
        let payload = decode(r#"{"detail": "boom", "status": 500}"#);
        assert!(matches!(payload, ApiPayload::Error(e) if e.detail == "boom"));
    }

    #[test]
    fn non_sequence_payload_falls_through_to_other() {
        assert!(matches!(decode(r#"{"rows": 3}"#), ApiPayload::Other(_)));
        assert!(matches!(decode("42"), ApiPayload::Other(_)));
        // An array of non-records is not a result set either.
        assert!(matches!(
            decode(r#"["2023-05-02", "2023-05-03"]"#),
            ApiPayload::Other(_)
        ));
    }

    #[test]
    fn numeric_strings_parse_as_prices() {
        let payload = decode(r#"[{"Open": "101.25", "High": "103", "Low": "99.5", "Close": "102"}]"#);
        let ApiPayload::Results(rows) = payload else {
            panic!("expected Results");
        };
        assert_eq!(rows[0].open, Some(101.25));
        assert_eq!(rows[0].high, Some(103.0));
    }

    #[test]
    fn absent_null_and_garbled_prices_are_distinct() {
        let payload = decode(
            r#"[{"Rank": 3, "Open": "not a number", "High": null, "Variance": 0.31}]"#,
        );
        let ApiPayload::Results(rows) = payload else {
            panic!("expected Results");
        };
        // Present but unparsable: defaults to 0.0, still counts as present.
        assert_eq!(rows[0].open, Some(0.0));
        // Explicit null and plain absence are both None.
        assert_eq!(rows[0].high, None);
        assert_eq!(rows[0].low, None);
    }

    #[test]
    fn unparsable_date_degrades_to_none() {
        let payload = decode(r#"[{"Rank": 1, "Date": "02/05/2023"}]"#);
        let ApiPayload::Results(rows) = payload else {
            panic!("expected Results");
        };
        assert_eq!(rows[0].date, None);
    }

    #[test]
    fn zero_similarity_is_a_real_score() {
        let payload = decode(r#"[{"Similarity": 0.0}]"#);
        let ApiPayload::Results(rows) = payload else {
            panic!("expected Results");
        };
        assert_eq!(rows[0].score(), Score::Similarity(0.0));
    }

    #[test]
    fn variance_used_when_similarity_absent() {
        let payload = decode(r#"[{"Variance": 0.42}]"#);
        let ApiPayload::Results(rows) = payload else {
            panic!("expected Results");
        };
        assert_eq!(rows[0].score(), Score::Variance(0.42));
    }

    #[test]
    fn score_unknown_when_both_fields_absent() {
        let payload = decode(r#"[{"Rank": 1}]"#);
        let ApiPayload::Results(rows) = payload else {
            panic!("expected Results");
        };
        assert_eq!(rows[0].score(), Score::Unknown);
    }

    #[test]
    fn extra_feature_columns_are_ignored() {
        let payload = decode(
            r#"[{"Rank": 1, "Open": 10.0, "Returns": 0.01, "Price_Range": 2.0,
                 "Volatility": 1.9, "MA_5": 9.8, "Similarity": 0.5}]"#,
        );
        let ApiPayload::Results(rows) = payload else {
            panic!("expected Results");
        };
        assert_eq!(rows[0].open, Some(10.0));
    }

    #[test]
    fn empty_array_is_an_empty_result_set() {
        assert_eq!(decode("[]"), ApiPayload::Results(Vec::new()));
    }
}
