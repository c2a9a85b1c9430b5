//! Payload planning: one decoded API payload in, one render plan out.

use crate::format::{format_price, format_score, format_volume, UNKNOWN};
use crate::models::{CardView, ChartSeries, RenderPlan};
use qpf_api::models::{ApiPayload, QueryResult, Score};

/// Plan one render cycle for `payload`.
///
/// Branch order matches the response contract: the error indicator takes
/// precedence over the sequence-shape check, a non-sequence or empty payload
/// yields the no-results state, and only then are cards derived. The chart
/// series accumulates, in input order, the entries whose raw `Open` field
/// was present; it ends up `None` when no entry qualified.
///
/// This function is pure and total: it never fails, and planning the same
/// payload twice yields the same plan.
pub fn plan_render(payload: &ApiPayload) -> RenderPlan {
    let rows = match payload {
        ApiPayload::Error(err) => return RenderPlan::Error(err.detail.clone()),
        ApiPayload::Other(_) => return RenderPlan::Empty,
        ApiPayload::Results(rows) if rows.is_empty() => return RenderPlan::Empty,
        ApiPayload::Results(rows) => rows,
    };

    let mut cards = Vec::with_capacity(rows.len());
    let mut series = ChartSeries::default();

    for row in rows {
        let card = card_view(row);
        // Chart inclusion keys on the raw field being present, not on the
        // defaulted display value: a volatility-only row renders a card with
        // 0.00 prices but contributes no bar group.
        if row.open.is_some() {
            series.push(
                format!("Rank {} ({})", card.rank, card.date),
                row.open.unwrap_or(0.0),
                row.high.unwrap_or(0.0),
                row.low.unwrap_or(0.0),
                row.close.unwrap_or(0.0),
            );
        }
        cards.push(card);
    }

    log::info!(
        "plan: {} cards, {} chart groups",
        cards.len(),
        series.len()
    );

    RenderPlan::Results {
        cards,
        chart: (!series.is_empty()).then_some(series),
    }
}

/// Resolve one result record to display strings.
fn card_view(row: &QueryResult) -> CardView {
    let (score_label, score_value) = match row.score() {
        Score::Similarity(s) => ("Similarity", format_score(s)),
        Score::Variance(v) => ("Variance", format_score(v)),
        Score::Unknown => ("Score", UNKNOWN.to_string()),
    };

    CardView {
        rank: row
            .rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        date: row
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        open: format_price(row.open.unwrap_or(0.0)),
        high: format_price(row.high.unwrap_or(0.0)),
        low: format_price(row.low.unwrap_or(0.0)),
        close: format_price(row.close.unwrap_or(0.0)),
        volume: row
            .volume
            .map(format_volume)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        score_label: score_label.to_string(),
        score_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qpf_api::models::ErrorResponse;

    fn results(json: &str) -> ApiPayload {
        serde_json::from_str(json).expect("payload should decode")
    }

    fn full_row(rank: u32, date: &str, open: f64, similarity: f64) -> String {
        format!(
            r#"{{"Rank": {rank}, "Date": "{date}", "Open": {open}, "High": {h}, "Low": {l}, "Close": {c}, "Volume": 1200000, "Similarity": {similarity}}}"#,
            h = open + 1.5,
            l = open - 1.0,
            c = open + 0.5,
        )
    }

    #[test]
    fn n_results_yield_n_cards_in_input_order() {
        let payload = results(&format!(
            "[{},{},{}]",
            full_row(1, "2023-05-02", 101.0, 0.9987),
            full_row(2, "2021-11-15", 98.0, 0.9912),
            full_row(3, "2019-02-08", 87.5, 0.9871),
        ));
        let RenderPlan::Results { cards, chart } = plan_render(&payload) else {
            panic!("expected Results plan");
        };
        assert_eq!(cards.len(), 3);
        assert_eq!(
            cards.iter().map(|c| c.rank.as_str()).collect::<Vec<_>>(),
            ["1", "2", "3"]
        );
        assert_eq!(cards[0].date, "2023-05-02");
        assert_eq!(cards[0].open, "101.00");
        assert_eq!(cards[0].volume, "1,200,000");
        assert_eq!(cards[0].score_label, "Similarity");
        assert_eq!(cards[0].score_value, "0.9987");

        let chart = chart.expect("all rows carry prices");
        assert_eq!(chart.len(), 3);
        assert_eq!(chart.labels[1], "Rank 2 (2021-11-15)");
        assert_eq!(chart.open, [101.0, 98.0, 87.5]);
    }

    #[test]
    fn error_payload_plans_the_error_element_only() {
        let payload = ApiPayload::Error(ErrorResponse {
            detail: "Date 2099-01-01 not found in dataset.".to_string(),
        });
        assert_eq!(
            plan_render(&payload),
            RenderPlan::Error("Date 2099-01-01 not found in dataset.".to_string())
        );
    }

    #[test]
    fn empty_sequence_plans_the_placeholder() {
        assert_eq!(plan_render(&results("[]")), RenderPlan::Empty);
    }

    #[test]
    fn non_sequence_payload_plans_the_placeholder() {
        assert_eq!(plan_render(&results(r#"{"rows": 3}"#)), RenderPlan::Empty);
    }

    #[test]
    fn chart_inclusion_follows_open_presence_in_relative_order() {
        let payload = results(&format!(
            "[{},{},{}]",
            full_row(1, "2023-05-02", 101.0, 0.9987),
            r#"{"Rank": 2, "Date": "2020-03-09", "Variance": 0.41}"#,
            full_row(3, "2019-02-08", 87.5, 0.9871),
        ));
        let RenderPlan::Results { cards, chart } = plan_render(&payload) else {
            panic!("expected Results plan");
        };
        assert_eq!(cards.len(), 3);
        let chart = chart.expect("two rows carry prices");
        assert_eq!(chart.len(), 2);
        assert_eq!(chart.labels[0], "Rank 1 (2023-05-02)");
        assert_eq!(chart.labels[1], "Rank 3 (2019-02-08)");
    }

    #[test]
    fn pure_volatility_results_plan_no_chart() {
        let payload = results(
            r#"[{"Rank": 1, "Date": "2020-03-09", "Variance": 0.41},
                {"Rank": 2, "Date": "2020-03-16", "Variance": 0.39}]"#,
        );
        let RenderPlan::Results { cards, chart } = plan_render(&payload) else {
            panic!("expected Results plan");
        };
        assert_eq!(cards.len(), 2);
        assert!(chart.is_none());
        // Price metrics default to 0.00 on the cards.
        assert_eq!(cards[0].open, "0.00");
        assert_eq!(cards[0].close, "0.00");
        assert_eq!(cards[0].score_label, "Variance");
        assert_eq!(cards[0].score_value, "0.4100");
    }

    #[test]
    fn zero_similarity_is_not_treated_as_absent() {
        let payload = results(r#"[{"Rank": 1, "Similarity": 0.0}]"#);
        let RenderPlan::Results { cards, .. } = plan_render(&payload) else {
            panic!("expected Results plan");
        };
        assert_eq!(cards[0].score_label, "Similarity");
        assert_eq!(cards[0].score_value, "0.0000");
    }

    #[test]
    fn missing_fields_degrade_to_sentinels() {
        let payload = results("[{}]");
        let RenderPlan::Results { cards, chart } = plan_render(&payload) else {
            panic!("expected Results plan");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].rank, UNKNOWN);
        assert_eq!(cards[0].date, UNKNOWN);
        assert_eq!(cards[0].volume, UNKNOWN);
        assert_eq!(cards[0].score_label, "Score");
        assert_eq!(cards[0].score_value, UNKNOWN);
        assert_eq!(cards[0].open, "0.00");
        assert!(chart.is_none());
    }

    #[test]
    fn sentinel_rank_and_date_flow_into_chart_labels() {
        let payload = results(r#"[{"Open": 10.0, "High": 11.0, "Low": 9.0, "Close": 10.5}]"#);
        let RenderPlan::Results { chart, .. } = plan_render(&payload) else {
            panic!("expected Results plan");
        };
        let chart = chart.expect("row carries prices");
        assert_eq!(chart.labels[0], "Rank unknown (unknown)");
    }

    #[test]
    fn partial_prices_default_to_zero_in_the_chart() {
        // Open present alone still forms a bar group; the missing metrics
        // take the last-resort zero default.
        let payload = results(r#"[{"Rank": 1, "Open": 10.0}]"#);
        let RenderPlan::Results { chart, .. } = plan_render(&payload) else {
            panic!("expected Results plan");
        };
        let chart = chart.expect("open was present");
        assert_eq!(chart.open, [10.0]);
        assert_eq!(chart.high, [0.0]);
        assert_eq!(chart.close, [0.0]);
    }

    #[test]
    fn planning_is_deterministic() {
        let payload = results(&format!("[{}]", full_row(1, "2023-05-02", 101.0, 0.9987)));
        assert_eq!(plan_render(&payload), plan_render(&payload));
    }
}
