//! One result card: date heading, rank badge, price metrics, score line.

use dioxus::prelude::*;
use qpf_render::CardView;

#[derive(Props, Clone, PartialEq)]
pub struct ResultCardProps {
    /// Fully resolved display values for one ranked match
    pub card: CardView,
}

/// A single ranked-match card.
///
/// All fields arrive pre-resolved: sentinel markers and defaults have
/// already been substituted by the planning layer, so this component only
/// lays them out.
#[component]
pub fn ResultCard(props: ResultCardProps) -> Element {
    let card = &props.card;

    rsx! {
        div {
            style: "border: 1px solid #e0e0e0; border-radius: 6px; padding: 12px 16px; background: #fff;",
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 8px;",
                h3 {
                    style: "margin: 0; font-size: 15px;",
                    "{card.date}"
                }
                span {
                    style: "background: #E3F2FD; color: #1565C0; border-radius: 10px; padding: 2px 10px; font-size: 12px; font-weight: bold;",
                    "Rank {card.rank}"
                }
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 4px 16px; font-size: 13px;",
                Metric { name: "Open", value: card.open.clone() }
                Metric { name: "High", value: card.high.clone() }
                Metric { name: "Low", value: card.low.clone() }
                Metric { name: "Close", value: card.close.clone() }
                Metric { name: "Volume", value: card.volume.clone() }
            }
            p {
                style: "margin: 8px 0 0 0; font-size: 13px; color: #333;",
                strong { "{card.score_label}: " }
                "{card.score_value}"
            }
        }
    }
}

#[component]
fn Metric(name: &'static str, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between;",
            span { style: "color: #666;", "{name}" }
            span { "{value}" }
        }
    }
}
