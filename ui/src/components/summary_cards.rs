//! Totals strip and the three summary cards under the chart.

use dioxus::prelude::*;

use crate::charts::ChartTotals;
use crate::core::format;
use crate::dashboard::SummaryCards;

#[component]
pub fn ChartStats(totals: ChartTotals) -> Element {
    let target = format::format_inr(totals.target);
    let achieved = format::format_inr(totals.achieved);
    let overall = format::format_percent(totals.percentage);
    let tone = totals.tone_class();

    rsx! {
        div { class: "chart-stats",
            div { class: "chart-stat",
                span { class: "stat-label", "Total Target" }
                span { class: "stat-value", "{target}" }
            }
            div { class: "chart-stat",
                span { class: "stat-label", "Total Achieved" }
                span { class: "stat-value", "{achieved}" }
            }
            div { class: "chart-stat",
                span { class: "stat-label", "Overall" }
                span { class: "stat-value {tone}", "{overall}" }
            }
        }
    }
}

#[component]
pub fn SummaryDeck(summary: SummaryCards) -> Element {
    rsx! {
        div { class: "summary-cards",
            div { class: "summary-card summary-card--top",
                span { class: "summary-card__label", "Top Performer" }
                span { class: "summary-card__value", "{summary.top_performer}" }
            }
            div { class: "summary-card summary-card--attention",
                span { class: "summary-card__label", "Needs Attention" }
                span { class: "summary-card__value", "{summary.needs_attention}" }
            }
            div { class: "summary-card summary-card--trend",
                span { class: "summary-card__label", "Trend" }
                span { class: "summary-card__value", "{summary.trend}" }
            }
        }
    }
}
