//! Side panel listing the derived insight rows for the visible chart.

use dioxus::prelude::*;

use crate::charts::InsightRow;

#[component]
pub fn InsightPanel(title: String, rows: Vec<InsightRow>) -> Element {
    rsx! {
        aside { class: "insight-panel",
            h3 { class: "insight-panel__title", "{title}" }
            div { class: "insight-list",
                for row in rows {
                    div { class: "insight-item {row.tone.css_class()}",
                        div { class: "insight-title", "{row.title}" }
                        div { class: "insight-text", "{row.text}" }
                    }
                }
            }
        }
    }
}
