//! Hover tooltip for chart bars, positioned near the pointer.

use dioxus::prelude::*;

use crate::charts::BarGroup;
use crate::core::record::Bucket;

/// Horizontal offset from the pointer.
const OFFSET_X: f64 = 15.0;
/// The tooltip sits above the pointer by this much.
const OFFSET_Y: f64 = 80.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipData {
    pub name: String,
    /// Which bar is hovered: "Target" or "Achieved".
    pub series: &'static str,
    pub value_display: String,
    pub percentage_label: String,
    pub bucket: Bucket,
    pub color: String,
    pub x: f64,
    pub y: f64,
}

impl TooltipData {
    pub fn target_bar(group: &BarGroup, x: f64, y: f64) -> Self {
        Self::for_series(group, "Target", group.target_display.clone(), x, y)
    }

    pub fn achieved_bar(group: &BarGroup, x: f64, y: f64) -> Self {
        Self::for_series(group, "Achieved", group.achieved_display.clone(), x, y)
    }

    fn for_series(group: &BarGroup, series: &'static str, value_display: String, x: f64, y: f64) -> Self {
        Self {
            name: group.name.clone(),
            series,
            value_display,
            percentage_label: group.percentage_label.clone(),
            bucket: group.bucket,
            color: group.color.clone(),
            x,
            y,
        }
    }

    fn tone_class(&self) -> &'static str {
        match self.bucket {
            Bucket::High => "success",
            Bucket::Medium => "warning",
            Bucket::Low => "danger",
        }
    }
}

#[component]
pub fn ChartTooltip(tooltip: Option<TooltipData>) -> Element {
    let Some(data) = tooltip else {
        return rsx! {};
    };

    let tone = data.tone_class();
    let left = data.x + OFFSET_X;
    let top = (data.y - OFFSET_Y).max(8.0);

    rsx! {
        div {
            class: "enhanced-tooltip enhanced-tooltip--{tone}",
            style: "left: {left}px; top: {top}px;",
            div { class: "enhanced-tooltip__header",
                span { class: "enhanced-tooltip__name", "{data.name}" }
                span {
                    class: "enhanced-tooltip__series",
                    style: "background: {data.color};",
                    "{data.series}"
                }
            }
            div { class: "enhanced-tooltip__body",
                div { class: "enhanced-tooltip__row",
                    span { "Value:" }
                    span { class: "enhanced-tooltip__value", "{data.value_display}" }
                }
                div { class: "enhanced-tooltip__row",
                    span { "Achievement:" }
                    span {
                        class: "enhanced-tooltip__value",
                        style: "color: {data.color};",
                        "{data.percentage_label}"
                    }
                }
            }
            div { class: "enhanced-tooltip__footer",
                "Click for details • Double-click for quick actions"
            }
        }
    }
}
