//! Record-display surface: renders a `ChartLayout` as bar groups and axis
//! labels, and wires the pointer interactions back to the dashboard.
//!
//! Everything here consumes plain layout data; no transform logic lives in
//! this module.

use dioxus::prelude::*;

use crate::charts::{BarGroup, ViewGeometry};
use crate::dashboard::{Category, ChartViewModel};

use super::tooltip::TooltipData;

#[component]
pub fn ChartPanel(
    view: ChartViewModel,
    highlighted: Option<String>,
    on_hover: EventHandler<Option<TooltipData>>,
    on_select: EventHandler<String>,
    on_highlight: EventHandler<String>,
    on_quick_action: EventHandler<String>,
) -> Element {
    let geometry = view.layout.geometry;
    let mode_class = view.layout.mode.css_class();
    let groups = view.layout.groups.clone();
    let axis_groups = groups.clone();

    rsx! {
        div { class: "chart-area {mode_class}",
            div { class: "chart-main",
                if groups.is_empty() {
                    p { class: "chart-main__placeholder",
                        "No records match the current filter."
                    }
                }
                for group in groups {
                    {
                        let is_highlighted = highlighted.as_deref() == Some(group.name.as_str());
                        render_bar_group(
                            group,
                            view.category,
                            geometry,
                            is_highlighted,
                            on_hover,
                            on_select,
                        )
                    }
                }
            }
            div { class: "x-axis",
                for group in axis_groups {
                    {render_axis_label(group, highlighted.clone(), on_highlight, on_select, on_quick_action)}
                }
            }
        }
    }
}

fn render_bar_group(
    group: BarGroup,
    category: Category,
    geometry: ViewGeometry,
    is_highlighted: bool,
    on_hover: EventHandler<Option<TooltipData>>,
    on_select: EventHandler<String>,
) -> Element {
    let group_class = if is_highlighted {
        "bar-group bar-group--highlighted"
    } else {
        "bar-group"
    };
    let group_style = format!(
        "width: {}px; transition-delay: {}ms;",
        geometry.group_width_px, group.delay_ms
    );
    let direction = if geometry.stacked { "column" } else { "row" };
    let container_style = format!("flex-direction: {direction}; gap: {}px;", geometry.gap_px);
    let target_style = format!(
        "height: {}%; width: {};",
        group.target_height_pct, geometry.bar_width
    );
    let achieved_position = if geometry.stacked {
        "position: absolute; bottom: 0;"
    } else {
        "position: relative;"
    };
    let achieved_style = format!(
        "height: {}%; width: {}; background-color: {}; {achieved_position}",
        group.achieved_height_pct, geometry.bar_width, group.color
    );

    let target_group = group.clone();
    let achieved_group = group.clone();
    let select_target = group.name.clone();
    let select_achieved = group.name.clone();

    rsx! {
        div {
            key: "{group.name}",
            class: "{group_class}",
            style: "{group_style}",
            "data-item": "{group.name}",
            "data-type": "{category.value()}",
            "data-category": "{group.bucket.css_class()}",
            div { class: "bar-container", style: "{container_style}",
                div {
                    class: "bar target",
                    style: "{target_style}",
                    "data-name": "{group.name}",
                    "data-type": "target",
                    "data-value": "{group.target_display}",
                    onmouseenter: move |evt| {
                        let point = evt.client_coordinates();
                        on_hover.call(Some(TooltipData::target_bar(&target_group, point.x, point.y)));
                    },
                    onmouseleave: move |_| on_hover.call(None),
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_select.call(select_target.clone());
                    },
                    div { class: "bar-value", "{group.target_display}" }
                }
                div {
                    class: "bar achieved",
                    style: "{achieved_style}",
                    "data-name": "{group.name}",
                    "data-type": "achieved",
                    "data-value": "{group.achieved_display}",
                    onmouseenter: move |evt| {
                        let point = evt.client_coordinates();
                        on_hover.call(Some(TooltipData::achieved_bar(&achieved_group, point.x, point.y)));
                    },
                    onmouseleave: move |_| on_hover.call(None),
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_select.call(select_achieved.clone());
                    },
                    div { class: "bar-value", "{group.achieved_display}" }
                }
                div { class: "percentage-label {group.bucket.css_class()}",
                    "data-percentage": "{group.percentage}",
                    "{group.percentage_label}"
                }
            }
            div { class: "bar-label", "{group.name}" }
        }
    }
}

fn render_axis_label(
    group: BarGroup,
    highlighted: Option<String>,
    on_highlight: EventHandler<String>,
    on_select: EventHandler<String>,
    on_quick_action: EventHandler<String>,
) -> Element {
    let label_class = if highlighted.as_deref() == Some(group.name.as_str()) {
        "x-label x-label--highlighted"
    } else {
        "x-label"
    };
    let click_name = group.name.clone();
    let dblclick_name = group.name.clone();

    rsx! {
        div {
            key: "{group.name}",
            class: "{label_class}",
            "data-item": "{group.name}",
            "data-category": "{group.bucket.css_class()}",
            onclick: move |_| {
                on_highlight.call(click_name.clone());
                on_select.call(click_name.clone());
            },
            ondoubleclick: move |_| on_quick_action.call(dblclick_name.clone()),
            "{group.name}"
        }
    }
}
