//! Modal detail view for a single bar group, with quick actions.

use dioxus::prelude::*;

use crate::charts::BarGroup;

#[component]
pub fn DetailModal(
    record: Option<BarGroup>,
    on_close: EventHandler<()>,
    on_generate_report: EventHandler<String>,
    on_schedule_meeting: EventHandler<String>,
) -> Element {
    let Some(group) = record else {
        return rsx! {};
    };

    let progress = group.percentage.clamp(0.0, 100.0);
    let report_name = group.name.clone();
    let meeting_name = group.name.clone();

    rsx! {
        div {
            class: "popup-overlay",
            onclick: move |_| on_close.call(()),
        }
        div { class: "detailed-popup",
            div { class: "detailed-popup__header",
                h3 { "{group.name}" }
                button {
                    r#type: "button",
                    class: "detailed-popup__close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div { class: "detailed-popup__body",
                div { class: "detailed-popup__row",
                    span { class: "detailed-popup__label", "Target:" }
                    span { class: "detailed-popup__value", "{group.target_display}" }
                }
                div { class: "detailed-popup__row",
                    span { class: "detailed-popup__label", "Achieved:" }
                    span { class: "detailed-popup__value detailed-popup__value--achieved",
                        "{group.achieved_display}"
                    }
                }
                div { class: "detailed-popup__row",
                    span { class: "detailed-popup__label", "Achievement:" }
                    span { class: "detailed-popup__value {group.bucket.css_class()}",
                        "{group.percentage_label}"
                    }
                }
                div { class: "detailed-popup__progress",
                    div {
                        class: "detailed-popup__progress-fill",
                        style: "width: {progress}%; background: {group.color};",
                    }
                }
            }
            div { class: "detailed-popup__actions",
                button {
                    r#type: "button",
                    class: "detailed-popup__action detailed-popup__action--report",
                    onclick: move |_| on_generate_report.call(report_name.clone()),
                    "Generate Report"
                }
                button {
                    r#type: "button",
                    class: "detailed-popup__action detailed-popup__action--meeting",
                    onclick: move |_| on_schedule_meeting.call(meeting_name.clone()),
                    "Schedule Meeting"
                }
                button {
                    r#type: "button",
                    class: "detailed-popup__action",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
