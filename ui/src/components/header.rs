//! Dashboard header: reporting-period selector and the notification badge.

use dioxus::prelude::*;

use crate::core::seed::ReportingPeriod;

#[component]
pub fn DashboardHeader(
    period: ReportingPeriod,
    notifications: u32,
    on_period_change: EventHandler<ReportingPeriod>,
    on_clear_notifications: EventHandler<()>,
) -> Element {
    let badge_class = if notifications > 0 {
        "notification-badge notification-badge--unread"
    } else {
        "notification-badge"
    };

    rsx! {
        header { class: "dashboard-header",
            h1 { class: "dashboard-header__title", "TV Sales Dashboard" }
            div { class: "dashboard-header__controls",
                select {
                    class: "period-select",
                    onchange: move |evt| {
                        on_period_change.call(ReportingPeriod::from_label(&evt.value()));
                    },
                    for option in ReportingPeriod::ALL {
                        option {
                            value: "{option.label()}",
                            selected: option == period,
                            "{option.label()}"
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "notification-btn",
                    onclick: move |_| on_clear_notifications.call(()),
                    "🔔"
                    span { class: "{badge_class}", "{notifications}" }
                }
            }
        }
    }
}
