//! The dashboard page: owns the view state, runs the pipeline for the
//! active chart, and routes every user event through one coroutine.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::events::Modifiers;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use rand::Rng;

use crate::charts::layout::build_layout;
use crate::charts::{export, BarGroup, DisplayMode, FilterBucket, SortKey};
use crate::components::chart_panel::ChartPanel;
use crate::components::detail_modal::DetailModal;
use crate::components::header::DashboardHeader;
use crate::components::insight_panel::InsightPanel;
use crate::components::summary_cards::{ChartStats, SummaryDeck};
use crate::components::toast::{ToastStack, ToastTray};
use crate::components::tooltip::{ChartTooltip, TooltipData};
use crate::core::seed::ReportingPeriod;
use crate::core::{format, platform, timing};
use crate::dashboard::{
    build_view, plan_live_update, Category, DashboardState, DataStore, Debouncer,
};

/// Simulated duration of the chart export before the success toast.
const EXPORT_SIMULATED_MS: u64 = 1_500;

#[cfg(debug_assertions)]
fn log_dashboard_render(category: &str) {
    // Lightweight trace for diagnosing re-render storms.
    println!("[dashboard] render (category={category})");
}

#[derive(Debug, Clone)]
enum DashboardEvent {
    SetSort(SortKey),
    SetFilter(FilterBucket),
    SetMode(DisplayMode),
    SetCategory(Category),
    SetPeriod(ReportingPeriod),
    ClearFilters,
    ClearNotifications,
    SelectRecord(String),
    QuickAction(String),
    CloseDetail,
    GenerateReport(String),
    ScheduleMeeting(String),
    ExportChart,
    ExportReady,
    SortShortcut,
    ResizeRaw,
    RenderSettled { token: u64 },
    LiveTick,
    DismissToast { id: u64 },
}

#[component]
pub fn Dashboard() -> Element {
    let state = use_signal(DashboardState::new);
    // The record store lives outside the signal graph: a live bump to an
    // off-screen category mutates data without dirtying any subscription.
    // `data_epoch` is bumped only for mutations that must repaint.
    let store = use_hook(|| Rc::new(RefCell::new(DataStore::seeded())));
    let data_epoch = use_signal(|| 0u64);
    let toasts = use_signal(ToastStack::default);
    let notifications = use_signal(|| 0u32);
    let selected = use_signal(|| Option::<BarGroup>::None);
    let mut highlighted = use_signal(|| Option::<String>::None);
    let mut tooltip = use_signal(|| Option::<TooltipData>::None);
    let debouncer = use_signal(Debouncer::new);
    let viewport_epoch = use_signal(|| 0u64);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<DashboardEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let state_ref = state.clone();
        let store_ref = store.clone();
        let data_epoch_ref = data_epoch.clone();
        let toasts_ref = toasts.clone();
        let notifications_ref = notifications.clone();
        let selected_ref = selected.clone();
        let highlighted_ref = highlighted.clone();
        let debouncer_ref = debouncer.clone();
        let epoch_ref = viewport_epoch.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<DashboardEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut state_signal = state_ref.clone();
            let data = store_ref.clone();
            let mut data_epoch_signal = data_epoch_ref.clone();
            let toasts_signal = toasts_ref.clone();
            let mut notifications_signal = notifications_ref.clone();
            let mut selected_signal = selected_ref.clone();
            let mut highlighted_signal = highlighted_ref.clone();
            let mut debouncer_signal = debouncer_ref.clone();
            let mut epoch_signal = epoch_ref.clone();

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        DashboardEvent::SetSort(key) => {
                            state_signal.with_mut(|st| st.sort_key = key);
                            push_toast(
                                toasts_signal,
                                &sender_slot,
                                format!("Sorted by {}", key.label()),
                            );
                        }
                        DashboardEvent::SetFilter(bucket) => {
                            state_signal.with_mut(|st| st.filter_bucket = bucket);
                            push_toast(
                                toasts_signal,
                                &sender_slot,
                                format!("Filtered: {}", bucket.label()),
                            );
                        }
                        DashboardEvent::SetMode(mode) => {
                            state_signal.with_mut(|st| st.display_mode = mode);
                            push_toast(
                                toasts_signal,
                                &sender_slot,
                                format!("View changed to {}", mode.label()),
                            );
                        }
                        DashboardEvent::SetCategory(category) => {
                            // The freshly active category re-runs the whole
                            // pipeline; its state may be stale from changes
                            // made while another chart was visible.
                            state_signal.with_mut(|st| st.active_category = category);
                            highlighted_signal.set(None);
                        }
                        DashboardEvent::SetPeriod(period) => {
                            state_signal.with_mut(|st| st.period = period);
                            data.borrow_mut().replace_period(period);
                            data_epoch_signal.with_mut(|epoch| *epoch += 1);
                            highlighted_signal.set(None);
                            selected_signal.set(None);
                            push_toast(
                                toasts_signal,
                                &sender_slot,
                                format!("Dashboard updated for {}", period.label()),
                            );
                        }
                        DashboardEvent::ClearFilters => {
                            state_signal.with_mut(|st| st.clear_filters());
                            push_toast(toasts_signal, &sender_slot, "All filters cleared");
                        }
                        DashboardEvent::ClearNotifications => {
                            if *notifications_signal.peek() > 0 {
                                notifications_signal.set(0);
                                push_toast(toasts_signal, &sender_slot, "Notifications cleared!");
                            }
                        }
                        DashboardEvent::SelectRecord(name) => {
                            let mode = state_signal.peek().display_mode;
                            let group = data.borrow().find(&name).map(|record| {
                                build_layout(std::slice::from_ref(record), mode)
                                    .groups
                                    .remove(0)
                            });
                            selected_signal.set(group);
                        }
                        DashboardEvent::QuickAction(name) => {
                            push_toast(
                                toasts_signal,
                                &sender_slot,
                                format!("Quick actions menu opened for {name}"),
                            );
                        }
                        DashboardEvent::CloseDetail => {
                            selected_signal.set(None);
                        }
                        DashboardEvent::GenerateReport(name) => {
                            selected_signal.set(None);
                            push_toast(
                                toasts_signal,
                                &sender_slot,
                                format!("Report generated for {name}"),
                            );
                        }
                        DashboardEvent::ScheduleMeeting(name) => {
                            selected_signal.set(None);
                            push_toast(
                                toasts_signal,
                                &sender_slot,
                                format!("Meeting scheduled for {name}"),
                            );
                        }
                        DashboardEvent::ExportChart => {
                            push_toast(toasts_signal, &sender_slot, "Chart export started");
                            queue_event_after(
                                &sender_slot,
                                EXPORT_SIMULATED_MS,
                                DashboardEvent::ExportReady,
                            );
                        }
                        DashboardEvent::ExportReady => {
                            let view = build_view(&state_signal.peek(), &data.borrow());
                            let snapshot = export::snapshot_string(
                                view.category.value(),
                                &view.layout,
                                &view.totals,
                            );
                            let filename =
                                format!("salespulse-{}-chart.json", view.category.value());
                            match export::deliver_snapshot(&filename, &snapshot) {
                                Ok(()) => push_toast(
                                    toasts_signal,
                                    &sender_slot,
                                    "Chart exported successfully!",
                                ),
                                Err(err) => push_toast(
                                    toasts_signal,
                                    &sender_slot,
                                    format!("Export failed: {err}"),
                                ),
                            }
                        }
                        DashboardEvent::SortShortcut => {
                            push_toast(
                                toasts_signal,
                                &sender_slot,
                                "Press arrow keys to change sort option",
                            );
                        }
                        DashboardEvent::ResizeRaw => {
                            let token = debouncer_signal.with_mut(|d| d.schedule());
                            queue_event_after(
                                &sender_slot,
                                timing::RESIZE_QUIET_MS,
                                DashboardEvent::RenderSettled { token },
                            );
                        }
                        DashboardEvent::RenderSettled { token } => {
                            // Superseded schedules are dropped; only the last
                            // trigger after the quiet window re-renders.
                            if debouncer_signal.peek().is_current(token) {
                                epoch_signal.with_mut(|epoch| *epoch += 1);
                            }
                        }
                        DashboardEvent::LiveTick => {
                            let mut rng = rand::thread_rng();
                            let client_count = data.borrow().clients.len();
                            let update = plan_live_update(&mut rng, client_count);

                            if update.notify {
                                let unread = *notifications_signal.peek() + 1;
                                notifications_signal.set(unread);
                                if unread == 1 {
                                    push_toast(
                                        toasts_signal,
                                        &sender_slot,
                                        "New notification received",
                                    );
                                }
                            }

                            if let Some(bump) = update.bump {
                                let active = state_signal.peek().active_category;
                                let name = data.borrow_mut().apply_bump(&bump);
                                if let Some(name) = name {
                                    // Off-screen bumps land silently; the
                                    // chart picks them up when its category
                                    // becomes active.
                                    if bump.repaints(active) {
                                        data_epoch_signal.with_mut(|epoch| *epoch += 1);
                                        push_toast(
                                            toasts_signal,
                                            &sender_slot,
                                            format!(
                                                "Update: {name} achieved {}",
                                                format::format_inr(bump.increment)
                                            ),
                                        );
                                    }
                                }
                            }
                        }
                        DashboardEvent::DismissToast { id } => {
                            let mut toasts_signal = toasts_signal;
                            toasts_signal.with_mut(|stack| stack.dismiss(id));
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    // Session-long background timers: the live-update interval and the
    // window resize listener.
    use_hook(|| {
        let ticks = sender_slot.clone();
        platform::spawn_future(async move {
            loop {
                timing::sleep_ms(timing::LIVE_UPDATE_INTERVAL_MS).await;
                match current_sender(&ticks) {
                    Some(sender) => {
                        if sender.unbounded_send(DashboardEvent::LiveTick).is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }
        });

        let resizes = sender_slot.clone();
        platform::on_window_resize(move || {
            if let Some(sender) = current_sender(&resizes) {
                let _ = sender.unbounded_send(DashboardEvent::ResizeRaw);
            }
        });
    });

    let send_event = {
        let coroutine = coroutine.clone();
        move |event: DashboardEvent| {
            coroutine.send(event);
        }
    };

    // Re-render when a settled resize or a visible-category bump lands.
    let _epoch = viewport_epoch();
    let _data = data_epoch();

    let current = state();
    let view = build_view(&current, &store.borrow());

    #[cfg(debug_assertions)]
    {
        log_dashboard_render(view.category.value());
    }

    let unread = notifications();
    let toast_entries = toasts().toasts().to_vec();

    rsx! {
        section {
            class: "dashboard",
            tabindex: "0",
            onkeydown: {
                let send_event = send_event.clone();
                move |evt: Event<KeyboardData>| {
                    let key = evt.key().to_string().to_lowercase();
                    if key == "escape" {
                        send_event(DashboardEvent::ClearFilters);
                    } else if key == "s" && evt.modifiers().contains(Modifiers::CONTROL) {
                        evt.prevent_default();
                        send_event(DashboardEvent::SortShortcut);
                    }
                }
            },

            DashboardHeader {
                period: current.period,
                notifications: unread,
                on_period_change: {
                    let send_event = send_event.clone();
                    move |period| send_event(DashboardEvent::SetPeriod(period))
                },
                on_clear_notifications: {
                    let send_event = send_event.clone();
                    move |_| send_event(DashboardEvent::ClearNotifications)
                },
            }

            section { class: "chart-section",
                div { class: "chart-controls",
                    div { class: "chart-toggle",
                        for category in Category::ALL {
                            button {
                                r#type: "button",
                                class: if category == current.active_category {
                                    "toggle-btn active"
                                } else {
                                    "toggle-btn"
                                },
                                "data-view": "{category.value()}",
                                onclick: {
                                    let send_event = send_event.clone();
                                    move |_| send_event(DashboardEvent::SetCategory(category))
                                },
                                "{category.label()}"
                            }
                        }
                    }

                    div { class: "sort-control",
                        label { r#for: "sortBy", "Sort by" }
                        select {
                            id: "sortBy",
                            class: "sort-select",
                            onchange: {
                                let send_event = send_event.clone();
                                move |evt: Event<FormData>| {
                                    send_event(DashboardEvent::SetSort(SortKey::from_value(
                                        &evt.value(),
                                    )));
                                }
                            },
                            for key in SortKey::ALL {
                                option {
                                    value: "{key.value()}",
                                    selected: key == current.sort_key,
                                    "{key.label()}"
                                }
                            }
                        }
                    }

                    div { class: "view-toggle",
                        for mode in DisplayMode::ALL {
                            button {
                                r#type: "button",
                                class: if mode == current.display_mode {
                                    "view-btn active"
                                } else {
                                    "view-btn"
                                },
                                "data-view": "{mode.value()}",
                                onclick: {
                                    let send_event = send_event.clone();
                                    move |_| send_event(DashboardEvent::SetMode(mode))
                                },
                                "{mode.label()}"
                            }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "download-btn",
                        onclick: {
                            let send_event = send_event.clone();
                            move |_| send_event(DashboardEvent::ExportChart)
                        },
                        "Download"
                    }
                }

                ChartStats { totals: view.totals.clone() }

                div { class: "chart-body",
                    ChartPanel {
                        view: view.clone(),
                        highlighted: highlighted(),
                        on_hover: move |data| tooltip.set(data),
                        on_select: {
                            let send_event = send_event.clone();
                            move |name| send_event(DashboardEvent::SelectRecord(name))
                        },
                        on_highlight: move |name| highlighted.set(Some(name)),
                        on_quick_action: {
                            let send_event = send_event.clone();
                            move |name| send_event(DashboardEvent::QuickAction(name))
                        },
                    }
                    InsightPanel {
                        title: "Key Insights".to_string(),
                        rows: view.insight_rows.clone(),
                    }
                }

                div { class: "chart-legend",
                    for bucket in FilterBucket::ALL {
                        button {
                            r#type: "button",
                            class: if bucket == current.filter_bucket {
                                "legend-item active"
                            } else {
                                "legend-item"
                            },
                            "data-filter": "{bucket.value()}",
                            onclick: {
                                let send_event = send_event.clone();
                                move |_| send_event(DashboardEvent::SetFilter(bucket))
                            },
                            "{bucket.label()}"
                        }
                    }
                }

                SummaryDeck { summary: view.summary.clone() }
            }

            ChartTooltip { tooltip: tooltip() }

            DetailModal {
                record: selected(),
                on_close: {
                    let send_event = send_event.clone();
                    move |_| send_event(DashboardEvent::CloseDetail)
                },
                on_generate_report: {
                    let send_event = send_event.clone();
                    move |name| send_event(DashboardEvent::GenerateReport(name))
                },
                on_schedule_meeting: {
                    let send_event = send_event.clone();
                    move |name| send_event(DashboardEvent::ScheduleMeeting(name))
                },
            }

            ToastTray { toasts: toast_entries }
        }
    }
}

fn current_sender(
    slot: &Rc<RefCell<Option<UnboundedSender<DashboardEvent>>>>,
) -> Option<UnboundedSender<DashboardEvent>> {
    let guard = slot.borrow();
    guard.as_ref().cloned()
}

fn push_toast(
    mut toasts: Signal<ToastStack>,
    sender_slot: &Rc<RefCell<Option<UnboundedSender<DashboardEvent>>>>,
    message: impl Into<String>,
) {
    let id = toasts.with_mut(|stack| stack.push(message));
    queue_event_after(
        sender_slot,
        timing::TOAST_LINGER_MS,
        DashboardEvent::DismissToast { id },
    );
}

fn queue_event_after(
    sender_slot: &Rc<RefCell<Option<UnboundedSender<DashboardEvent>>>>,
    delay_ms: u64,
    event: DashboardEvent,
) {
    if let Some(sender) = current_sender(sender_slot) {
        platform::spawn_future(async move {
            timing::sleep_ms(delay_ms).await;
            let _ = sender.unbounded_send(event);
        });
    }
}
