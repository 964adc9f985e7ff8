//! Transient notification messages. Fire-and-forget: callers push a string
//! and the tray dismisses it a few seconds later.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    /// Queues a message and returns its id so the caller can schedule the
    /// dismissal.
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[component]
pub fn ToastTray(toasts: Vec<Toast>) -> Element {
    rsx! {
        div { class: "toast-tray",
            for toast in toasts {
                div { key: "{toast.id}", class: "toast-message", "{toast.message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss_round_trip() {
        let mut stack = ToastStack::default();
        let first = stack.push("Sorted by Name");
        let second = stack.push("Filtered: Show All");
        assert_eq!(stack.toasts().len(), 2);

        stack.dismiss(first);
        assert_eq!(stack.toasts().len(), 1);
        assert_eq!(stack.toasts()[0].id, second);

        // Dismissing twice is harmless.
        stack.dismiss(first);
        assert_eq!(stack.toasts().len(), 1);
    }
}
