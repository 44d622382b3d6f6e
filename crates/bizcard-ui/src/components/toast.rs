//! Toast notification area.
//!
//! Shows the current [`Notification`] from the core notification center.
//! The center clears it after a few seconds; clicking dismisses it early.

use bizcard_core::{Notification, NotificationKind};
use dioxus::prelude::*;

fn icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "\u{2713}",
        NotificationKind::Info => "\u{2139}",
        NotificationKind::Error => "\u{26A0}",
    }
}

/// ARIA role: errors interrupt, the rest are polite status updates.
fn role(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Error => "alert",
        _ => "status",
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ToastProps {
    /// Notification to display; nothing is rendered when `None`
    pub notification: Option<Notification>,
    #[props(default)]
    pub ondismiss: Option<EventHandler<()>>,
}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    let Some(notification) = props.notification else {
        return rsx! {};
    };
    let ondismiss = props.ondismiss;
    let class = format!("toast {}", notification.kind.class());
    let icon = icon(notification.kind);

    rsx! {
        div {
            key: "{notification.id}",
            class: "{class}",
            role: role(notification.kind),
            onclick: move |_| {
                if let Some(handler) = &ondismiss {
                    handler.call(());
                }
            },
            span { class: "toast-icon", "{icon}" }
            span { class: "toast-message", "{notification.message}" }
        }
    }
}
