//! Export actions under the card preview.
//!
//! Each button starts its action immediately; actions may overlap and each
//! works on the card as it was when clicked.

use std::future::Future;

use bizcard_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::{get_settings, use_card_actions};

/// Spawn an action, tracking how many are in flight.
fn run<T: 'static>(mut pending: Signal<usize>, task: impl Future<Output = T> + 'static) {
    pending += 1;
    spawn(async move {
        task.await;
        pending -= 1;
    });
}

#[component]
pub fn ActionBar() -> Element {
    let actions = use_card_actions();
    let pending = use_signal(|| 0usize);
    let downloads_dir = get_settings().downloads_dir.display().to_string();

    let (a1, a2, a3, a4, a5) = (
        actions.clone(),
        actions.clone(),
        actions.clone(),
        actions.clone(),
        actions,
    );

    rsx! {
        div { class: "action-bar",
            Button {
                variant: ButtonVariant::Primary,
                title: "Save a .vcf contact file".to_string(),
                onclick: move |_| run(pending, a1.download_vcard()),
                "\u{1F4C7} Save Contact"
            }
            Button {
                variant: ButtonVariant::Outline,
                title: "Open the standalone card page".to_string(),
                onclick: move |_| run(pending, a2.open_card()),
                "\u{1F4C4} Open Card"
            }
            Button {
                variant: ButtonVariant::Outline,
                title: "Share the card page".to_string(),
                onclick: move |_| run(pending, a3.share_card()),
                "\u{1F4E4} Share Card"
            }
            Button {
                variant: ButtonVariant::WhatsApp,
                onclick: move |_| run(pending, a4.share_whatsapp()),
                "WhatsApp"
            }
            Button {
                variant: ButtonVariant::Ghost,
                title: "Copy the card details as text".to_string(),
                onclick: move |_| run(pending, a5.copy_share_message()),
                "Copy Details"
            }
            p { class: "action-bar__hint",
                if pending() > 0 {
                    "Working..."
                } else {
                    "Contacts are saved to {downloads_dir}"
                }
            }
        }
    }
}
