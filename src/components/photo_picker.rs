//! Photo Picker Component
//!
//! Local file picker plus a field for a remote image URL.

use bizcard_core::photo::PHOTO_EXTENSIONS;
use bizcard_ui::{Button, ButtonVariant, Input};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::{use_card_actions, use_card_signals};

#[component]
pub fn PhotoPicker() -> Element {
    let actions = use_card_actions();
    let signals = use_card_signals();
    let mut loading = use_signal(|| false);
    let mut url = use_signal(String::new);

    let preview_src = signals.profile.read().photo.to_src();

    let pick_actions = actions.clone();
    let pick_file = move |_| {
        let actions = pick_actions.clone();
        loading.set(true);

        spawn(async move {
            // The native dialog blocks, keep it off the UI thread
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", PHOTO_EXTENSIONS)
                    .set_title("Select Photo")
                    .pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => {
                    if actions.replace_photo(&path).await {
                        signals.sync(actions.store());
                    }
                }
                Ok(None) => tracing::debug!("Photo selection cancelled"),
                Err(e) => {
                    tracing::error!("File picker failed: {}", e);
                    actions.notifications().error(format!("File picker failed: {}", e));
                }
            }
            loading.set(false);
        });
    };

    let use_url = move |_| {
        let src = url.read().trim().to_string();
        if src.is_empty() {
            return;
        }
        if actions.set_photo_url(&src) {
            signals.sync(actions.store());
            url.set(String::new());
        }
    };

    rsx! {
        div { class: "photo-picker",
            img {
                class: "photo-picker__preview",
                src: "{preview_src}",
                alt: "Current photo",
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: loading(),
                onclick: pick_file,
                if loading() { "Loading..." } else { "Choose Photo" }
            }
        }
        div { class: "photo-picker__url",
            Input {
                label: "Photo URL".to_string(),
                hint: "embedded when the card is exported".to_string(),
                input_type: "url".to_string(),
                value: url(),
                placeholder: "https://".to_string(),
                oninput: move |v| url.set(v),
            }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: use_url,
                "Use URL"
            }
        }
    }
}
