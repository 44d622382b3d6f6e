//! Card editor modal.
//!
//! Every keystroke is applied to the store as a `ProfileEdit`, so the
//! preview behind the modal updates live.

use bizcard_core::{ProfileEdit, SocialPlatform};
use bizcard_ui::{Button, ButtonVariant, CloseButton, Input};
use dioxus::prelude::*;

use super::photo_picker::PhotoPicker;
use crate::context::{use_card_actions, use_card_signals};

#[component]
pub fn CardEditor(onclose: EventHandler<()>) -> Element {
    let actions = use_card_actions();
    let signals = use_card_signals();
    let edit = use_callback(move |change: ProfileEdit| signals.edit(&actions, change));

    let profile = signals.profile.read().clone();
    let name_error = profile
        .validate()
        .err()
        .map(|_| "A name is required to export the card".to_string());
    let socials: Vec<(SocialPlatform, String)> = SocialPlatform::ALL
        .into_iter()
        .map(|platform| {
            let handle = profile.social_media.get(&platform).cloned().unwrap_or_default();
            (platform, handle)
        })
        .collect();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| onclose.call(()),
            div {
                class: "card-editor",
                role: "dialog",
                "aria-label": "Edit business card",
                onclick: move |e| e.stop_propagation(),

                div { class: "card-editor__header",
                    h2 { "Edit Card" }
                    CloseButton { onclick: move |_| onclose.call(()) }
                }

                PhotoPicker {}

                Input {
                    label: "Name".to_string(),
                    value: profile.name.clone(),
                    required: true,
                    error: name_error,
                    oninput: move |v| edit.call(ProfileEdit::Name(v)),
                }
                Input {
                    label: "Title".to_string(),
                    hint: "optional".to_string(),
                    value: profile.title.clone(),
                    placeholder: "Founder & CEO".to_string(),
                    oninput: move |v| edit.call(ProfileEdit::Title(v)),
                }
                Input {
                    label: "Phone".to_string(),
                    input_type: "tel".to_string(),
                    value: profile.phone.clone(),
                    oninput: move |v| edit.call(ProfileEdit::Phone(v)),
                }
                Input {
                    label: "Website".to_string(),
                    input_type: "url".to_string(),
                    value: profile.website.clone(),
                    placeholder: "www.example.com".to_string(),
                    oninput: move |v| edit.call(ProfileEdit::Website(v)),
                }
                Input {
                    label: "Businesses".to_string(),
                    hint: "comma separated".to_string(),
                    value: profile.business.clone(),
                    oninput: move |v| edit.call(ProfileEdit::Business(v)),
                }

                h3 { class: "card-editor__section", "Social Media" }
                for (platform, handle) in socials {
                    Input {
                        key: "{platform}",
                        label: platform.label().to_string(),
                        hint: "handle or link".to_string(),
                        value: handle,
                        oninput: move |v| edit.call(ProfileEdit::Social(platform, v)),
                    }
                }

                div { class: "card-editor__footer",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| onclose.call(()),
                        "Done"
                    }
                }
            }
        }
    }
}
