//! QR code for the card preview.

use std::sync::Arc;

use bizcard_core::{CardError, CardProfile};
use dioxus::prelude::*;

use crate::context::use_card_actions;

/// Renders the vCard QR code as inline SVG.
///
/// The code is regenerated whenever the profile changes. The SVG has no
/// width/height attributes so CSS controls the displayed size.
#[component]
pub fn CodeDisplay(profile: Arc<CardProfile>) -> Element {
    let actions = use_card_actions();
    let exporter = actions.exporter();

    let svg = exporter
        .generator()
        .generate(&profile)
        .map(|artifacts| artifacts.code.to_svg(exporter.style()));

    match svg {
        Ok(svg) => rsx! {
            div { class: "code-display",
                div {
                    class: "code-display__frame",
                    dangerous_inner_html: "{svg}",
                }
                span { class: "code-display__caption", "Scan to save contact" }
            }
        },
        Err(CardError::InvalidProfile(_)) => rsx! {
            div { class: "code-display__error", "Add a name to generate the QR code" }
        },
        Err(e) => {
            tracing::error!("Failed to generate QR code: {}", e);
            rsx! {
                div { class: "code-display__error", "Failed to generate QR code: {e}" }
            }
        }
    }
}
