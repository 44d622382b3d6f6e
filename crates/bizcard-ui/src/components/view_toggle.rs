//! Vertical / horizontal layout switch for the card preview.

use bizcard_core::ViewMode;
use dioxus::prelude::*;

/// Label for the button that switches *away* from `mode`.
pub fn toggle_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Vertical => "Horizontal layout",
        ViewMode::Horizontal => "Vertical layout",
    }
}

#[component]
pub fn ViewToggle(mode: ViewMode, ontoggle: EventHandler<ViewMode>) -> Element {
    let label = toggle_label(mode);
    let pressed = if mode == ViewMode::Horizontal { "true" } else { "false" };

    rsx! {
        button {
            class: "view-toggle",
            r#type: "button",
            "aria-pressed": pressed,
            onclick: move |_| {
                let next = mode.toggled();
                tracing::debug!(?next, "Card layout toggled");
                ontoggle.call(next);
            },
            span { class: "view-toggle-icon", "\u{21C4}" }
            "{label}"
        }
    }
}
