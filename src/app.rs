use std::sync::Arc;

use bizcard_core::{
    ArtifactGenerator, CardActions, CardProfile, CardResult, CardStore, Exporter, HttpPhotoFetcher,
    Notification, NotificationCenter, UnsupportedShareSheet,
};
use bizcard_ui::{Button, ButtonVariant, Toast, ViewToggle};
use dioxus::prelude::*;

use crate::components::{ActionBar, BusinessCard, CardEditor};
use crate::context::{use_card_actions, CardSignals};
use crate::host::DesktopHost;
use crate::theme::{code_style, css_variables, GLOBAL_STYLES};
use crate::Settings;

/// Wire the core pipeline to the desktop host.
///
/// The desktop has no native share sheet, so sharing always resolves to
/// opening the card document.
pub fn build_actions(settings: &Settings) -> CardResult<CardActions> {
    let host = DesktopHost::new(settings.downloads_dir.clone())?;
    tracing::debug!(
        downloads_dir = %host.downloads_dir().display(),
        session_dir = %host.session_dir().display(),
        "Desktop host ready"
    );

    let exporter = Exporter::new(
        ArtifactGenerator::default(),
        Arc::new(host),
        Arc::new(UnsupportedShareSheet),
        Arc::new(HttpPhotoFetcher::new()?),
    )
    .with_style(code_style());

    let store = CardStore::new(CardProfile::default()).with_view_mode(settings.initial_view);
    Ok(CardActions::new(
        store,
        Arc::new(exporter),
        NotificationCenter::default(),
    ))
}

/// Root application component.
///
/// Provides global styles and the card signals, and mirrors the
/// notification center into the toast area.
#[component]
pub fn App() -> Element {
    let actions = use_card_actions();
    let profile = use_signal(|| actions.store().snapshot());
    let view_mode = use_signal(|| actions.store().view_mode());
    let signals = use_context_provider(|| CardSignals { profile, view_mode });

    let theme_css = use_hook(|| format!("{}{}", css_variables(), GLOBAL_STYLES));
    let mut editing = use_signal(|| false);
    let mut notification = use_signal(|| Option::<Notification>::None);

    let center = actions.notifications().clone();
    use_future(move || {
        let mut rx = center.subscribe();
        async move {
            loop {
                let current = rx.borrow_and_update().clone();
                notification.set(current);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    let toggle_actions = actions.clone();
    let dismiss_center = actions.notifications().clone();

    rsx! {
        style { {theme_css} }
        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "app-title", "bizcard" }
                div { class: "app-header__controls",
                    ViewToggle {
                        mode: view_mode(),
                        ontoggle: move |mode| {
                            toggle_actions.store().set_view_mode(mode);
                            signals.sync(toggle_actions.store());
                        },
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| editing.set(true),
                        "Edit Card"
                    }
                }
            }

            main { class: "app-main",
                BusinessCard { profile: profile(), view_mode: view_mode() }
                ActionBar {}
            }

            if editing() {
                CardEditor { onclose: move |_| editing.set(false) }
            }

            div { class: "toast-area",
                Toast {
                    notification: notification(),
                    ondismiss: move |_| dismiss_center.dismiss(),
                }
            }
        }
    }
}
