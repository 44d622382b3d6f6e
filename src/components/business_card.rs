//! Business Card Preview
//!
//! One card component for both layouts; the view mode only switches the
//! CSS class.

use std::sync::Arc;

use bizcard_core::{CardProfile, ViewMode};
use dioxus::prelude::*;

use super::code_display::CodeDisplay;

/// Live preview of the card
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     BusinessCard {
///         profile: signals.profile(),
///         view_mode: ViewMode::Horizontal,
///     }
/// }
/// ```
#[component]
pub fn BusinessCard(profile: Arc<CardProfile>, view_mode: ViewMode) -> Element {
    let layout_class = view_mode.class();

    rsx! {
        article { class: "biz-card {layout_class}",
            div { class: "biz-card__identity",
                CardPhoto { profile: profile.clone() }
                CardHeader { profile: profile.clone() }
                CardContact { profile: profile.clone() }
            }
            CodeDisplay { profile: profile.clone() }
        }
    }
}

/// Photo with an initials fallback when the image cannot be displayed.
#[component]
fn CardPhoto(profile: Arc<CardProfile>) -> Element {
    let src = profile.photo.to_src();
    let mut failed_src = use_signal(|| Option::<String>::None);
    let show_initials = failed_src.read().as_deref() == Some(src.as_str());
    let initials = profile.initials();

    if show_initials {
        return rsx! {
            div { class: "biz-card__initials", "{initials}" }
        };
    }

    let alt = format!("Photo of {}", profile.name.trim());
    let broken_src = src.clone();
    rsx! {
        img {
            class: "biz-card__photo",
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| {
                tracing::warn!("Card photo failed to load, showing initials");
                failed_src.set(Some(broken_src.clone()));
            },
        }
    }
}

#[component]
fn CardHeader(profile: Arc<CardProfile>) -> Element {
    let businesses = profile.business_segments();

    rsx! {
        h2 { class: "biz-card__name", "{profile.name}" }
        if let Some(title) = profile.title() {
            div { class: "biz-card__title", "{title}" }
        }
        if !businesses.is_empty() {
            ul { class: "biz-card__businesses",
                for business in businesses {
                    li { key: "{business}", "{business}" }
                }
            }
        }
    }
}

#[component]
fn CardContact(profile: Arc<CardProfile>) -> Element {
    let phone = profile.phone.trim().to_string();
    let website = profile.website.trim().to_string();
    let website_href = profile.website_href();
    let social_links: Vec<(&'static str, &'static str, String)> = profile
        .social_links()
        .into_iter()
        .map(|(platform, url)| (platform.key(), platform.label(), url))
        .collect();

    rsx! {
        div { class: "biz-card__contact",
            if !phone.is_empty() {
                a { href: "tel:{phone}", "\u{260E} {phone}" }
            }
            if !website.is_empty() {
                a { href: "{website_href}", "\u{1F310} {website}" }
            }
        }
        if !social_links.is_empty() {
            div { class: "biz-card__social",
                for (key, label, url) in social_links {
                    a {
                        key: "{key}",
                        href: "{url}",
                        title: "{url}",
                        "{label}"
                    }
                }
            }
        }
    }
}
