//! Share requests: native share sheet and messaging deep links.

use async_trait::async_trait;

use crate::blob::ObjectUrl;
use crate::error::{CardError, CardResult};
use crate::profile::CardProfile;

/// Messaging service used for the deep-link share.
pub const WHATSAPP_SEND_URL: &str = "https://wa.me/send";

/// A file handed to the share sheet.
#[derive(Debug)]
pub struct ShareFile<'a> {
    pub filename: String,
    pub mime: String,
    pub url: &'a ObjectUrl,
}

/// What the native share sheet receives.
#[derive(Debug)]
pub struct ShareRequest<'a> {
    pub title: String,
    pub text: String,
    pub files: Vec<ShareFile<'a>>,
}

/// Platform share sheet.
///
/// Implementations return `ShareUnavailable` when the platform has none and
/// `ShareCancelled` when the user dismisses it.
#[async_trait]
pub trait ShareSheet: Send + Sync {
    fn is_available(&self) -> bool;

    async fn share(&self, request: ShareRequest<'_>) -> CardResult<()>;
}

/// Share sheet for hosts without one. Every request resolves to the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedShareSheet;

#[async_trait]
impl ShareSheet for UnsupportedShareSheet {
    fn is_available(&self) -> bool {
        false
    }

    async fn share(&self, _request: ShareRequest<'_>) -> CardResult<()> {
        Err(CardError::ShareUnavailable)
    }
}

/// `<name> - Business Card`
pub fn share_title(profile: &CardProfile) -> String {
    format!("{} - Business Card", profile.name.trim())
}

/// Plain text summary used by messaging shares.
pub fn share_message(profile: &CardProfile) -> String {
    let business = profile.business_segments().into_iter().next().unwrap_or_default();
    let mut lines = vec![
        format!("*{}*", profile.name.trim()),
        format!("Phone: {}", profile.phone.trim()),
        format!("Website: {}", profile.website.trim()),
    ];
    if !business.is_empty() {
        lines.push(format!("Business: {}", business));
    }
    lines.push(String::new());
    lines.push("Scan the QR code on my card to save my contact!".to_string());
    lines.join("\n")
}

/// `https://wa.me/send?text=<url-encoded message>`
pub fn whatsapp_url(profile: &CardProfile) -> String {
    format!(
        "{}?text={}",
        WHATSAPP_SEND_URL,
        urlencoding::encode(&share_message(profile))
    )
}
