//! Card Profile - the editable business card fields
//!
//! Holds the contact details rendered on the card and exported as a vCard,
//! together with the photo reference and social links.

use std::collections::BTreeMap;
use std::fmt;

use base64::Engine;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CardError, CardResult};

/// Silhouette used when no photo has been chosen.
const DEFAULT_AVATAR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><rect width="100" height="100" fill="#1a1a1a"/><circle cx="50" cy="38" r="20" fill="#d4af37"/><path d="M 18 90 Q 18 62, 50 62 Q 82 62, 82 90 Z" fill="#d4af37"/></svg>"##;

/// Social platforms a card can link to, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Youtube,
    Whatsapp,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 6] = [
        SocialPlatform::Linkedin,
        SocialPlatform::Twitter,
        SocialPlatform::Instagram,
        SocialPlatform::Facebook,
        SocialPlatform::Youtube,
        SocialPlatform::Whatsapp,
    ];

    /// Lowercase key, as used in form field names.
    pub fn key(&self) -> &'static str {
        match self {
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Whatsapp => "whatsapp",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Youtube => "YouTube",
            SocialPlatform::Whatsapp => "WhatsApp",
        }
    }

    /// Turn a handle (`@user`, `user`) into a profile link.
    ///
    /// Values that already are `http(s)` URLs are returned unchanged.
    /// WhatsApp handles are reduced to their digits for a `wa.me` link.
    pub fn profile_url(&self, handle: &str) -> String {
        let handle = handle.trim();
        if handle.starts_with("http://") || handle.starts_with("https://") {
            return handle.to_string();
        }
        let user = handle.trim_start_matches('@');
        match self {
            SocialPlatform::Linkedin => format!("https://www.linkedin.com/in/{}", user),
            SocialPlatform::Twitter => format!("https://twitter.com/{}", user),
            SocialPlatform::Instagram => format!("https://www.instagram.com/{}", user),
            SocialPlatform::Facebook => format!("https://www.facebook.com/{}", user),
            SocialPlatform::Youtube => format!("https://www.youtube.com/@{}", user),
            SocialPlatform::Whatsapp => {
                let digits: String = user.chars().filter(char::is_ascii_digit).collect();
                format!("https://wa.me/{}", digits)
            }
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card layout. Presentation only, never part of an exported artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Vertical,
    Horizontal,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Vertical => ViewMode::Horizontal,
            ViewMode::Horizontal => ViewMode::Vertical,
        }
    }

    /// CSS modifier class for the card root.
    pub fn class(&self) -> &'static str {
        match self {
            ViewMode::Vertical => "biz-card--vertical",
            ViewMode::Horizontal => "biz-card--horizontal",
        }
    }
}

/// Image bytes held in memory together with their MIME type.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedPhoto {
    pub mime: String,
    pub data: Vec<u8>,
}

impl EmbeddedPhoto {
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// `data:<mime>;base64,<payload>`
    pub fn to_data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{}", self.mime, encoded)
    }
}

impl fmt::Debug for EmbeddedPhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedPhoto")
            .field("mime", &self.mime)
            .field("len", &self.data.len())
            .finish()
    }
}

/// A displayable photo: either a remote URL or embedded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoRef {
    Remote(Url),
    Embedded(EmbeddedPhoto),
}

impl PhotoRef {
    /// Parse a `data:` URL or an absolute URL.
    pub fn parse(src: &str) -> CardResult<Self> {
        let src = src.trim();
        if let Some(rest) = src.strip_prefix("data:") {
            let (meta, payload) = rest.split_once(',').ok_or_else(|| {
                CardError::PhotoReadFailure("data URL has no payload separator".to_string())
            })?;
            let mime = meta.strip_suffix(";base64").ok_or_else(|| {
                CardError::PhotoReadFailure("only base64 data URLs are supported".to_string())
            })?;
            let data = base64::engine::general_purpose::STANDARD
                .decode(payload)
                .map_err(|e| CardError::PhotoReadFailure(format!("invalid base64: {}", e)))?;
            return Ok(PhotoRef::Embedded(EmbeddedPhoto::new(mime, data)));
        }

        Url::parse(src)
            .map(PhotoRef::Remote)
            .map_err(|e| CardError::PhotoReadFailure(format!("invalid photo URL: {}", e)))
    }

    /// Image source usable in an `img` element.
    pub fn to_src(&self) -> String {
        match self {
            PhotoRef::Remote(url) => url.to_string(),
            PhotoRef::Embedded(photo) => photo.to_data_url(),
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, PhotoRef::Embedded(_))
    }
}

impl Default for PhotoRef {
    fn default() -> Self {
        PhotoRef::Embedded(EmbeddedPhoto::new(
            "image/svg+xml",
            DEFAULT_AVATAR_SVG.as_bytes().to_vec(),
        ))
    }
}

/// A single field mutation coming from the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEdit {
    Name(String),
    Title(String),
    Phone(String),
    Website(String),
    Business(String),
    Photo(PhotoRef),
    Social(SocialPlatform, String),
}

/// Editable business card contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardProfile {
    /// Display name, required for export
    pub name: String,

    /// Optional role or tagline (empty = absent)
    pub title: String,

    /// Freeform phone number
    pub phone: String,

    /// Freeform website, scheme optional
    pub website: String,

    /// Comma separated business names, in display order
    pub business: String,

    pub photo: PhotoRef,

    /// Handle or URL per platform; empty entries are treated as absent
    pub social_media: BTreeMap<SocialPlatform, String>,
}

impl Default for CardProfile {
    fn default() -> Self {
        Self {
            name: "Alex Morgan".to_string(),
            title: String::new(),
            phone: "+1 555-0100".to_string(),
            website: "www.example.com".to_string(),
            business: "Morgan Digital, Harbor Trading Co".to_string(),
            photo: PhotoRef::default(),
            social_media: SocialPlatform::ALL
                .iter()
                .map(|p| (*p, String::new()))
                .collect(),
        }
    }
}

impl CardProfile {
    /// Apply one editor mutation.
    pub fn apply(&mut self, edit: ProfileEdit) {
        match edit {
            ProfileEdit::Name(v) => self.name = v,
            ProfileEdit::Title(v) => self.title = v,
            ProfileEdit::Phone(v) => self.phone = v,
            ProfileEdit::Website(v) => self.website = v,
            ProfileEdit::Business(v) => self.business = v,
            ProfileEdit::Photo(p) => self.photo = p,
            ProfileEdit::Social(platform, v) => {
                self.social_media.insert(platform, v);
            }
        }
    }

    /// Fails with `InvalidProfile` when the card cannot be exported.
    pub fn validate(&self) -> CardResult<()> {
        if self.name.trim().is_empty() {
            return Err(CardError::InvalidProfile("name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Trimmed, non-empty business names in their original order.
    pub fn business_segments(&self) -> Vec<String> {
        split_business(&self.business)
    }

    /// Business list re-joined with `", "`.
    pub fn canonical_business(&self) -> String {
        self.business_segments().join(", ")
    }

    pub fn title(&self) -> Option<&str> {
        let title = self.title.trim();
        (!title.is_empty()).then_some(title)
    }

    /// Website link with `https://` added when no scheme is present.
    pub fn website_href(&self) -> String {
        let site = self.website.trim();
        if site.starts_with("http://") || site.starts_with("https://") {
            site.to_string()
        } else {
            format!("https://{}", site)
        }
    }

    /// Non-empty social links in platform order, as `(platform, url)`.
    pub fn social_links(&self) -> Vec<(SocialPlatform, String)> {
        self.social_media
            .iter()
            .filter(|(_, handle)| !handle.trim().is_empty())
            .map(|(platform, handle)| (*platform, platform.profile_url(handle)))
            .collect()
    }

    /// Initials shown when the photo cannot be displayed.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Split a comma separated list, trimming each segment and dropping blanks.
pub fn split_business(business: &str) -> Vec<String> {
    business
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = CardProfile::default();
        assert!(profile.validate().is_ok());
        assert!(profile.photo.is_embedded());
        assert_eq!(profile.social_media.len(), SocialPlatform::ALL.len());
        assert!(profile.social_links().is_empty());
    }

    #[test]
    fn test_business_segments_trim_and_order() {
        let profile = CardProfile {
            business: "  Acme ,Beta Corp,, Gamma  ".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.business_segments(), vec!["Acme", "Beta Corp", "Gamma"]);
        assert_eq!(profile.canonical_business(), "Acme, Beta Corp, Gamma");
    }

    #[test]
    fn test_empty_business_has_no_segments() {
        assert!(split_business("").is_empty());
        assert!(split_business(" , ,").is_empty());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut profile = CardProfile::default();
        profile.apply(ProfileEdit::Name("   ".to_string()));
        assert!(matches!(profile.validate(), Err(CardError::InvalidProfile(_))));
    }

    #[test]
    fn test_website_href() {
        let mut profile = CardProfile::default();
        profile.website = "example.com".to_string();
        assert_eq!(profile.website_href(), "https://example.com");
        profile.website = "http://example.com/a".to_string();
        assert_eq!(profile.website_href(), "http://example.com/a");
    }

    #[test]
    fn test_social_profile_urls() {
        assert_eq!(
            SocialPlatform::Twitter.profile_url("@jane"),
            "https://twitter.com/jane"
        );
        assert_eq!(
            SocialPlatform::Linkedin.profile_url("https://linkedin.com/in/x"),
            "https://linkedin.com/in/x"
        );
        assert_eq!(
            SocialPlatform::Whatsapp.profile_url("+1 555-0100"),
            "https://wa.me/15550100"
        );
    }

    #[test]
    fn test_social_edit_shows_up_in_links() {
        let mut profile = CardProfile::default();
        profile.apply(ProfileEdit::Social(SocialPlatform::Instagram, "jane".into()));
        assert_eq!(
            profile.social_links(),
            vec![(SocialPlatform::Instagram, "https://www.instagram.com/jane".to_string())]
        );
    }

    #[test]
    fn test_photo_parse_data_url_roundtrip() {
        let photo = EmbeddedPhoto::new("image/png", vec![0x89, b'P', b'N', b'G']);
        let parsed = PhotoRef::parse(&photo.to_data_url()).unwrap();
        assert_eq!(parsed, PhotoRef::Embedded(photo));
    }

    #[test]
    fn test_photo_parse_remote() {
        let parsed = PhotoRef::parse("https://example.com/me.jpg").unwrap();
        assert!(matches!(parsed, PhotoRef::Remote(_)));
        assert_eq!(parsed.to_src(), "https://example.com/me.jpg");
    }

    #[test]
    fn test_photo_parse_rejects_garbage() {
        assert!(matches!(
            PhotoRef::parse("not a url"),
            Err(CardError::PhotoReadFailure(_))
        ));
        assert!(matches!(
            PhotoRef::parse("data:image/png,plain"),
            Err(CardError::PhotoReadFailure(_))
        ));
    }

    #[test]
    fn test_initials() {
        let profile = CardProfile {
            name: "jane q doe".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.initials(), "JQ");
    }
}
