//! Standalone HTML card document and export file naming.
//!
//! The document carries everything inline: the QR code as SVG, the photo as a
//! `data:` URL and a small script that saves the vCard, so it can be opened
//! without the editing session.

use askama::Template;

use crate::code::CodeStyle;
use crate::error::{CardError, CardResult};
use crate::generator::Artifacts;
use crate::profile::CardProfile;

/// MIME type of the exported document
pub const DOCUMENT_MIME: &str = "text/html";

/// Characters that cannot appear in file names on common filesystems.
const FORBIDDEN_FILENAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

#[derive(Template)]
#[template(path = "card.html")]
struct CardDocumentHtml<'a> {
    name: &'a str,
    title: Option<&'a str>,
    phone: &'a str,
    website: Option<&'a str>,
    website_href: String,
    businesses: Vec<String>,
    photo_src: String,
    social_links: Vec<(&'static str, String)>,
    code_svg: String,
    vcard_js: String,
    vcard_filename_js: String,
    footer: Option<String>,
}

/// A rendered, self-contained card document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDocument {
    pub filename: String,
    pub html: String,
}

impl CardDocument {
    /// Render the document for a profile and its freshly generated artifacts.
    ///
    /// The photo is written as-is; callers wanting a self-contained document
    /// embed it first (see `photo::embed_photo`).
    pub fn render(profile: &CardProfile, artifacts: &Artifacts, style: &CodeStyle) -> CardResult<Self> {
        let businesses = profile.business_segments();
        let footer = businesses.first().cloned();

        let page = CardDocumentHtml {
            name: profile.name.trim(),
            title: profile.title(),
            phone: &profile.phone,
            website: Some(profile.website.trim()).filter(|site| !site.is_empty()),
            website_href: profile.website_href(),
            businesses,
            photo_src: profile.photo.to_src(),
            social_links: profile
                .social_links()
                .into_iter()
                .map(|(platform, url)| (platform.label(), url))
                .collect(),
            code_svg: svg_body(&artifacts.code.to_svg(style)).to_string(),
            vcard_js: js_string(artifacts.vcard.as_str())?,
            vcard_filename_js: js_string(&vcard_filename(&profile.name))?,
            footer,
        };

        Ok(Self {
            filename: document_filename(&profile.name),
            html: page.render()?,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.html.as_bytes()
    }
}

/// `<Name_With_Underscores>_Contact.vcf`
pub fn vcard_filename(name: &str) -> String {
    format!("{}_Contact.vcf", filename_stem(name, '_'))
}

/// `<Name-With-Dashes>-card.html`
pub fn document_filename(name: &str) -> String {
    format!("{}-card.html", filename_stem(name, '-'))
}

/// Collapse whitespace runs and forbidden characters into `sep`. Surrounding
/// whitespace and leading dots are dropped so the file is never hidden.
fn filename_stem(name: &str, sep: char) -> String {
    let name = name
        .trim_start_matches(|c: char| c == '.' || c.is_whitespace())
        .trim_end();
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_whitespace() || FORBIDDEN_FILENAME_CHARS.contains(&c) || c.is_control() {
            if !in_run {
                out.push(sep);
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// JSON string literal safe to place inside a `<script>` element.
fn js_string(value: &str) -> CardResult<String> {
    let literal = serde_json::to_string(value)
        .map_err(|e| CardError::ExportFailure(format!("failed to encode script value: {}", e)))?;
    Ok(literal.replace("</", "<\\/"))
}

/// Drop the XML declaration so the SVG can be inlined into HTML.
fn svg_body(svg: &str) -> &str {
    svg.find("<svg").map_or(svg, |start| &svg[start..])
}
