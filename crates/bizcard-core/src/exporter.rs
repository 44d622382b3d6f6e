//! Exporter/Sharer - turns a profile snapshot into an external effect.
//!
//! Every action generates fresh artifacts from the snapshot it was given,
//! registers exactly one object URL for the exported bytes, hands it to the
//! host, and releases it when the action finishes, whatever the outcome.

use std::sync::Arc;

use async_trait::async_trait;

use crate::blob::{BlobRegistry, ObjectUrl};
use crate::code::CodeStyle;
use crate::document::{vcard_filename, CardDocument, DOCUMENT_MIME};
use crate::error::CardResult;
use crate::generator::ArtifactGenerator;
use crate::photo::{embed_photo, PhotoFetcher};
use crate::profile::{CardProfile, PhotoRef};
use crate::share::{share_message, share_title, whatsapp_url, ShareFile, ShareRequest, ShareSheet};
use crate::vcard::VCARD_MIME;

/// Host environment effects: saving, opening, clipboard.
#[async_trait]
pub trait ExportHost: Send + Sync {
    /// Save the bytes behind `url` under `filename`. Returns where they went.
    async fn save_file(&self, url: &ObjectUrl, filename: &str) -> CardResult<String>;

    /// Open the document behind `url` in a new view.
    async fn open_document(&self, url: &ObjectUrl, filename: &str) -> CardResult<()>;

    /// Open an external link.
    async fn open_url(&self, url: &str) -> CardResult<()>;

    async fn copy_text(&self, text: &str) -> CardResult<()>;
}

/// What an export action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// vCard written by the host
    Saved { filename: String, location: String },
    /// Document opened directly
    Opened { filename: String },
    /// Document handed to the native share sheet
    Shared { filename: String },
    /// Share sheet unavailable or cancelled; document opened instead
    OpenedFallback { filename: String },
    /// Messaging deep link opened
    LinkOpened { url: String },
    /// Share message placed on the clipboard
    Copied,
}

/// Generates artifacts and drives the host for each export action.
#[derive(Clone)]
pub struct Exporter {
    generator: ArtifactGenerator,
    blobs: BlobRegistry,
    host: Arc<dyn ExportHost>,
    share_sheet: Arc<dyn ShareSheet>,
    fetcher: Arc<dyn PhotoFetcher>,
    style: CodeStyle,
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("blobs", &self.blobs)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl Exporter {
    pub fn new(
        generator: ArtifactGenerator,
        host: Arc<dyn ExportHost>,
        share_sheet: Arc<dyn ShareSheet>,
        fetcher: Arc<dyn PhotoFetcher>,
    ) -> Self {
        Self {
            generator,
            blobs: BlobRegistry::new(),
            host,
            share_sheet,
            fetcher,
            style: CodeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: CodeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_blob_registry(mut self, blobs: BlobRegistry) -> Self {
        self.blobs = blobs;
        self
    }

    pub fn blobs(&self) -> &BlobRegistry {
        &self.blobs
    }

    pub fn generator(&self) -> &ArtifactGenerator {
        &self.generator
    }

    pub fn style(&self) -> &CodeStyle {
        &self.style
    }

    /// Save the profile's vCard as `<Name>_Contact.vcf`.
    pub async fn download_vcard(&self, profile: &CardProfile) -> CardResult<ExportOutcome> {
        let artifacts = self.generator.generate(profile)?;
        let filename = vcard_filename(&profile.name);

        let url = self.blobs.create(artifacts.vcard.into_string().into_bytes(), VCARD_MIME);
        let location = self.host.save_file(&url, &filename).await?;

        tracing::info!(%filename, %location, "Saved vCard");
        Ok(ExportOutcome::Saved { filename, location })
    }

    /// Render the standalone document with the photo embedded.
    ///
    /// Remote photos are fetched first; a failed fetch fails the export with
    /// `PhotoReadFailure` instead of producing a document that depends on the
    /// network.
    pub async fn build_document(&self, profile: &CardProfile) -> CardResult<CardDocument> {
        let artifacts = self.generator.generate(profile)?;

        let embedded;
        let profile = if profile.photo.is_embedded() {
            profile
        } else {
            let photo = embed_photo(&profile.photo, self.fetcher.as_ref()).await?;
            embedded = CardProfile {
                photo: PhotoRef::Embedded(photo),
                ..profile.clone()
            };
            &embedded
        };

        CardDocument::render(profile, &artifacts, &self.style)
    }

    /// Open the document directly.
    pub async fn open_card(&self, profile: &CardProfile) -> CardResult<ExportOutcome> {
        let document = self.build_document(profile).await?;
        let url = self.blobs.create(document.html.into_bytes(), DOCUMENT_MIME);
        self.host.open_document(&url, &document.filename).await?;

        tracing::info!(filename = %document.filename, "Opened business card");
        Ok(ExportOutcome::Opened {
            filename: document.filename,
        })
    }

    /// Share the document through the native share sheet, falling back to
    /// opening it when sharing is unavailable, cancelled or rejected.
    pub async fn share_card(&self, profile: &CardProfile) -> CardResult<ExportOutcome> {
        let document = self.build_document(profile).await?;
        let filename = document.filename;
        let url = self.blobs.create(document.html.into_bytes(), DOCUMENT_MIME);

        if self.share_sheet.is_available() {
            let request = ShareRequest {
                title: share_title(profile),
                text: share_message(profile),
                files: vec![ShareFile {
                    filename: filename.clone(),
                    mime: DOCUMENT_MIME.to_string(),
                    url: &url,
                }],
            };
            match self.share_sheet.share(request).await {
                Ok(()) => {
                    tracing::info!(%filename, "Shared business card");
                    return Ok(ExportOutcome::Shared { filename });
                }
                Err(e) if e.is_share_fallback() => {
                    tracing::info!("Native share not completed ({}), opening card directly", e);
                }
                Err(e) => {
                    tracing::warn!("Native share failed ({}), opening card directly", e);
                }
            }
        } else {
            tracing::info!("Native share unavailable, opening card directly");
        }

        self.host.open_document(&url, &filename).await?;
        Ok(ExportOutcome::OpenedFallback { filename })
    }

    /// Open the WhatsApp deep link with a summary of the card.
    pub async fn share_whatsapp(&self, profile: &CardProfile) -> CardResult<ExportOutcome> {
        profile.validate()?;
        let url = whatsapp_url(profile);
        self.host.open_url(&url).await?;

        tracing::info!("Opened WhatsApp share link");
        Ok(ExportOutcome::LinkOpened { url })
    }

    /// Put the share message on the clipboard.
    pub async fn copy_share_message(&self, profile: &CardProfile) -> CardResult<ExportOutcome> {
        profile.validate()?;
        self.host.copy_text(&share_message(profile)).await?;
        Ok(ExportOutcome::Copied)
    }
}
