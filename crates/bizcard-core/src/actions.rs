//! User action boundary.
//!
//! Each export action snapshots the store when it is invoked (not when the
//! returned future is first polled), runs the export, and reports the result
//! as a notification. Errors stop here; callers only see the outcome. The
//! returned futures own their state, so they can be spawned directly.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use crate::error::CardError;
use crate::exporter::{ExportOutcome, Exporter};
use crate::notify::NotificationCenter;
use crate::photo::read_local;
use crate::profile::{PhotoRef, ProfileEdit};
use crate::store::CardStore;

#[derive(Debug, Clone)]
pub struct CardActions {
    store: CardStore,
    exporter: Arc<Exporter>,
    notifications: NotificationCenter,
}

impl CardActions {
    pub fn new(store: CardStore, exporter: Arc<Exporter>, notifications: NotificationCenter) -> Self {
        Self {
            store,
            exporter,
            notifications,
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Save the vCard file.
    pub fn download_vcard(&self) -> impl Future<Output = Option<ExportOutcome>> + 'static {
        let this = self.clone();
        let profile = self.store.snapshot();
        async move {
            match this.exporter.download_vcard(&profile).await {
                Ok(outcome) => {
                    if let ExportOutcome::Saved { location, .. } = &outcome {
                        this.notifications.success(format!("Contact saved to {}", location));
                    }
                    Some(outcome)
                }
                Err(e) => this.fail("Could not save contact", e),
            }
        }
    }

    /// Open the standalone card document.
    pub fn open_card(&self) -> impl Future<Output = Option<ExportOutcome>> + 'static {
        let this = self.clone();
        let profile = self.store.snapshot();
        async move {
            this.notifications.info("Creating interactive business card...");
            match this.exporter.open_card(&profile).await {
                Ok(outcome) => {
                    this.notifications.success("Interactive business card opened!");
                    Some(outcome)
                }
                Err(e) => this.fail("Error creating business card", e),
            }
        }
    }

    /// Share through the native sheet, or open the card when that fails.
    pub fn share_card(&self) -> impl Future<Output = Option<ExportOutcome>> + 'static {
        let this = self.clone();
        let profile = self.store.snapshot();
        async move {
            this.notifications.info("Creating interactive business card...");
            match this.exporter.share_card(&profile).await {
                Ok(outcome @ ExportOutcome::Shared { .. }) => {
                    this.notifications.success("Business card shared successfully!");
                    Some(outcome)
                }
                Ok(outcome) => {
                    this.notifications.success("Interactive business card opened!");
                    Some(outcome)
                }
                Err(e) => this.fail("Error creating business card", e),
            }
        }
    }

    pub fn share_whatsapp(&self) -> impl Future<Output = Option<ExportOutcome>> + 'static {
        let this = self.clone();
        let profile = self.store.snapshot();
        async move {
            match this.exporter.share_whatsapp(&profile).await {
                Ok(outcome) => {
                    this.notifications.success("Opening WhatsApp...");
                    Some(outcome)
                }
                Err(e) => this.fail("Could not open WhatsApp", e),
            }
        }
    }

    pub fn copy_share_message(&self) -> impl Future<Output = Option<ExportOutcome>> + 'static {
        let this = self.clone();
        let profile = self.store.snapshot();
        async move {
            match this.exporter.copy_share_message(&profile).await {
                Ok(outcome) => {
                    this.notifications.success("Card details copied to clipboard");
                    Some(outcome)
                }
                Err(e) => this.fail("Could not copy card details", e),
            }
        }
    }

    /// Load a local image as the card photo. The current photo is kept on
    /// failure.
    pub async fn replace_photo(&self, path: &Path) -> bool {
        match read_local(path).await {
            Ok(photo) => {
                self.store.apply(ProfileEdit::Photo(photo));
                self.notifications.success("Photo updated");
                true
            }
            Err(e) => {
                self.fail("Could not load photo", e);
                false
            }
        }
    }

    /// Use a remote image or `data:` URL as the card photo.
    pub fn set_photo_url(&self, src: &str) -> bool {
        match PhotoRef::parse(src) {
            Ok(photo) => {
                self.store.apply(ProfileEdit::Photo(photo));
                true
            }
            Err(e) => {
                self.fail("Could not use photo", e);
                false
            }
        }
    }

    fn fail(&self, context: &str, err: CardError) -> Option<ExportOutcome> {
        match &err {
            CardError::InvalidProfile(_) | CardError::PhotoReadFailure(_) => {
                tracing::warn!("{}: {}", context, err);
            }
            _ => tracing::error!("{}: {}", context, err),
        }
        self.notifications.error(format!("{}: {}", context, err));
        None
    }
}
