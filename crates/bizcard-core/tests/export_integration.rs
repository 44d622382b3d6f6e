//! Integration tests for the export pipeline
//!
//! Drives `CardActions` end to end against an in-memory host, share sheet
//! and photo fetcher, checking side effects, notifications and object URL
//! cleanup.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bizcard_core::{
    ArtifactGenerator, CardActions, CardError, CardProfile, CardResult, CardStore, ExportHost,
    ExportOutcome, Exporter, NotificationCenter, NotificationKind, ObjectUrl, PhotoFetcher,
    PhotoRef, ProfileEdit, ShareRequest, ShareSheet, UnsupportedShareSheet,
};
use url::Url;

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

// ============================================================================
// Test Doubles
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum HostEvent {
    Saved { filename: String, mime: String, content: String },
    Opened { filename: String, mime: String, html: String },
    Link(String),
    Copied(String),
}

/// Host that records every effect, optionally slowly or failing to open.
#[derive(Default)]
struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
    delay: Option<Duration>,
    fail_open: bool,
}

impl RecordingHost {
    fn events(&self) -> Vec<HostEvent> {
        self.events.lock().unwrap().clone()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ExportHost for RecordingHost {
    async fn save_file(&self, url: &ObjectUrl, filename: &str) -> CardResult<String> {
        let blob = url.blob().expect("object URL must be live during save");
        self.pause().await;
        self.events.lock().unwrap().push(HostEvent::Saved {
            filename: filename.to_string(),
            mime: blob.mime.clone(),
            content: String::from_utf8(blob.data.to_vec()).unwrap(),
        });
        Ok(format!("/downloads/{}", filename))
    }

    async fn open_document(&self, url: &ObjectUrl, filename: &str) -> CardResult<()> {
        if self.fail_open {
            return Err(CardError::ExportFailure("no browser".to_string()));
        }
        let blob = url.blob().expect("object URL must be live during open");
        self.pause().await;
        self.events.lock().unwrap().push(HostEvent::Opened {
            filename: filename.to_string(),
            mime: blob.mime.clone(),
            html: String::from_utf8(blob.data.to_vec()).unwrap(),
        });
        Ok(())
    }

    async fn open_url(&self, url: &str) -> CardResult<()> {
        self.events.lock().unwrap().push(HostEvent::Link(url.to_string()));
        Ok(())
    }

    async fn copy_text(&self, text: &str) -> CardResult<()> {
        self.events.lock().unwrap().push(HostEvent::Copied(text.to_string()));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum ShareBehavior {
    Succeed,
    Cancel,
    Reject,
}

/// Share sheet that is available and reacts as scripted.
struct ScriptedShareSheet {
    behavior: ShareBehavior,
    requests: Mutex<Vec<(String, String, String)>>,
}

impl ScriptedShareSheet {
    fn new(behavior: ShareBehavior) -> Self {
        Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ShareSheet for ScriptedShareSheet {
    fn is_available(&self) -> bool {
        true
    }

    async fn share(&self, request: ShareRequest<'_>) -> CardResult<()> {
        let file = &request.files[0];
        assert!(file.url.blob().is_some());
        self.requests.lock().unwrap().push((
            request.title.clone(),
            file.filename.clone(),
            file.mime.clone(),
        ));
        match self.behavior {
            ShareBehavior::Succeed => Ok(()),
            ShareBehavior::Cancel => Err(CardError::ShareCancelled),
            ShareBehavior::Reject => Err(CardError::ExportFailure("permission denied".into())),
        }
    }
}

struct StaticFetcher(Option<Vec<u8>>);

#[async_trait]
impl PhotoFetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> CardResult<Vec<u8>> {
        self.0
            .clone()
            .ok_or_else(|| CardError::PhotoReadFailure(format!("{} unreachable", url)))
    }
}

// ============================================================================
// Test Utilities
// ============================================================================

fn jane() -> CardProfile {
    CardProfile {
        name: "Jane Doe".to_string(),
        phone: "+1 555-0100".to_string(),
        website: "example.com".to_string(),
        business: "Acme, Beta Corp".to_string(),
        ..Default::default()
    }
}

fn actions_with(
    profile: CardProfile,
    host: Arc<RecordingHost>,
    sheet: Arc<dyn ShareSheet>,
    fetcher: Arc<dyn PhotoFetcher>,
) -> CardActions {
    let exporter = Exporter::new(ArtifactGenerator::default(), host, sheet, fetcher);
    CardActions::new(
        CardStore::new(profile),
        Arc::new(exporter),
        NotificationCenter::default(),
    )
}

fn actions(profile: CardProfile, host: Arc<RecordingHost>) -> CardActions {
    actions_with(
        profile,
        host,
        Arc::new(UnsupportedShareSheet),
        Arc::new(StaticFetcher(None)),
    )
}

fn assert_notified(actions: &CardActions, kind: NotificationKind, contains: &str) {
    let current = actions.notifications().current().expect("a notification");
    assert_eq!(current.kind, kind, "unexpected notification: {:?}", current);
    assert!(
        current.message.contains(contains),
        "{:?} does not contain {:?}",
        current.message,
        contains
    );
}

// ============================================================================
// vCard Download Tests
// ============================================================================

#[tokio::test]
async fn test_download_vcard_writes_contact_file() {
    let host = Arc::new(RecordingHost::default());
    let actions = actions(jane(), host.clone());

    let outcome = actions.download_vcard().await;

    assert_eq!(
        outcome,
        Some(ExportOutcome::Saved {
            filename: "Jane_Doe_Contact.vcf".to_string(),
            location: "/downloads/Jane_Doe_Contact.vcf".to_string(),
        })
    );
    let events = host.events();
    assert_eq!(events.len(), 1);
    let HostEvent::Saved { filename, mime, content } = &events[0] else {
        panic!("expected a saved file, got {:?}", events[0]);
    };
    assert_eq!(filename, "Jane_Doe_Contact.vcf");
    assert_eq!(mime, "text/vcard");
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines.contains(&"FN:Jane Doe"));
    assert!(lines.contains(&"ORG:Acme, Beta Corp"));
    assert!(lines.contains(&"TEL:+1 555-0100"));
    assert!(lines.contains(&"URL:example.com"));

    assert_eq!(actions.exporter().blobs().live_count(), 0);
    assert_notified(&actions, NotificationKind::Success, "Jane_Doe_Contact.vcf");
}

#[tokio::test]
async fn test_empty_name_has_no_side_effects() {
    let host = Arc::new(RecordingHost::default());
    let profile = CardProfile {
        name: String::new(),
        ..jane()
    };
    let actions = actions(profile, host.clone());

    assert!(actions.download_vcard().await.is_none());
    assert_notified(&actions, NotificationKind::Error, "Invalid profile");
    assert!(actions.open_card().await.is_none());
    assert!(actions.share_card().await.is_none());
    assert!(actions.share_whatsapp().await.is_none());
    assert!(actions.copy_share_message().await.is_none());

    assert!(host.events().is_empty());
    assert_eq!(actions.exporter().blobs().live_count(), 0);
    assert_notified(&actions, NotificationKind::Error, "Invalid profile");
}

// ============================================================================
// Document / Share Tests
// ============================================================================

#[tokio::test]
async fn test_open_card_opens_self_contained_document() {
    let host = Arc::new(RecordingHost::default());
    let actions = actions(jane(), host.clone());

    let outcome = actions.open_card().await;

    assert_eq!(
        outcome,
        Some(ExportOutcome::Opened {
            filename: "Jane-Doe-card.html".to_string()
        })
    );
    let events = host.events();
    let HostEvent::Opened { filename, mime, html } = &events[0] else {
        panic!("expected an opened document, got {:?}", events[0]);
    };
    assert_eq!(filename, "Jane-Doe-card.html");
    assert_eq!(mime, "text/html");
    assert!(html.contains("Jane Doe"));
    assert!(html.contains("<svg"));
    assert!(html.contains("saveContact()"));
    assert_eq!(actions.exporter().blobs().live_count(), 0);
    assert_notified(&actions, NotificationKind::Success, "opened");
}

#[tokio::test]
async fn test_share_unavailable_falls_back_to_open() {
    let host = Arc::new(RecordingHost::default());
    let actions = actions(jane(), host.clone());

    let outcome = actions.share_card().await;

    assert_eq!(
        outcome,
        Some(ExportOutcome::OpenedFallback {
            filename: "Jane-Doe-card.html".to_string()
        })
    );
    assert!(matches!(host.events()[0], HostEvent::Opened { .. }));
    assert_notified(&actions, NotificationKind::Success, "Interactive business card opened!");
    assert_eq!(actions.exporter().blobs().live_count(), 0);
}

#[tokio::test]
async fn test_share_cancelled_falls_back_to_open() {
    let host = Arc::new(RecordingHost::default());
    let sheet = Arc::new(ScriptedShareSheet::new(ShareBehavior::Cancel));
    let actions = actions_with(jane(), host.clone(), sheet.clone(), Arc::new(StaticFetcher(None)));

    let outcome = actions.share_card().await;

    assert!(matches!(outcome, Some(ExportOutcome::OpenedFallback { .. })));
    assert_eq!(sheet.requests.lock().unwrap().len(), 1);
    assert_eq!(host.events().len(), 1);
    assert_notified(&actions, NotificationKind::Success, "opened");
}

#[tokio::test]
async fn test_share_rejected_falls_back_to_open() {
    let host = Arc::new(RecordingHost::default());
    let sheet = Arc::new(ScriptedShareSheet::new(ShareBehavior::Reject));
    let actions = actions_with(jane(), host.clone(), sheet, Arc::new(StaticFetcher(None)));

    let outcome = actions.share_card().await;

    assert!(matches!(outcome, Some(ExportOutcome::OpenedFallback { .. })));
    assert_notified(&actions, NotificationKind::Success, "opened");
}

#[tokio::test]
async fn test_native_share_success() {
    let host = Arc::new(RecordingHost::default());
    let sheet = Arc::new(ScriptedShareSheet::new(ShareBehavior::Succeed));
    let actions = actions_with(jane(), host.clone(), sheet.clone(), Arc::new(StaticFetcher(None)));

    let outcome = actions.share_card().await;

    assert_eq!(
        outcome,
        Some(ExportOutcome::Shared {
            filename: "Jane-Doe-card.html".to_string()
        })
    );
    assert!(host.events().is_empty());
    assert_eq!(
        sheet.requests.lock().unwrap()[0],
        (
            "Jane Doe - Business Card".to_string(),
            "Jane-Doe-card.html".to_string(),
            "text/html".to_string()
        )
    );
    assert_notified(&actions, NotificationKind::Success, "shared successfully");
    assert_eq!(actions.exporter().blobs().live_count(), 0);
}

#[tokio::test]
async fn test_host_failure_releases_object_url() {
    let host = Arc::new(RecordingHost {
        fail_open: true,
        ..Default::default()
    });
    let actions = actions(jane(), host.clone());

    assert!(actions.share_card().await.is_none());
    assert!(actions.open_card().await.is_none());

    assert_eq!(actions.exporter().blobs().live_count(), 0);
    assert_notified(&actions, NotificationKind::Error, "Export failed");
}

// ============================================================================
// Photo Embedding Tests
// ============================================================================

#[tokio::test]
async fn test_remote_photo_is_embedded_in_document() {
    let host = Arc::new(RecordingHost::default());
    let profile = CardProfile {
        photo: PhotoRef::parse("https://example.com/jane.png").unwrap(),
        ..jane()
    };
    let actions = actions_with(
        profile,
        host.clone(),
        Arc::new(UnsupportedShareSheet),
        Arc::new(StaticFetcher(Some(PNG_MAGIC.to_vec()))),
    );

    actions.open_card().await.unwrap();

    let HostEvent::Opened { html, .. } = &host.events()[0] else {
        panic!("expected an opened document");
    };
    assert!(html.contains("data:image/png;base64,"));
    assert!(!html.contains("https://example.com/jane.png"));
    // The store still holds the remote reference.
    assert!(!actions.store().snapshot().photo.is_embedded());
}

#[tokio::test]
async fn test_unreachable_remote_photo_fails_export() {
    let host = Arc::new(RecordingHost::default());
    let profile = CardProfile {
        photo: PhotoRef::parse("https://example.com/jane.png").unwrap(),
        ..jane()
    };
    let actions = actions(profile, host.clone());

    assert!(actions.open_card().await.is_none());
    assert!(host.events().is_empty());
    assert_notified(&actions, NotificationKind::Error, "Photo read failed");

    // vCard export does not need the photo.
    assert!(actions.download_vcard().await.is_some());
}

#[tokio::test]
async fn test_replace_photo_failure_keeps_previous_photo() {
    let host = Arc::new(RecordingHost::default());
    let actions = actions(jane(), host);
    let before = actions.store().snapshot().photo.clone();

    let dir = tempfile::tempdir().unwrap();
    let text_file = dir.path().join("notes.png");
    std::fs::write(&text_file, b"definitely not an image").unwrap();

    assert!(!actions.replace_photo(&text_file).await);
    assert_eq!(actions.store().snapshot().photo, before);
    assert_notified(&actions, NotificationKind::Error, "Could not load photo");

    let png_file = dir.path().join("me.png");
    std::fs::write(&png_file, PNG_MAGIC).unwrap();
    assert!(actions.replace_photo(&png_file).await);
    assert_ne!(actions.store().snapshot().photo, before);
}

// ============================================================================
// Messaging Tests
// ============================================================================

#[tokio::test]
async fn test_whatsapp_share_opens_deep_link() {
    let host = Arc::new(RecordingHost::default());
    let actions = actions(jane(), host.clone());

    let outcome = actions.share_whatsapp().await.unwrap();

    let ExportOutcome::LinkOpened { url } = outcome else {
        panic!("expected a link");
    };
    assert!(url.starts_with("https://wa.me/send?text="));
    assert_eq!(host.events(), vec![HostEvent::Link(url)]);
    assert_eq!(actions.exporter().blobs().live_count(), 0);
}

#[tokio::test]
async fn test_copy_share_message() {
    let host = Arc::new(RecordingHost::default());
    let actions = actions(jane(), host.clone());

    assert_eq!(actions.copy_share_message().await, Some(ExportOutcome::Copied));
    let HostEvent::Copied(text) = &host.events()[0] else {
        panic!("expected clipboard text");
    };
    assert!(text.contains("Business: Acme"));
}

// ============================================================================
// Snapshot Consistency Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_rapid_exports_use_their_own_snapshots() {
    let host = Arc::new(RecordingHost {
        delay: Some(Duration::from_millis(50)),
        ..Default::default()
    });
    let actions = actions(jane(), host.clone());

    let first = actions.download_vcard();
    actions.store().apply(ProfileEdit::Name("John Roe".to_string()));
    actions.store().apply(ProfileEdit::Phone("+1 555-0199".to_string()));
    let second = actions.download_vcard();

    let (a, b) = tokio::join!(first, second);
    assert!(a.is_some() && b.is_some());

    let saved: Vec<(String, String)> = host
        .events()
        .into_iter()
        .filter_map(|e| match e {
            HostEvent::Saved { filename, content, .. } => Some((filename, content)),
            _ => None,
        })
        .collect();
    assert_eq!(saved.len(), 2);

    let jane_file = saved.iter().find(|(f, _)| f == "Jane_Doe_Contact.vcf").unwrap();
    assert!(jane_file.1.contains("FN:Jane Doe"));
    assert!(jane_file.1.contains("TEL:+1 555-0100"));

    let john_file = saved.iter().find(|(f, _)| f == "John_Roe_Contact.vcf").unwrap();
    assert!(john_file.1.contains("FN:John Roe"));
    assert!(john_file.1.contains("TEL:+1 555-0199"));

    assert_eq!(actions.exporter().blobs().live_count(), 0);
}
