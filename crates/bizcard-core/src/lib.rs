//! bizcard Core Library
//!
//! Editable digital business card: profile state, vCard and QR generation,
//! and export of a standalone HTML card.
//!
//! ## Overview
//!
//! The pipeline has three parts:
//!
//! - **State store** ([`CardStore`]): the editable [`CardProfile`] and the
//!   view mode, replaced wholesale on every edit
//! - **Artifact generator** ([`ArtifactGenerator`]): a [`VCardPayload`] and a
//!   scannable QR [`CodePattern`] (EC level M, byte mode)
//! - **Exporter** ([`Exporter`]): vCard download, standalone document, native
//!   share with document fallback, WhatsApp deep link
//!
//! [`CardActions`] sits on top and turns every outcome into a
//! [`Notification`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use bizcard_core::{ArtifactGenerator, CardProfile};
//!
//! let profile = CardProfile {
//!     name: "Jane Doe".to_string(),
//!     ..Default::default()
//! };
//! let artifacts = ArtifactGenerator::default().generate(&profile)?;
//! println!("{}", artifacts.vcard);
//! ```

pub mod actions;
pub mod blob;
pub mod code;
pub mod document;
pub mod error;
pub mod exporter;
pub mod generator;
pub mod notify;
pub mod photo;
pub mod profile;
pub mod share;
pub mod store;
pub mod vcard;

// Re-exports
pub use actions::CardActions;
pub use blob::{Blob, BlobRegistry, ObjectUrl};
pub use code::{CodeEncoder, CodePattern, CodeStyle, QrEncoder};
pub use document::{document_filename, vcard_filename, CardDocument};
pub use error::{CardError, CardResult};
pub use exporter::{ExportHost, ExportOutcome, Exporter};
pub use generator::{ArtifactGenerator, Artifacts};
pub use notify::{Notification, NotificationCenter, NotificationKind};
pub use photo::{HttpPhotoFetcher, PhotoFetcher};
pub use profile::{CardProfile, EmbeddedPhoto, PhotoRef, ProfileEdit, SocialPlatform, ViewMode};
pub use share::{ShareRequest, ShareSheet, UnsupportedShareSheet};
pub use store::CardStore;
pub use vcard::VCardPayload;
