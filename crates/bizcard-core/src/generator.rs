//! Artifact Generator - vCard payload and QR pattern from a profile snapshot.

use std::sync::Arc;

use crate::code::{CodeEncoder, CodePattern, QrEncoder};
use crate::error::CardResult;
use crate::profile::CardProfile;
use crate::vcard::VCardPayload;

/// Everything derived from one profile snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub vcard: VCardPayload,
    pub code: CodePattern,
}

/// Derives [`Artifacts`] using an injected [`CodeEncoder`].
#[derive(Clone)]
pub struct ArtifactGenerator {
    encoder: Arc<dyn CodeEncoder>,
}

impl Default for ArtifactGenerator {
    fn default() -> Self {
        Self::new(Arc::new(QrEncoder))
    }
}

impl std::fmt::Debug for ArtifactGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactGenerator").finish_non_exhaustive()
    }
}

impl ArtifactGenerator {
    pub fn new(encoder: Arc<dyn CodeEncoder>) -> Self {
        Self { encoder }
    }

    /// Fails with `InvalidProfile` for an empty name, or `CodeEncoding` when
    /// the payload does not fit in a QR symbol.
    pub fn generate(&self, profile: &CardProfile) -> CardResult<Artifacts> {
        let vcard = VCardPayload::from_profile(profile)?;
        let code = self.encoder.encode(vcard.as_bytes())?;
        tracing::debug!(
            bytes = vcard.as_bytes().len(),
            version = code.version(),
            "Generated card artifacts"
        );
        Ok(Artifacts { vcard, code })
    }
}
