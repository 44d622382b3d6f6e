//! Transient object URLs for exported bytes.
//!
//! An export registers its bytes, hands the resulting [`ObjectUrl`] to the
//! host, and drops it afterwards. Dropping revokes the registration, so an
//! early return or error between creation and hand-off cannot leak the bytes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use ulid::Ulid;

/// Scheme prefix of every object URL
pub const OBJECT_URL_PREFIX: &str = "blob:bizcard/";

/// Bytes plus their MIME type.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob {
    pub mime: String,
    pub data: Arc<[u8]>,
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("mime", &self.mime)
            .field("len", &self.data.len())
            .finish()
    }
}

/// In-memory registry of live object URLs.
#[derive(Debug, Clone, Default)]
pub struct BlobRegistry {
    blobs: Arc<Mutex<HashMap<String, Blob>>>,
}

impl BlobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bytes and return a guard that revokes them on drop.
    pub fn create(&self, data: impl Into<Arc<[u8]>>, mime: impl Into<String>) -> ObjectUrl {
        let url = format!("{}{}", OBJECT_URL_PREFIX, Ulid::new());
        let blob = Blob {
            mime: mime.into(),
            data: data.into(),
        };
        tracing::debug!(%url, mime = %blob.mime, len = blob.data.len(), "Created object URL");
        self.blobs.lock().insert(url.clone(), blob);
        ObjectUrl {
            url,
            registry: self.clone(),
        }
    }

    pub fn resolve(&self, url: &str) -> Option<Blob> {
        self.blobs.lock().get(url).cloned()
    }

    fn revoke(&self, url: &str) {
        if self.blobs.lock().remove(url).is_some() {
            tracing::debug!(%url, "Revoked object URL");
        }
    }

    /// Number of live object URLs.
    pub fn live_count(&self) -> usize {
        self.blobs.lock().len()
    }
}

/// A live object URL. Revoked when dropped.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
    registry: BlobRegistry,
}

impl ObjectUrl {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The registered bytes. Always `Some` while the guard is alive.
    pub fn blob(&self) -> Option<Blob> {
        self.registry.resolve(&self.url)
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        self.registry.revoke(&self.url);
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
