//! Photo loading and embedding.
//!
//! Local files are read fully into memory and sniffed as images. Remote photos
//! are fetched through an injected [`PhotoFetcher`] when a self-contained
//! document is needed.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::{CardError, CardResult};
use crate::profile::{EmbeddedPhoto, PhotoRef};

/// Largest photo accepted from disk or network.
pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

/// Extensions offered by the photo picker.
pub const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Fetches the bytes behind a remote photo URL.
#[async_trait]
pub trait PhotoFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> CardResult<Vec<u8>>;
}

/// HTTP fetcher backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpPhotoFetcher {
    client: reqwest::Client,
}

impl HttpPhotoFetcher {
    pub fn new() -> CardResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| CardError::PhotoReadFailure(format!("HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PhotoFetcher for HttpPhotoFetcher {
    async fn fetch(&self, url: &Url) -> CardResult<Vec<u8>> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| CardError::PhotoReadFailure(format!("fetch {}: {}", url, e)))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CardError::PhotoReadFailure(format!("read {}: {}", url, e)))?;
        Ok(bytes.to_vec())
    }
}

/// Identify image bytes and wrap them with their MIME type.
pub fn sniff_image(data: Vec<u8>) -> CardResult<EmbeddedPhoto> {
    if data.is_empty() {
        return Err(CardError::PhotoReadFailure("file is empty".to_string()));
    }
    if data.len() > MAX_PHOTO_BYTES {
        return Err(CardError::PhotoReadFailure(format!(
            "photo is {} bytes, limit is {}",
            data.len(),
            MAX_PHOTO_BYTES
        )));
    }

    if let Ok(format) = image::guess_format(&data) {
        return Ok(EmbeddedPhoto::new(format.to_mime_type(), data));
    }
    if looks_like_svg(&data) {
        return Ok(EmbeddedPhoto::new("image/svg+xml", data));
    }
    Err(CardError::PhotoReadFailure("not a supported image".to_string()))
}

fn looks_like_svg(data: &[u8]) -> bool {
    let head = String::from_utf8_lossy(&data[..data.len().min(512)]);
    let head = head.trim_start();
    (head.starts_with("<svg") || head.starts_with("<?xml")) && head.contains("<svg")
}

/// Read a local image file into an embedded photo.
pub async fn read_local(path: &Path) -> CardResult<PhotoRef> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| CardError::PhotoReadFailure(format!("{}: {}", path.display(), e)))?;
    let photo = sniff_image(data)?;
    tracing::info!(path = %path.display(), mime = %photo.mime, "Loaded local photo");
    Ok(PhotoRef::Embedded(photo))
}

/// Resolve a photo to embedded bytes, fetching remote references.
pub async fn embed_photo(photo: &PhotoRef, fetcher: &dyn PhotoFetcher) -> CardResult<EmbeddedPhoto> {
    match photo {
        PhotoRef::Embedded(embedded) => Ok(embedded.clone()),
        PhotoRef::Remote(url) => {
            let data = fetcher.fetch(url).await?;
            let embedded = sniff_image(data)?;
            tracing::debug!(%url, mime = %embedded.mime, "Embedded remote photo");
            Ok(embedded)
        }
    }
}
