//! Desktop implementation of the export host.
//!
//! vCards are written to the downloads directory. Documents are written to a
//! per-session temporary directory and opened with the system handler.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use bizcard_core::{Blob, CardError, CardResult, ExportHost, ObjectUrl};
use tempfile::TempDir;
use tokio::io::AsyncWriteExt;

pub struct DesktopHost {
    downloads_dir: PathBuf,
    session_dir: TempDir,
    opened: AtomicU64,
}

impl DesktopHost {
    pub fn new(downloads_dir: PathBuf) -> CardResult<Self> {
        let session_dir = tempfile::Builder::new().prefix("bizcard-").tempdir()?;
        tracing::debug!(path = %session_dir.path().display(), "Created session directory");
        Ok(Self {
            downloads_dir,
            session_dir,
            opened: AtomicU64::new(0),
        })
    }

    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }

    pub fn session_dir(&self) -> &Path {
        self.session_dir.path()
    }

    /// Write a document into its own directory under the session dir, so a
    /// later open can never replace what an earlier one is showing.
    async fn stage_document(&self, url: &ObjectUrl, filename: &str) -> CardResult<PathBuf> {
        let blob = blob_of(url)?;
        let n = self.opened.fetch_add(1, Ordering::Relaxed);
        let dir = self.session_dir.path().join(n.to_string());
        tokio::fs::create_dir(&dir).await?;
        let path = dir.join(filename);
        tokio::fs::write(&path, &blob.data[..]).await?;
        Ok(path)
    }
}

fn blob_of(url: &ObjectUrl) -> CardResult<Blob> {
    url.blob()
        .ok_or_else(|| CardError::ExportFailure(format!("{} was revoked", url.as_str())))
}

#[async_trait]
impl ExportHost for DesktopHost {
    async fn save_file(&self, url: &ObjectUrl, filename: &str) -> CardResult<String> {
        let blob = blob_of(url)?;
        tokio::fs::create_dir_all(&self.downloads_dir).await?;
        let (path, mut file) = create_unique(&self.downloads_dir, filename).await?;
        file.write_all(&blob.data[..]).await?;
        file.flush().await?;
        Ok(path.display().to_string())
    }

    async fn open_document(&self, url: &ObjectUrl, filename: &str) -> CardResult<()> {
        let path = self.stage_document(url, filename).await?;
        launch(path.as_os_str())
    }

    async fn open_url(&self, url: &str) -> CardResult<()> {
        launch(OsStr::new(url))
    }

    async fn copy_text(&self, text: &str) -> CardResult<()> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| CardError::ExportFailure(format!("clipboard unavailable: {}", e)))?;
            clipboard
                .set_text(text)
                .map_err(|e| CardError::ExportFailure(format!("clipboard write failed: {}", e)))
        })
        .await
        .map_err(|e| CardError::ExportFailure(format!("clipboard task failed: {}", e)))?
    }
}

/// Candidate names for `filename` in order: `stem.ext`, `stem (1).ext`, ...
fn candidate_name(filename: &str, n: u32) -> String {
    if n == 0 {
        return filename.to_string();
    }
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{} ({}).{}", stem, n, ext),
        _ => format!("{} ({})", filename, n),
    }
}

/// Create `dir/filename`, or the first free `dir/stem (n).ext`.
///
/// Each candidate is created with `create_new`, so concurrent callers never
/// end up holding the same file.
async fn create_unique(dir: &Path, filename: &str) -> CardResult<(PathBuf, tokio::fs::File)> {
    for n in 0..=u32::MAX {
        let candidate = dir.join(candidate_name(filename, n));
        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
            .await
        {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Err(CardError::ExportFailure(format!(
        "no free file name for {} in {}",
        filename,
        dir.display()
    )))
}

/// Hand a file path or URL to the system default handler.
///
/// The handler process is reaped in the background once it exits.
fn launch(target: &OsStr) -> CardResult<()> {
    #[cfg(target_os = "windows")]
    let mut command = tokio::process::Command::new("explorer");
    #[cfg(target_os = "macos")]
    let mut command = tokio::process::Command::new("open");
    #[cfg(all(unix, not(target_os = "macos")))]
    let mut command = tokio::process::Command::new("xdg-open");

    let child = command.arg(target).spawn().map_err(|e| {
        CardError::ExportFailure(format!(
            "failed to open {}: {}",
            target.to_string_lossy(),
            e
        ))
    })?;
    let shown = target.to_string_lossy().into_owned();
    tracing::debug!(target = %shown, "Launched system handler");
    tokio::spawn(reap(child, shown));
    Ok(())
}

/// Wait for a handler process so it does not linger as a zombie.
async fn reap(mut child: tokio::process::Child, target: String) -> Option<ExitStatus> {
    match child.wait().await {
        Ok(status) => {
            if !status.success() {
                tracing::warn!(%target, %status, "System handler exited with an error");
            }
            Some(status)
        }
        Err(e) => {
            tracing::warn!(%target, "Failed to wait on system handler: {}", e);
            None
        }
    }
}
