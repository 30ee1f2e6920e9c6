//! File-backed image editor.
//!
//! Reads an image chosen by the host, encodes it as a `data:` URL, persists it
//! through the record service and only then completes the handle it was
//! opened with. The profile view never uploads the avatar itself.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use vitae_core::avatar::{AvatarCompletion, EncodedImage, ImageEditor};
use vitae_core::error::{Result, VitaeError};
use vitae_core::user::{Identity, UserRecordService};

/// Largest image the editor accepts.
pub const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

struct PendingEdit {
    identity: Identity,
    completion: AvatarCompletion,
}

/// Image editor that takes its input from files on disk.
///
/// `open` only remembers the pending edit; the host later calls
/// [`FileImageEditor::submit`] with a path, or [`FileImageEditor::dismiss`].
#[derive(Clone)]
pub struct FileImageEditor {
    service: Arc<dyn UserRecordService>,
    pending: Arc<Mutex<Option<PendingEdit>>>,
}

impl FileImageEditor {
    pub fn new(service: Arc<dyn UserRecordService>) -> Self {
        Self {
            service,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Whether an edit is waiting for input.
    pub fn is_open(&self) -> bool {
        self.pending.lock().map(|p| p.is_some()).unwrap_or(false)
    }

    /// Drops the pending edit without completing it.
    pub fn dismiss(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.take();
        }
    }

    /// Encodes the file at `path`, uploads it, and completes the pending edit.
    ///
    /// On failure the edit stays pending so the user can pick another file.
    pub async fn submit(&self, path: impl AsRef<Path>) -> Result<EncodedImage> {
        let identity = self
            .pending
            .lock()
            .map_err(|e| VitaeError::internal(e.to_string()))?
            .as_ref()
            .map(|p| p.identity)
            .ok_or_else(|| VitaeError::image_editor("no image edit is open"))?;

        let image = Self::encode_file(path.as_ref()).await?;
        self.service.upload_avatar(identity, &image).await?;
        tracing::info!("[FileImageEditor] Avatar uploaded for user {}", identity);

        let pending = self
            .pending
            .lock()
            .map_err(|e| VitaeError::internal(e.to_string()))?
            .take();
        if let Some(pending) = pending {
            pending.completion.complete(image.clone());
        }

        Ok(image)
    }

    /// Reads an image file and encodes it as a `data:` URL.
    pub async fn encode_file(path: &Path) -> Result<EncodedImage> {
        let mime = mime_guess::from_path(path).first().ok_or_else(|| {
            VitaeError::image_editor(format!("unknown image type: {}", path.display()))
        })?;
        if mime.type_() != mime_guess::mime::IMAGE {
            return Err(VitaeError::image_editor(format!(
                "{} is not an image ({})",
                path.display(),
                mime
            )));
        }

        let bytes = tokio::fs::read(path).await?;
        if bytes.len() > MAX_AVATAR_BYTES {
            return Err(VitaeError::image_editor(format!(
                "{} exceeds {} bytes",
                path.display(),
                MAX_AVATAR_BYTES
            )));
        }

        Ok(EncodedImage::from_bytes(mime.essence_str(), &bytes))
    }

    pub fn pending_identity(&self) -> Option<Identity> {
        self.pending
            .lock()
            .ok()
            .and_then(|p| p.as_ref().map(|p| p.identity))
    }
}

impl ImageEditor for FileImageEditor {
    fn open(&self, identity: Identity, completion: AvatarCompletion) {
        tracing::debug!("[FileImageEditor] Opened for user {}", identity);
        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some(PendingEdit {
                identity,
                completion,
            });
        }
    }
}

impl std::fmt::Debug for FileImageEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileImageEditor")
            .field("pending", &self.pending_identity())
            .finish()
    }
}

/// Convenience for hosts that keep paths as strings.
pub fn expand_path(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tempfile::TempDir;
    use vitae_core::user::{EditDraft, UserRecord};

    #[derive(Default)]
    struct RecordingService {
        uploads: Mutex<Vec<(Identity, EncodedImage)>>,
        fail: bool,
    }

    #[async_trait]
    impl UserRecordService for RecordingService {
        async fn fetch_record(&self, identity: Identity) -> Result<UserRecord> {
            Err(VitaeError::not_found("user", identity.to_string()))
        }

        async fn update_record(&self, _identity: Identity, _draft: &EditDraft) -> Result<()> {
            Ok(())
        }

        async fn upload_avatar(&self, identity: Identity, avatar: &EncodedImage) -> Result<()> {
            if self.fail {
                return Err(VitaeError::http(500, None));
            }
            self.uploads.lock().unwrap().push((identity, avatar.clone()));
            Ok(())
        }
    }

    fn write_png(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("avatar.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();
        path
    }

    #[tokio::test]
    async fn test_submit_uploads_then_completes() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_png(&temp_dir);
        let service = Arc::new(RecordingService::default());
        let editor = FileImageEditor::new(service.clone());

        let received = Arc::new(Mutex::new(None));
        let sink = received.clone();
        editor.open(
            Identity(4),
            AvatarCompletion::new(move |image| *sink.lock().unwrap() = Some(image)),
        );
        assert!(editor.is_open());

        let image = editor.submit(&path).await.unwrap();

        assert!(image.as_str().starts_with("data:image/png;base64,"));
        assert_eq!(service.uploads.lock().unwrap()[0].0, Identity(4));
        assert_eq!(received.lock().unwrap().as_ref(), Some(&image));
        assert!(!editor.is_open());
    }

    #[tokio::test]
    async fn test_failed_upload_keeps_edit_pending() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_png(&temp_dir);
        let service = Arc::new(RecordingService {
            fail: true,
            ..Default::default()
        });
        let editor = FileImageEditor::new(service);
        editor.open(Identity(4), AvatarCompletion::new(|_| panic!("must not complete")));

        assert!(editor.submit(&path).await.is_err());
        assert!(editor.is_open());
    }

    #[tokio::test]
    async fn test_rejects_non_images() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = FileImageEditor::encode_file(&path).await.unwrap_err();
        assert!(matches!(err, VitaeError::ImageEditor(_)));
    }

    #[tokio::test]
    async fn test_submit_without_open_fails() {
        let editor = FileImageEditor::new(Arc::new(RecordingService::default()));
        assert!(editor.submit("missing.png").await.is_err());
    }

    #[test]
    fn test_dismiss_clears_pending() {
        let editor = FileImageEditor::new(Arc::new(RecordingService::default()));
        editor.open(Identity(1), AvatarCompletion::new(|_| {}));
        editor.dismiss();
        assert!(!editor.is_open());
    }
}
