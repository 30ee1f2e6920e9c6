//! Avatar payloads and the image editor port.
//!
//! Avatars travel inside the user record as `data:` URLs carrying a base64
//! encoded image, not as references to a separate binary resource.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VitaeError};
use crate::user::Identity;

/// An encoded image embedded directly in a record payload.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// Wraps an already encoded payload as received from the backend.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encodes raw image bytes as a `data:<mime>;base64,` URL.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mime type declared by a `data:` URL payload.
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let (header, _) = rest.split_once(',')?;
        header.split(';').next().filter(|mime| !mime.is_empty())
    }

    /// Decodes the image bytes.
    ///
    /// Accepts both `data:` URLs and bare base64 payloads.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let payload = match self.0.strip_prefix("data:") {
            Some(rest) => {
                let (header, data) = rest.split_once(',').ok_or_else(|| {
                    VitaeError::Serialization {
                        format: "data-url".to_string(),
                        message: "missing ',' separator".to_string(),
                    }
                })?;
                if !header.ends_with(";base64") {
                    return Err(VitaeError::Serialization {
                        format: "data-url".to_string(),
                        message: "payload is not base64 encoded".to_string(),
                    });
                }
                data
            }
            None => self.0.as_str(),
        };
        Ok(STANDARD.decode(payload.trim())?)
    }}

// Payloads are large; keep debug output readable.
impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self.0.chars().take(32).collect();
        f.debug_struct("EncodedImage")
            .field("len", &self.0.len())
            .field("preview", &preview)
            .finish()
    }
}

/// Single-use completion handler handed to an image editor.
///
/// Calling [`AvatarCompletion::complete`] delivers the new image back to the
/// view that opened the editor.
pub struct AvatarCompletion {
    on_complete: Box<dyn FnOnce(EncodedImage) + Send>,
}

impl AvatarCompletion {
    pub fn new(on_complete: impl FnOnce(EncodedImage) + Send + 'static) -> Self {
        Self {
            on_complete: Box::new(on_complete),
        }
    }

    pub fn complete(self, image: EncodedImage) {
        (self.on_complete)(image)
    }
}

impl fmt::Debug for AvatarCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvatarCompletion").finish_non_exhaustive()
    }
}

/// External widget that produces a new avatar for a user.
///
/// Persisting the avatar is the editor's own responsibility. The view only
/// supplies the completion handler and shows the editor inside an overlay.
pub trait ImageEditor: Send + Sync {
    /// Opens the editor for `identity`. `completion` is called at most once,
    /// when the user confirms a new image.
    fn open(&self, identity: Identity, completion: AvatarCompletion);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_from_bytes_builds_data_url() {
        let image = EncodedImage::from_bytes("image/png", b"\x89PNG");
        assert!(image.as_str().starts_with("data:image/png;base64,"));
        assert_eq!(image.mime_type(), Some("image/png"));
        assert_eq!(image.decode().unwrap(), b"\x89PNG");
    }

    #[test]
    fn test_decode_bare_base64() {
        let image = EncodedImage::new("aGVsbG8=");
        assert_eq!(image.decode().unwrap(), b"hello");
        assert_eq!(image.mime_type(), None);
    }

    #[test]
    fn test_decode_rejects_non_base64_data_url() {
        let image = EncodedImage::new("data:text/plain,hello");
        assert!(image.decode().is_err());
    }

    #[test]
    fn test_completion_delivers_image() {
        let received = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let completion = AvatarCompletion::new(move |image| {
            *sink.lock().unwrap() = Some(image);
        });

        completion.complete(EncodedImage::new("data:image/jpeg;base64,AAAA"));

        assert_eq!(
            received.lock().unwrap().as_ref().map(|i| i.as_str().to_string()),
            Some("data:image/jpeg;base64,AAAA".to_string())
        );
    }
}
