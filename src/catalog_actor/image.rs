//! Uploaded dish images, stored inline as `data:` URLs.
//!
//! No size limit is applied: every byte ends up inside the persisted inventory.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Raw image bytes as uploaded, with their MIME type.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(content_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Encodes the upload so it can be embedded directly by a display surface.
    pub fn to_data_url(&self) -> String {
        let content_type = match self.content_type.trim() {
            "" => "application/octet-stream",
            t => t,
        };
        format!("data:{};base64,{}", content_type, STANDARD.encode(&self.bytes))
    }
}
