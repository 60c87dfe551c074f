use std::path::Path;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::error::AppError;

const UNKNOWN_MIME: &str = "application/octet-stream";

/// A file the user picked or dropped, before it is accepted as a scan.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let bytes = std::fs::read(path).map_err(|e| AppError::Read(e, path.to_path_buf()))?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::from_bytes(name, bytes))
    }

    /// The MIME type is sniffed from the leading bytes, never the file name.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        Self {
            name: name.into(),
            mime: sniff_mime(&bytes).to_string(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MIME)
}

/// Image reference owned by the controller for the lifetime of one scan.
#[derive(Debug)]
pub struct ImageHandle {
    id: Uuid,
    name: String,
    mime: String,
    bytes: Arc<[u8]>,
}

/// What the classification service receives for a scan.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl ImageHandle {
    pub fn acquire(file: SelectedFile) -> Self {
        let handle = Self {
            id: Uuid::new_v4(),
            name: file.name,
            mime: file.mime,
            bytes: file.bytes,
        };
        debug!(
            "Acquired image {} ({}, {}, {} bytes)",
            handle.id,
            handle.name,
            handle.mime,
            handle.bytes.len()
        );
        handle
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }

    /// Key under which the decoded preview lives in the egui image cache.
    pub fn preview_uri(&self) -> String {
        format!("bytes://auralens/{}", self.id)
    }

    pub fn upload(&self) -> ImageUpload {
        ImageUpload {
            file_name: self.name.clone(),
            mime: self.mime.clone(),
            bytes: Arc::clone(&self.bytes),
        }
    }
}

impl Drop for ImageHandle {
    fn drop(&mut self) {
        debug!("Released image {} ({})", self.id, self.name);
    }
}
