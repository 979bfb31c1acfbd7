use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Raw image bytes plus their MIME type, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    data: Bytes,
    mime_type: String,
}

impl ImagePayload {
    /// Falls back to JPEG when no MIME type is given.
    pub fn new(data: impl Into<Bytes>, mime_type: Option<&str>) -> Result<Self, CoreError> {
        let data = data.into();
        if data.is_empty() {
            return Err(CoreError::Invalid);
        }

        let mime_type = match mime_type.map(str::trim) {
            None | Some("") | Some("application/octet-stream") => {
                DEFAULT_IMAGE_MIME_TYPE.to_string()
            }
            Some(mime) if mime.starts_with("image/") => mime.to_string(),
            Some(_) => return Err(CoreError::Invalid),
        };

        Ok(Self { data, mime_type })
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
