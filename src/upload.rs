use crate::error::UploadError;

/// Base64 image payload extracted from a browser data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    content: String,
    media_type: Option<String>,
}

impl ImageUpload {
    /// Parses `data:<media type>;base64,<payload>`. The payload is forwarded as is.
    pub fn from_data_url(data_url: &str) -> Result<Self, UploadError> {
        let (header, payload) = data_url
            .split_once(',')
            .ok_or(UploadError::NotADataUrl)?;
        let payload = payload.trim();
        if payload.is_empty() {
            return Err(UploadError::EmptyPayload);
        }

        let media_type = header
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .filter(|media| !media.is_empty())
            .map(str::to_string);

        Ok(Self {
            content: payload.to_string(),
            media_type,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
