use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";
const BASE64_MARKER: &str = ";base64,";

/// Kind of content captured from the clipboard.
///
/// Serialized as the lowercase `type` tag of the snapshot schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipKind {
    Text,
    Html,
    Image,
}

impl ClipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipKind::Text => "text",
            ClipKind::Html => "html",
            ClipKind::Image => "image",
        }
    }
}

impl std::fmt::Display for ClipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One clipboard history entry.
///
/// `content` is the UTF-8 text for [`ClipKind::Text`] and [`ClipKind::Html`];
/// for [`ClipKind::Image`] it is a base64 data URL of the PNG encoding, so two
/// identical images always produce identical content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipItem {
    #[serde(rename = "type")]
    pub kind: ClipKind,
    pub content: String,
}

/// Value-equality key over `(kind, content)` used for dedup and promotion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    kind: ClipKind,
    content: String,
}

impl Fingerprint {
    pub fn kind(&self) -> ClipKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Error)]
pub enum ImagePayloadError {
    #[error("item of kind `{0}` does not carry an image payload")]
    NotAnImage(ClipKind),

    #[error("image content is not a base64 data URL")]
    NotDataUrl,

    #[error("invalid base64 image payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl ClipItem {
    pub fn new(kind: ClipKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(ClipKind::Text, content)
    }

    pub fn html(content: impl Into<String>) -> Self {
        Self::new(ClipKind::Html, content)
    }

    /// Build an image item from PNG bytes.
    pub fn image_png(png: &[u8]) -> Self {
        Self::new(
            ClipKind::Image,
            format!("{PNG_DATA_URL_PREFIX}{}", STANDARD.encode(png)),
        )
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            kind: self.kind,
            content: self.content.clone(),
        }
    }

    /// Compare against a fingerprint without allocating.
    pub fn matches(&self, fingerprint: &Fingerprint) -> bool {
        self.kind == fingerprint.kind && self.content == fingerprint.content
    }

    /// Decode the image bytes carried by a data URL.
    ///
    /// Any `data:<mime>;base64,` prefix is accepted so snapshots written by
    /// other producers stay pasteable.
    pub fn decode_image(&self) -> Result<Vec<u8>, ImagePayloadError> {
        if self.kind != ClipKind::Image {
            return Err(ImagePayloadError::NotAnImage(self.kind));
        }
        let encoded = self
            .content
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(BASE64_MARKER))
            .map(|(_, payload)| payload)
            .ok_or(ImagePayloadError::NotDataUrl)?;
        Ok(STANDARD.decode(encoded)?)
    }

    /// Short, log-friendly description that never dumps image payloads.
    pub fn preview(&self) -> String {
        match self.kind {
            ClipKind::Image => format!("[image, {} bytes encoded]", self.content.len()),
            _ => {
                let mut preview: String = self.content.chars().take(20).collect();
                if self.content.chars().count() > 20 {
                    preview.push_str("...");
                }
                preview
            }
        }
    }
}
