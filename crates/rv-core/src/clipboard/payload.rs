/// Content written back to the system clipboard on paste.
///
/// 写回系统剪贴板的内容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardPayload {
    Text(String),
    /// HTML together with the plain-text fallback offered to targets that
    /// cannot accept markup.
    Html { html: String, plain: String },
    ImagePng(Vec<u8>),
}

impl ClipboardPayload {
    pub fn format_name(&self) -> &'static str {
        match self {
            ClipboardPayload::Text(_) => "text",
            ClipboardPayload::Html { .. } => "html",
            ClipboardPayload::ImagePng(_) => "image",
        }
    }
}
