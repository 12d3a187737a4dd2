use anyhow::{anyhow, Result};
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat, RustImageData};
use rv_core::clipboard::{ClipItem, ClipboardPayload};

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// The slice of clipboard access a sample read needs.
pub trait ClipboardFormats {
    fn has_image(&self) -> bool;
    fn has_html(&self) -> bool;
    fn has_text(&self) -> bool;
    fn image_png(&self) -> Result<Vec<u8>>;
    fn html(&self) -> Result<String>;
    fn text(&self) -> Result<String>;
}

impl ClipboardFormats for ClipboardContext {
    fn has_image(&self) -> bool {
        self.has(ContentFormat::Image)
    }

    fn has_html(&self) -> bool {
        self.has(ContentFormat::Html)
    }

    fn has_text(&self) -> bool {
        self.has(ContentFormat::Text)
    }

    fn image_png(&self) -> Result<Vec<u8>> {
        let image = map_clipboard_err(self.get_image())?;
        let png = map_clipboard_err(image.to_png())?;
        Ok(png.get_bytes().to_vec())
    }

    fn html(&self) -> Result<String> {
        map_clipboard_err(self.get_html())
    }

    fn text(&self) -> Result<String> {
        map_clipboard_err(self.get_text())
    }
}

/// Extract at most one sample with priority image > html > text.
///
/// Only the highest-priority format present is read; empty content yields
/// no sample.
pub fn read_sample<C: ClipboardFormats + ?Sized>(ctx: &C) -> Result<Option<ClipItem>> {
    if ctx.has_image() {
        let png = ctx.image_png()?;
        return Ok((!png.is_empty()).then(|| ClipItem::image_png(&png)));
    }

    if ctx.has_html() {
        let html = ctx.html()?;
        return Ok((!html.is_empty()).then(|| ClipItem::html(html)));
    }

    if ctx.has_text() {
        let text = ctx.text()?;
        return Ok((!text.is_empty()).then(|| ClipItem::text(text)));
    }

    Ok(None)
}

pub fn write_payload(ctx: &ClipboardContext, payload: ClipboardPayload) -> Result<()> {
    match payload {
        ClipboardPayload::Text(text) => map_clipboard_err(ctx.set_text(text)),
        ClipboardPayload::Html { html, plain } => map_clipboard_err(ctx.set(vec![
            clipboard_rs::ClipboardContent::Html(html),
            clipboard_rs::ClipboardContent::Text(plain),
        ])),
        ClipboardPayload::ImagePng(bytes) => {
            let image = RustImageData::from_bytes(&bytes).map_err(|e| anyhow!(e))?;
            map_clipboard_err(ctx.set_image(image))
        }
    }
}
