//! Use case for pasting a history item into the previously focused app
//! 将历史条目粘贴到之前聚焦的应用

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use anyhow::{Context, Result};
use regex::Regex;
use rv_core::clipboard::{ClipItem, ClipKind, ClipboardPayload};
use rv_core::ports::{KeyModifier, KeystrokePort, SystemClipboardPort, UiPort};
use tracing::{info, info_span, warn, Instrument};

static MARKUP: OnceLock<Regex> = OnceLock::new();

/// Plain-text fallback for HTML: every `<...>` tag (or trailing unclosed
/// `<...`) removed.
pub fn strip_markup(html: &str) -> String {
    let markup = MARKUP.get_or_init(|| Regex::new(r"<[^>]*>?").expect("static regex"));
    markup.replace_all(html, "").into_owned()
}

/// Clipboard payload matching the item's kind.
pub fn payload_for(item: &ClipItem) -> Result<ClipboardPayload> {
    Ok(match item.kind {
        ClipKind::Text => ClipboardPayload::Text(item.content.clone()),
        ClipKind::Html => ClipboardPayload::Html {
            html: item.content.clone(),
            plain: strip_markup(&item.content),
        },
        ClipKind::Image => ClipboardPayload::ImagePng(
            item.decode_image()
                .context("decode image item for paste failed")?,
        ),
    })
}

/// Writes an item back to the clipboard, hides the window, waits for focus to
/// return, then sends the platform paste shortcut.
pub struct PasteItem {
    clipboard: Arc<dyn SystemClipboardPort>,
    ui: Arc<dyn UiPort>,
    keystroke: Arc<dyn KeystrokePort>,
    delay: Duration,
}

impl PasteItem {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        ui: Arc<dyn UiPort>,
        keystroke: Arc<dyn KeystrokePort>,
        delay: Duration,
    ) -> Self {
        Self {
            clipboard,
            ui,
            keystroke,
            delay,
        }
    }

    pub async fn execute(&self, item: ClipItem) -> Result<()> {
        let span = info_span!("usecase.paste_item.execute", kind = %item.kind);

        async {
            let payload = payload_for(&item)?;

            let clipboard = Arc::clone(&self.clipboard);
            tokio::task::spawn_blocking(move || clipboard.write(payload))
                .await
                .context("clipboard write task failed")??;

            if let Err(e) = self.ui.hide_window().await {
                warn!(error = %e, "failed to hide window before paste");
            }

            tokio::time::sleep(self.delay).await;

            let keystroke = Arc::clone(&self.keystroke);
            let modifier = KeyModifier::platform_paste();
            tokio::task::spawn_blocking(move || keystroke.send_keystroke('v', modifier))
                .await
                .context("keystroke task failed")??;

            info!("item pasted");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::eq, Sequence};
    use rv_core::store::GroupsView;

    mock! {
        pub Clipboard {}

        impl SystemClipboardPort for Clipboard {
            fn read_sample(&self) -> Result<Option<ClipItem>>;
            fn write(&self, payload: ClipboardPayload) -> Result<()>;
        }
    }

    mock! {
        pub Ui {}

        #[async_trait::async_trait]
        impl UiPort for Ui {
            async fn show_groups(&self, view: &GroupsView) -> Result<()>;
            async fn show_items(&self, items: &[ClipItem]) -> Result<()>;
            async fn show_window(&self) -> Result<()>;
            async fn hide_window(&self) -> Result<()>;
        }
    }

    mock! {
        pub Keystroke {}

        impl KeystrokePort for Keystroke {
            fn send_keystroke(&self, key: char, modifier: KeyModifier) -> Result<()>;
        }
    }

    #[test]
    fn strip_markup_removes_tags() {
        assert_eq!(strip_markup("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_markup("a < b"), "a ");
        assert_eq!(strip_markup("no tags"), "no tags");
    }

    #[test]
    fn payload_matches_item_kind() {
        assert_eq!(
            payload_for(&ClipItem::text("t")).unwrap(),
            ClipboardPayload::Text("t".into())
        );
        assert_eq!(
            payload_for(&ClipItem::html("<i>h</i>")).unwrap(),
            ClipboardPayload::Html {
                html: "<i>h</i>".into(),
                plain: "h".into()
            }
        );
        assert_eq!(
            payload_for(&ClipItem::image_png(&[5, 6])).unwrap(),
            ClipboardPayload::ImagePng(vec![5, 6])
        );
        assert!(payload_for(&ClipItem::new(ClipKind::Image, "garbage")).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn writes_hides_waits_then_sends_paste_shortcut() {
        let mut seq = Sequence::new();
        let mut clipboard = MockClipboard::new();
        let mut ui = MockUi::new();
        let mut keystroke = MockKeystroke::new();

        clipboard
            .expect_write()
            .with(eq(ClipboardPayload::Text("hello".into())))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        ui.expect_hide_window()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        keystroke
            .expect_send_keystroke()
            .with(eq('v'), eq(KeyModifier::platform_paste()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let paste = PasteItem::new(
            Arc::new(clipboard),
            Arc::new(ui),
            Arc::new(keystroke),
            Duration::from_millis(100),
        );

        let started = tokio::time::Instant::now();
        paste.execute(ClipItem::text("hello")).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn clipboard_write_failure_skips_keystroke() {
        let mut clipboard = MockClipboard::new();
        let mut ui = MockUi::new();
        let mut keystroke = MockKeystroke::new();

        clipboard
            .expect_write()
            .returning(|_| Err(anyhow::anyhow!("clipboard locked")));
        ui.expect_hide_window().never();
        keystroke.expect_send_keystroke().never();

        let paste = PasteItem::new(
            Arc::new(clipboard),
            Arc::new(ui),
            Arc::new(keystroke),
            Duration::ZERO,
        );

        assert!(paste.execute(ClipItem::text("x")).await.is_err());
    }
}
