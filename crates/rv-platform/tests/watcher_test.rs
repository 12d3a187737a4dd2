use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use rv_core::clipboard::{ClipItem, ClipboardPayload};
use rv_core::ports::{ClipboardSampleHandler, SystemClipboardPort};
use rv_platform::ClipboardPollWatcher;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Replays scripted reads, then keeps returning the last one.
struct ScriptedClipboard {
    reads: Mutex<VecDeque<Result<Option<ClipItem>>>>,
    read_delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedClipboard {
    fn new(reads: Vec<Result<Option<ClipItem>>>) -> Self {
        Self {
            reads: Mutex::new(reads.into()),
            read_delay: Duration::ZERO,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = delay;
        self
    }
}

impl SystemClipboardPort for ScriptedClipboard {
    fn read_sample(&self) -> Result<Option<ClipItem>> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        std::thread::sleep(self.read_delay);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let mut reads = self.reads.lock().unwrap();
        if reads.len() > 1 {
            reads.pop_front().unwrap()
        } else {
            match reads.front() {
                Some(Ok(sample)) => Ok(sample.clone()),
                _ => Ok(None),
            }
        }
    }

    fn write(&self, _payload: ClipboardPayload) -> Result<()> {
        Ok(())
    }
}

struct ChannelHandler(mpsc::UnboundedSender<ClipItem>);

#[async_trait::async_trait]
impl ClipboardSampleHandler for ChannelHandler {
    async fn on_sample(&self, sample: ClipItem) -> Result<()> {
        self.0.send(sample).map_err(|_| anyhow!("receiver dropped"))
    }
}

async fn next_sample(rx: &mut mpsc::UnboundedReceiver<ClipItem>) -> ClipItem {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("sample within timeout")
        .expect("channel open")
}

#[tokio::test]
async fn read_errors_do_not_stop_polling() {
    let clipboard = Arc::new(ScriptedClipboard::new(vec![
        Err(anyhow!("clipboard busy")),
        Ok(None),
        Ok(Some(ClipItem::text("after error"))),
    ]));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    let handle = ClipboardPollWatcher::new(
        clipboard,
        Arc::new(ChannelHandler(tx)),
        Duration::from_millis(5),
    )
    .spawn(cancel.clone());

    assert_eq!(next_sample(&mut rx).await, ClipItem::text("after error"));

    cancel.cancel();
    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("watcher stops after cancel")
        .unwrap();
}

#[tokio::test]
async fn every_tick_delivers_current_sample() {
    let clipboard = Arc::new(ScriptedClipboard::new(vec![Ok(Some(ClipItem::text("same")))]));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    let handle = ClipboardPollWatcher::new(
        clipboard,
        Arc::new(ChannelHandler(tx)),
        Duration::from_millis(5),
    )
    .spawn(cancel.clone());

    // Dedup is not the watcher's job.
    assert_eq!(next_sample(&mut rx).await, ClipItem::text("same"));
    assert_eq!(next_sample(&mut rx).await, ClipItem::text("same"));

    cancel.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn slow_reads_never_overlap() {
    let clipboard = Arc::new(
        ScriptedClipboard::new(vec![Ok(Some(ClipItem::text("slow")))])
            .with_read_delay(Duration::from_millis(20)),
    );
    let (tx, mut rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    let handle = ClipboardPollWatcher::new(
        clipboard.clone(),
        Arc::new(ChannelHandler(tx)),
        Duration::from_millis(2),
    )
    .spawn(cancel.clone());

    for _ in 0..4 {
        next_sample(&mut rx).await;
    }
    cancel.cancel();
    handle.await.unwrap();

    assert_eq!(clipboard.max_in_flight.load(Ordering::SeqCst), 1);
}
