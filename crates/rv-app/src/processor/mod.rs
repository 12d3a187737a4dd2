//! # Store processor / 存储处理器
//!
//! One actor task owns the [`ClipStore`](rv_core::store::ClipStore). Watcher
//! samples and UI commands arrive on the same bounded queue and are applied
//! one at a time, so no command ever observes a half-applied mutation.
//!
//! Disk writes go through a single writer task fed with owned snapshots;
//! pastes run as child tasks so their focus delay never stalls the queue.

mod actor;
mod command;
mod handle;
mod persister;

use std::sync::Arc;
use std::time::Duration;

use rv_core::store::ClipStore;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::deps::AppDeps;
use crate::usecases::{ApplyAutostartSetting, PasteItem};

pub use command::StoreCommand;
pub use handle::{ProcessorError, ProcessorHandle};

use actor::StoreActor;
use persister::SnapshotPersister;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorOptions {
    pub queue_capacity: usize,
    pub paste_delay: Duration,
    /// `None` saves only at shutdown.
    pub checkpoint_interval: Option<Duration>,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            queue_capacity: 64,
            paste_delay: Duration::from_millis(100),
            checkpoint_interval: None,
        }
    }
}

/// Start the store actor. The returned join handle completes after the
/// final save of a shutdown.
pub fn spawn_store_processor(
    deps: &AppDeps,
    store: ClipStore,
    options: ProcessorOptions,
) -> (ProcessorHandle, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(options.queue_capacity.max(1));

    let paste = Arc::new(PasteItem::new(
        Arc::clone(&deps.clipboard),
        Arc::clone(&deps.ui),
        Arc::clone(&deps.keystroke),
        options.paste_delay,
    ));
    let actor = StoreActor::new(
        store,
        paste,
        ApplyAutostartSetting::new(Arc::clone(&deps.autostart)),
        Arc::clone(&deps.ui),
        SnapshotPersister::spawn(Arc::clone(&deps.snapshots)),
        options.checkpoint_interval,
    );

    info!(
        queue_capacity = options.queue_capacity,
        checkpoint_secs = options.checkpoint_interval.map(|d| d.as_secs()),
        "store processor started"
    );
    let join = tokio::spawn(actor.run(rx));
    (ProcessorHandle::new(tx), join)
}
