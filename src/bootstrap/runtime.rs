use std::time::Duration;

use tokio::runtime::{Builder, Runtime};

/// Grace period for blocking workers when the runtime is torn down. A pending
/// stdin read never returns on its own.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

pub fn create_runtime() -> anyhow::Result<Runtime> {
    Ok(Builder::new_multi_thread()
        .enable_all()
        .thread_name("rival-worker")
        .build()?)
}
