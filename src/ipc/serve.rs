use anyhow::Result;
use rv_app::{ProcessorError, ProcessorHandle};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite};
use tracing::{error, info, warn};

use super::{dispatch, parse_request, Flow};
use crate::adapters::StdioUiPort;

/// Read requests line by line until `quit-app`, end of input, or the store
/// processor goes away.
///
/// Malformed lines, including ones that are not UTF-8, are logged and
/// skipped.
pub async fn serve_requests<R, W>(
    mut input: R,
    processor: &ProcessorHandle,
    events: &StdioUiPort<W>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, bytes = buf.len(), "ignoring UI request that is not UTF-8");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let request = match parse_request(line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "ignoring UI request");
                continue;
            }
        };

        match dispatch(request, processor, events).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            Err(e) if matches!(e.downcast_ref::<ProcessorError>(), Some(ProcessorError::Closed)) => {
                error!("store processor stopped, closing UI channel");
                return Err(e);
            }
            Err(e) => warn!(error = %format!("{e:#}"), "UI request failed"),
        }
    }

    info!("UI input closed");
    Ok(())
}
