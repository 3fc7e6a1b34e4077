//! Newline-delimited JSON transport
//!
//! Each input line is one [`IntentRequest`]; each handled request produces
//! exactly one [`Completion`] line on the output. Logs go to stderr, so
//! stdout carries nothing but completions.

use crate::client::HubClient;
use crate::error::Result;
use crate::server::dispatcher::IntentDispatcher;
use crate::server::models::IntentRequest;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

/// Serve requests from `reader` until end of input.
///
/// Malformed lines are logged and skipped. Returns the number of requests
/// answered.
pub async fn serve<C, R, W>(
    dispatcher: &IntentDispatcher<'_, C>,
    reader: R,
    mut writer: W,
) -> Result<usize>
where
    C: HubClient,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let request: IntentRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!("Skipping malformed request: {e}");
                continue;
            }
        };

        let completion = dispatcher.handle(&request).await;

        let mut encoded = serde_json::to_vec(&completion)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
        handled += 1;
    }

    info!("Input closed after {handled} requests");
    Ok(handled)
}

/// Serve requests from stdin, answering on stdout
pub async fn serve_stdio<C: HubClient>(dispatcher: &IntentDispatcher<'_, C>) -> Result<usize> {
    serve(
        dispatcher,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
