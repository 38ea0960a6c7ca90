//! Reload session over an established WebSocket connection.
//!
//! Sends the reload command once, then reads frames until the device
//! acknowledges or the stream ends.

use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_tungstenite::WebSocketStream;

use super::messages::{RELOAD_COMMAND, Reply, reload_command};
use crate::domain::{ReloadOutcome, TriggerState};
use crate::error::TriggerError;

/// Runs the reload session on a freshly opened connection.
///
/// - Sends [`RELOAD_COMMAND`] exactly once.
/// - Ignores every reply that is not the acknowledgment.
/// - On acknowledgment, closes the connection and returns
///   [`ReloadOutcome::Acknowledged`] without reading further.
///
/// There is no timeout: if the device stays connected and never
/// acknowledges, this future never completes.
///
/// # Errors
///
/// Returns [`TriggerError::Send`] if the command cannot be written and
/// [`TriggerError::Receive`] if the transport fails while listening.
pub async fn run_session<S>(
    mut socket: WebSocketStream<S>,
) -> Result<ReloadOutcome, TriggerError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut state = TriggerState::new();
    state.open()?;

    socket
        .send(reload_command())
        .await
        .map_err(TriggerError::Send)?;
    tracing::debug!(command = RELOAD_COMMAND.trim_end(), "reload command sent");

    while let Some(frame) = socket.next().await {
        let frame = frame.map_err(TriggerError::Receive)?;
        match Reply::from_message(&frame) {
            Some(Reply::Ack) => {
                // The reload already happened; a failed close handshake
                // does not change that.
                if let Err(e) = socket.close(None).await {
                    tracing::warn!(error = %e, "close handshake failed after acknowledgment");
                }
                state.close()?;
                tracing::info!("norns acknowledged script reload");
                return Ok(ReloadOutcome::Acknowledged);
            }
            Some(Reply::Other(payload)) => {
                tracing::debug!(payload = payload.trim_end(), "ignoring reply");
            }
            None => {}
        }
    }

    state.close()?;
    tracing::warn!("norns closed the connection without acknowledging");
    Ok(ReloadOutcome::PeerClosed)
}
