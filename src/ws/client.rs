//! WebSocket handshake against the norns bus.

use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::handshake::client::Request;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::http::header::SEC_WEBSOCKET_PROTOCOL;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use crate::config::TriggerConfig;
use crate::error::TriggerError;

/// An established client connection to the device.
pub type NornsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Builds the handshake request, offering the configured subprotocol.
///
/// # Errors
///
/// Returns [`TriggerError::InvalidUrl`] if the URL cannot be turned into a
/// request and [`TriggerError::InvalidSubprotocol`] if the subprotocol is
/// not a valid header value.
pub fn build_request(config: &TriggerConfig) -> Result<Request, TriggerError> {
    let mut request = config
        .url
        .as_str()
        .into_client_request()
        .map_err(|e| TriggerError::InvalidUrl {
            url: config.url.clone(),
            reason: e.to_string(),
        })?;

    let protocol = HeaderValue::from_str(&config.subprotocol)
        .map_err(|_| TriggerError::InvalidSubprotocol(config.subprotocol.clone()))?;
    request.headers_mut().insert(SEC_WEBSOCKET_PROTOCOL, protocol);

    Ok(request)
}

/// Dials the device and completes the WebSocket handshake.
///
/// # Errors
///
/// Returns the errors of [`build_request`], or [`TriggerError::Connect`] if
/// the device is unreachable or rejects the handshake.
pub async fn connect(config: &TriggerConfig) -> Result<NornsStream, TriggerError> {
    let request = build_request(config)?;

    let (stream, response) = tokio_tungstenite::connect_async(request)
        .await
        .map_err(|source| TriggerError::Connect {
            url: config.url.clone(),
            source,
        })?;

    let negotiated = response
        .headers()
        .get(SEC_WEBSOCKET_PROTOCOL)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("none");
    tracing::info!(
        url = %config.url,
        status = %response.status(),
        subprotocol = negotiated,
        "connected to norns"
    );

    Ok(stream)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn request_offers_subprotocol() {
        let Ok(request) = build_request(&TriggerConfig::default()) else {
            panic!("default request must build");
        };
        let offered = request
            .headers()
            .get(SEC_WEBSOCKET_PROTOCOL)
            .and_then(|v| v.to_str().ok());
        assert_eq!(offered, Some("bus.sp.nanomsg.org"));
    }

    #[test]
    fn request_targets_configured_endpoint() {
        let Ok(request) = build_request(&TriggerConfig::default()) else {
            panic!("default request must build");
        };
        assert_eq!(request.uri().host(), Some("norns.local"));
        assert_eq!(request.uri().port_u16(), Some(5555));
        assert_eq!(request.uri().path(), "/");
    }

    #[test]
    fn unparsable_url_is_rejected() {
        let config = TriggerConfig {
            url: "ws://bad host/".to_string(),
            subprotocol: "bus.sp.nanomsg.org".to_string(),
        };
        assert!(matches!(
            build_request(&config),
            Err(TriggerError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn unencodable_subprotocol_is_rejected() {
        let config = TriggerConfig {
            url: "ws://norns.local:5555/".to_string(),
            subprotocol: "bus\nsp".to_string(),
        };
        assert!(matches!(
            build_request(&config),
            Err(TriggerError::InvalidSubprotocol(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_device_is_a_connect_error() {
        let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
            panic!("bind failed");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("no local addr");
        };
        drop(listener);

        let config = TriggerConfig {
            url: format!("ws://{addr}/"),
            subprotocol: "bus.sp.nanomsg.org".to_string(),
        };
        let result = connect(&config).await;
        assert!(matches!(result, Err(TriggerError::Connect { .. })));
    }
}
