//! TCP reachability probe for the game server

use log::debug;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Checks whether the address accepts TCP connections within `limit`. Proves
/// reachability and nothing more; the game protocol is never spoken.
pub async fn is_reachable(addr: &str, limit: Duration) -> bool {
    match timeout(limit, TcpStream::connect(addr)).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            debug!("probe of {} failed: {}", addr, e);
            false
        }
        Err(_) => {
            debug!("probe of {} timed out after {:?}", addr, limit);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_listening_port_is_reachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        assert!(is_reachable(&addr, PROBE_TIMEOUT).await);
    }

    #[tokio::test]
    async fn test_closed_port_is_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        assert!(!is_reachable(&addr, PROBE_TIMEOUT).await);
    }

    #[tokio::test]
    async fn test_invalid_address_is_unreachable() {
        assert!(!is_reachable("not-an-address", Duration::from_millis(200)).await);
    }
}
