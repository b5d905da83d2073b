//! Periodic polling of the game server status endpoint

use log::{debug, warn};
use shared::ServerStatus;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::interval;

/// How often the endpoint is queried. Failures wait for the next tick; there
/// is no faster retry.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct StatusPoller {
    client: reqwest::Client,
    url: String,
}

impl StatusPoller {
    pub fn new(url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Fetches the current status, substituting the fallback value on any
    /// request or decode failure.
    pub async fn fetch(&self) -> ServerStatus {
        match self.try_fetch().await {
            Ok(status) => {
                debug!(
                    "status: online={} players={}/{}",
                    status.online, status.players, status.max_players
                );
                status
            }
            Err(e) => {
                warn!("status fetch from {} failed: {}", self.url, e);
                ServerStatus::fallback()
            }
        }
    }

    async fn try_fetch(&self) -> Result<ServerStatus, reqwest::Error> {
        self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<ServerStatus>()
            .await
    }

    /// Spawns the poll loop. The first fetch happens immediately, then one per
    /// [`POLL_INTERVAL`]. The task stops once every receiver is dropped.
    pub fn spawn(self) -> watch::Receiver<ServerStatus> {
        let (tx, rx) = watch::channel(ServerStatus::fallback());

        tokio::spawn(async move {
            let mut ticker = interval(POLL_INTERVAL);
            loop {
                ticker.tick().await;
                let status = self.fetch().await;
                if tx.send(status).is_err() {
                    break;
                }
            }
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_fallback() {
        let poller = StatusPoller::new("http://127.0.0.1:9/status").unwrap();
        let status = poller.fetch().await;

        assert_eq!(status, ServerStatus::fallback());
    }

    #[tokio::test]
    async fn test_spawn_publishes_initial_value() {
        let poller = StatusPoller::new("http://127.0.0.1:9/status").unwrap();
        let mut rx = poller.spawn();

        // First tick fires immediately; wait for the first publish.
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), ServerStatus::fallback());
    }
}
