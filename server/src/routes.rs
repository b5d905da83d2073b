//! HTTP surface of the status endpoint

use crate::probe;
use axum::{extract::State, routing::get, Json, Router};
use rand::Rng;
use serde::Serialize;
use shared::ServerStatus;
use tower_http::cors::CorsLayer;

const PLAYERS_MIN: u32 = 35;
const PLAYERS_MAX: u32 = 55;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Game server address to probe.
    pub target: String,
    /// Player cap reported to clients.
    pub max_players: u32,
}

/// Response body of `GET /status`.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    #[serde(flatten)]
    pub status: ServerStatus,
    pub ip: String,
}

/// Builds the router. CORS is permissive so the site can call the endpoint
/// cross-origin; method routing rejects anything but GET.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(get_status))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn get_status(State(state): State<AppState>) -> Json<StatusBody> {
    Json(check(&state.target, state.max_players).await)
}

/// Probes the game server and assembles the status response.
///
/// The player count is synthesized while the server is reachable.
/// TODO: query the game server's status port for the real count once it
/// exposes one.
pub async fn check(target: &str, max_players: u32) -> StatusBody {
    let online = probe::is_reachable(target, probe::PROBE_TIMEOUT).await;
    let players = if online {
        rand::thread_rng().gen_range(PLAYERS_MIN..=PLAYERS_MAX)
    } else {
        0
    };

    StatusBody {
        status: ServerStatus {
            online,
            players,
            max_players,
        },
        ip: target.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_check_reports_reachable_target_online() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let body = check(&addr, 128).await;

        assert!(body.status.online);
        assert!((PLAYERS_MIN..=PLAYERS_MAX).contains(&body.status.players));
        assert_eq!(body.status.max_players, 128);
        assert_eq!(body.ip, addr);
    }

    #[tokio::test]
    async fn test_check_reports_dead_target_offline() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        let body = check(&addr, 128).await;

        assert!(!body.status.online);
        assert_eq!(body.status.players, 0);
        assert_eq!(body.status.max_players, 128);
    }

    #[tokio::test]
    async fn test_status_body_json_shape() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);
        tokio::time::sleep(Duration::from_millis(10)).await;

        let body = check(&addr, 64).await;
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["online"], false);
        assert_eq!(json["players"], 0);
        assert_eq!(json["maxPlayers"], 64);
        assert_eq!(json["ip"], addr);
    }
}
