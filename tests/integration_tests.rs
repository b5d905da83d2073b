//! Integration tests for the site, the gate and the status endpoint
//!
//! These tests validate cross-component interactions and real HTTP behavior.

use client::puzzle::{Gate, GateEvent, SUCCESS_DELAY};
use client::status::StatusPoller;
use client::storage;
use server::routes::{self, AppState};
use shared::{ServerStatus, TerminalId, WireId};
use std::time::Instant;
use tokio::sync::mpsc;

/// GATE FLOW TESTS
mod gate_flow_tests {
    use super::*;

    async fn send_mapping(
        tx: &mpsc::Sender<GateEvent>,
        mapping: [(WireId, TerminalId); shared::WIRE_COUNT],
    ) {
        for (wire, terminal) in mapping {
            tx.send(GateEvent::BeginDrag(wire)).await.unwrap();
            tx.send(GateEvent::DropOn(terminal)).await.unwrap();
        }
    }

    /// A wrong wiring, a retry and a correct wiring, with the success
    /// callback persisting the flag the way the application does on a first
    /// visit.
    #[tokio::test]
    async fn first_visit_flow_persists_flag() {
        let dir = tempfile::tempdir().unwrap();
        let state_path = dir.path().join("state.json");
        assert!(!storage::gate_passed(&state_path));

        let (tx, rx) = mpsc::channel(32);
        let callback_path = state_path.clone();
        let gate = tokio::spawn(Gate::new().run(rx, move || {
            storage::mark_gate_passed(&callback_path).unwrap();
        }));

        // green on right-0, yellow on right-2, orange on right-1: mismatch.
        send_mapping(
            &tx,
            [
                (WireId::Green, TerminalId::Right0),
                (WireId::Yellow, TerminalId::Right2),
                (WireId::Orange, TerminalId::Right1),
            ],
        )
        .await;

        // Retry with the canonical mapping.
        send_mapping(
            &tx,
            [
                (WireId::Green, TerminalId::Right1),
                (WireId::Yellow, TerminalId::Right2),
                (WireId::Orange, TerminalId::Right0),
            ],
        )
        .await;

        let puzzle = gate.await.unwrap();
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.attempts(), 1);
        assert!(storage::gate_passed(&state_path));
    }

    /// The success notification waits for the confirmation pause.
    #[tokio::test]
    async fn success_notification_is_delayed() {
        let (tx, rx) = mpsc::channel(32);
        let gate = tokio::spawn(Gate::new().run(rx, || {}));

        let start = Instant::now();
        send_mapping(
            &tx,
            [
                (WireId::Green, TerminalId::Right1),
                (WireId::Yellow, TerminalId::Right2),
                (WireId::Orange, TerminalId::Right0),
            ],
        )
        .await;

        gate.await.unwrap();
        assert!(start.elapsed() >= SUCCESS_DELAY);
    }
}

/// STATUS FEED TESTS
mod status_feed_tests {
    use super::*;

    /// Binds the status endpoint on an ephemeral port and returns its URL.
    async fn spawn_endpoint(state: AppState) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = routes::router(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/status", addr)
    }

    #[tokio::test]
    async fn endpoint_reports_reachable_game_server() {
        let game_server = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let target = game_server.local_addr().unwrap().to_string();

        let url = spawn_endpoint(AppState {
            target,
            max_players: 128,
        })
        .await;

        let status = StatusPoller::new(&url).unwrap().fetch().await;

        assert!(status.online);
        assert!((35..=55).contains(&status.players));
        assert_eq!(status.max_players, 128);
    }

    #[tokio::test]
    async fn endpoint_reports_dead_game_server_offline() {
        let game_server = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let target = game_server.local_addr().unwrap().to_string();
        drop(game_server);

        let url = spawn_endpoint(AppState {
            target,
            max_players: 128,
        })
        .await;

        let status = StatusPoller::new(&url).unwrap().fetch().await;

        assert!(!status.online);
        assert_eq!(status.players, 0);
    }

    #[tokio::test]
    async fn poller_substitutes_fallback_when_endpoint_is_down() {
        let status = StatusPoller::new("http://127.0.0.1:9/status")
            .unwrap()
            .fetch()
            .await;

        assert_eq!(status, ServerStatus::fallback());
    }

    /// The wire format matches what the site expects field by field.
    #[tokio::test]
    async fn endpoint_body_matches_contract() {
        let game_server = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let target = game_server.local_addr().unwrap().to_string();

        let url = spawn_endpoint(AppState {
            target: target.clone(),
            max_players: 128,
        })
        .await;

        let body: serde_json::Value = reqwest::get(&url).await.unwrap().json().await.unwrap();

        assert_eq!(body["online"], true);
        assert_eq!(body["maxPlayers"], 128);
        assert_eq!(body["ip"], target);
        assert!(body["players"].is_u64());
    }
}
