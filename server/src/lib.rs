//! # Status Endpoint
//!
//! The one backend service behind the Dark Haven site: a small HTTP endpoint
//! the page polls for the game server's status. It owns no game state and no
//! accounts. It answers a single question, "is the server up", by probing
//! the configured address over TCP.
//!
//! ## Contract
//!
//! `GET /status` returns a JSON object with `online`, `players`,
//! `maxPlayers` and `ip`. The player count is synthesized while the probe
//! succeeds (the game server exposes no query protocol), zero otherwise.
//! CORS is permissive so browsers can call the endpoint from the site's
//! origin.
//!
//! ## Module Organization
//!
//! ### Probe Module (`probe`)
//! TCP connect with a fixed timeout; reachability only.
//!
//! ### Routes Module (`routes`)
//! The axum router, shared handler state and response assembly.

pub mod probe;
pub mod routes;
