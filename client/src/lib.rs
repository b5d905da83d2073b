//! # Dark Haven Site
//!
//! The community front-end for the Dark Haven game server. Everything the
//! site shows is held in memory and rebuilt on restart; the only state that
//! survives is a single "gate passed" flag, and the only network traffic is
//! the periodic status poll.
//!
//! ## First visit
//!
//! On a first visit the site is hidden behind the wire-matching gate: three
//! wires have to be routed to their matching terminals before the page
//! becomes usable. A correct wiring fires a one-time success notification
//! (after a short confirmation pause) which the application answers by
//! persisting the flag, so later visits skip the gate entirely. A wrong
//! wiring counts an attempt and clears the board for a retry; there is no
//! attempt limit and no lockout; the gate is decoration, not access
//! control.
//!
//! ## Module Organization
//!
//! ### Puzzle Module (`puzzle`)
//! The gate state machine and its timed runner. Drag-and-drop is abstracted
//! into discrete begin-drag/drop-on messages so the machine carries no UI
//! assumptions.
//!
//! ### Input Module (`input`)
//! Translates command lines into gate events and site commands.
//!
//! ### App Module (`app`)
//! The embedding application: decides whether to show the gate, then runs
//! the command loop over the session, content store, chat log and status
//! feed.
//!
//! ### Status Module (`status`)
//! Polls the status endpoint every 30 seconds and publishes the latest
//! snapshot; failures substitute a fixed offline fallback.
//!
//! ### Auth Module (`auth`)
//! Cosmetic login/registration with a hard-coded admin pair. No trust
//! boundary is provided or implied.
//!
//! ### Content Module (`content`)
//! Seeded news, rules and wiki sections plus the admin editing operations.
//!
//! ### Chat Module (`chat`)
//! The in-memory chat widget. No transport.
//!
//! ### Storage Module (`storage`)
//! Reads and writes the single persisted flag.

pub mod app;
pub mod auth;
pub mod chat;
pub mod content;
pub mod input;
pub mod puzzle;
pub mod status;
pub mod storage;
