//! Wire-matching gate shown before the rest of the site is usable

use log::{debug, info};
use shared::{TerminalId, WireId, WIRE_COUNT};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Pause between a correct wiring and the success notification, so a
/// confirmation can render first.
pub const SUCCESS_DELAY: Duration = Duration::from_millis(1000);
/// Pause between a wrong wiring and the board clearing for a retry.
pub const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Outcome of a completed connection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Solved,
    Mismatch,
}

/// Drag-and-drop reduced to discrete messages, so the puzzle has no
/// pointer-event or UI-toolkit assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    BeginDrag(WireId),
    DropOn(TerminalId),
    Reset,
}

/// State of the wire-matching puzzle.
///
/// Connections accumulate one per wire; once all wires are placed the set is
/// compared against the fixed correct mapping. A mismatch counts one attempt
/// and the board is cleared for a retry. There is no attempt limit.
#[derive(Debug, Default)]
pub struct WirePuzzle {
    connections: HashMap<WireId, TerminalId>,
    dragging: Option<WireId>,
    solved: bool,
    attempts: u32,
}

impl WirePuzzle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records which wire is being moved. Idempotent; replaces any previous
    /// drag marker.
    pub fn begin_drag(&mut self, wire: WireId) {
        if self.solved {
            return;
        }
        self.dragging = Some(wire);
    }

    /// Drops the dragged wire on `terminal`, overwriting any earlier placement
    /// of that wire. No-op when nothing is being dragged. Returns a verdict
    /// once all wires are placed.
    pub fn drop_on_terminal(&mut self, terminal: TerminalId) -> Option<Verdict> {
        if self.solved {
            return None;
        }

        let wire = self.dragging.take()?;
        self.connections.insert(wire, terminal);
        debug!("wire {} placed on {}", wire, terminal);
        self.evaluate()
    }

    fn evaluate(&mut self) -> Option<Verdict> {
        if self.connections.len() < WIRE_COUNT {
            return None;
        }

        let correct = self
            .connections
            .iter()
            .all(|(wire, terminal)| wire.target() == *terminal);

        if correct {
            self.solved = true;
            Some(Verdict::Solved)
        } else {
            self.attempts += 1;
            Some(Verdict::Mismatch)
        }
    }

    /// Failure-path clear: empties the board but keeps the attempt counter.
    pub fn clear_connections(&mut self) {
        self.connections.clear();
    }

    /// User-facing reset: clears the board and the drag marker. The attempt
    /// counter is untouched.
    pub fn reset(&mut self) {
        self.connections.clear();
        self.dragging = None;
    }

    pub fn connection(&self, wire: WireId) -> Option<TerminalId> {
        self.connections.get(&wire).copied()
    }

    pub fn placed(&self) -> usize {
        self.connections.len()
    }

    pub fn dragging(&self) -> Option<WireId> {
        self.dragging
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }
}

/// Runs the puzzle against a stream of gate events until it is solved or the
/// event source closes.
///
/// The two timed transitions are one-shot sleeps on the same task; events
/// arriving during a pause queue on the channel and are applied afterwards.
/// `on_success` fires exactly once, after [`SUCCESS_DELAY`].
pub struct Gate {
    puzzle: WirePuzzle,
}

impl Gate {
    pub fn new() -> Self {
        Self {
            puzzle: WirePuzzle::new(),
        }
    }

    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<GateEvent>,
        on_success: impl FnOnce(),
    ) -> WirePuzzle {
        while let Some(event) = events.recv().await {
            match event {
                GateEvent::BeginDrag(wire) => self.puzzle.begin_drag(wire),
                GateEvent::Reset => {
                    self.puzzle.reset();
                    println!("Board cleared.");
                }
                GateEvent::DropOn(terminal) => match self.puzzle.drop_on_terminal(terminal) {
                    Some(Verdict::Solved) => {
                        println!("Access granted!");
                        info!("gate solved after {} failed attempts", self.puzzle.attempts());
                        sleep(SUCCESS_DELAY).await;
                        on_success();
                        return self.puzzle;
                    }
                    Some(Verdict::Mismatch) => {
                        println!("Wrong! Attempts: {}", self.puzzle.attempts());
                        sleep(RETRY_DELAY).await;
                        self.puzzle.clear_connections();
                        println!("Connect the wires to the matching terminals.");
                    }
                    None => {}
                },
            }
        }

        self.puzzle
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}
