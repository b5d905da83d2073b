//! Persistence of the single "gate passed" flag
//!
//! The flag is read once at startup to decide whether to show the gate and
//! written once when the success callback fires. Nothing else survives a
//! restart.

use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default location of the saved site state, relative to the working
/// directory.
pub const STATE_FILE: &str = ".darkhaven.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct SavedState {
    #[serde(default)]
    gate_passed: bool,
}

/// Whether the gate was already solved on an earlier visit. A missing or
/// unreadable state file counts as "not passed".
pub fn gate_passed(path: &Path) -> bool {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("no saved state at {}: {}", path.display(), e);
            return false;
        }
    };

    match serde_json::from_str::<SavedState>(&raw) {
        Ok(state) => state.gate_passed,
        Err(e) => {
            error!("corrupt state file {}: {}", path.display(), e);
            false
        }
    }
}

/// Records that the gate was solved.
pub fn mark_gate_passed(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let state = SavedState { gate_passed: true };
    fs::write(path, serde_json::to_string(&state)?)?;
    debug!("saved state to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_not_passed() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!gate_passed(&dir.path().join("nope.json")));
    }

    #[test]
    fn test_flag_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        assert!(!gate_passed(&path));
        mark_gate_passed(&path).unwrap();
        assert!(gate_passed(&path));
    }

    #[test]
    fn test_corrupt_file_reads_as_not_passed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        fs::write(&path, "not json at all").unwrap();
        assert!(!gate_passed(&path));
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        fs::write(&path, r#"{"gate_passed":true,"theme":"dark"}"#).unwrap();
        assert!(gate_passed(&path));
    }
}
