//! Projection of stopwatch state into what the window shows.

use stopwatch_core::StopwatchSnapshot;

/// Window title and heading.
pub const TITLE: &str = "Stopwatch";
pub const LAP_LABEL: &str = "Lap";
pub const RESET_LABEL: &str = "Reset";
pub const LAPS_HEADING: &str = "Saved times";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub display: String,
    pub toggle_label: &'static str,
    /// Highlights the toggle button while running.
    pub toggle_active: bool,
    pub laps: Vec<String>,
}

impl ViewModel {
    pub fn project(snapshot: StopwatchSnapshot) -> Self {
        let running = snapshot.run_state.is_running();
        Self {
            display: snapshot.display(),
            toggle_label: if running { "Stop" } else { "Start" },
            toggle_active: running,
            laps: snapshot.laps,
        }
    }
}
