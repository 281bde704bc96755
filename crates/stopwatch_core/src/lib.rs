//! Stopwatch state machine, tick scheduling and lap log.
//!
//! Elapsed time is kept as whole centiseconds; one tick adds exactly one.

pub mod controller;
pub mod format;
pub mod ticker;

pub use controller::StopwatchController;
pub use format::{format_centis, format_time, seconds_to_centis};
pub use ticker::{
    NoopRedraw, RedrawNotifier, Tick, TickRegistration, TickScheduler, TokioTickScheduler,
    TICK_INTERVAL,
};

use format::CENTIS_PER_SECOND;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

/// Owned copy of the stopwatch state, handed to views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchSnapshot {
    pub run_state: RunState,
    pub elapsed_centis: u64,
    pub laps: Vec<String>,
}

impl StopwatchSnapshot {
    pub fn display(&self) -> String {
        format_centis(self.elapsed_centis)
    }
}

#[derive(Debug, Default)]
pub struct Stopwatch {
    run_state: RunState,
    elapsed_centis: u64,
    laps: Vec<String>,
    epoch: u64,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips between stopped and running. Entering `Running` opens a new epoch.
    pub fn toggle_run(&mut self) -> RunState {
        self.run_state = match self.run_state {
            RunState::Stopped => {
                self.epoch = self.epoch.wrapping_add(1);
                RunState::Running
            }
            RunState::Running => RunState::Stopped,
        };
        self.run_state
    }

    /// Adds one centisecond while running. Returns whether the tick counted.
    pub fn tick(&mut self) -> bool {
        if !self.run_state.is_running() {
            return false;
        }
        self.elapsed_centis = self.elapsed_centis.saturating_add(1);
        true
    }

    /// Like [`Stopwatch::tick`], but ignores ticks produced for an earlier run.
    pub fn apply_tick(&mut self, tick: Tick) -> bool {
        if tick.epoch != self.epoch {
            tracing::trace!(
                tick_epoch = tick.epoch,
                current_epoch = self.epoch,
                "ignoring stale tick"
            );
            return false;
        }
        self.tick()
    }

    /// Appends the current time to the lap log and returns the new entry.
    pub fn record_lap(&mut self) -> &str {
        let lap = format_centis(self.elapsed_centis);
        self.laps.push(lap);
        self.laps.last().map(String::as_str).unwrap_or_default()
    }

    pub fn reset(&mut self) {
        self.run_state = RunState::Stopped;
        self.elapsed_centis = 0;
        self.laps.clear();
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state.is_running()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn elapsed_centis(&self) -> u64 {
        self.elapsed_centis
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_centis as f64 / CENTIS_PER_SECOND as f64
    }

    pub fn display(&self) -> String {
        format_centis(self.elapsed_centis)
    }

    pub fn laps(&self) -> &[String] {
        &self.laps
    }

    pub fn snapshot(&self) -> StopwatchSnapshot {
        StopwatchSnapshot {
            run_state: self.run_state,
            elapsed_centis: self.elapsed_centis,
            laps: self.laps.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
