//! Single-writer controller: user actions, tick intake and timer ownership.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::{
    ticker::{Tick, TickRegistration, TickScheduler, TICK_INTERVAL},
    RunState, Stopwatch, StopwatchSnapshot,
};

pub struct StopwatchController {
    stopwatch: Stopwatch,
    scheduler: Box<dyn TickScheduler>,
    tick_tx: Sender<Tick>,
    tick_rx: Receiver<Tick>,
    // Present exactly while running.
    registration: Option<TickRegistration>,
}

impl StopwatchController {
    pub fn new(scheduler: Box<dyn TickScheduler>) -> Self {
        let (tick_tx, tick_rx) = unbounded();
        Self {
            stopwatch: Stopwatch::new(),
            scheduler,
            tick_tx,
            tick_rx,
            registration: None,
        }
    }

    pub fn toggle_run(&mut self) -> RunState {
        // Release first so a stale source can never overlap the new one.
        self.release_timer();
        let state = self.stopwatch.toggle_run();
        if state.is_running() {
            let epoch = self.stopwatch.epoch();
            self.registration = Some(self.scheduler.schedule(
                epoch,
                TICK_INTERVAL,
                self.tick_tx.clone(),
            ));
            tracing::debug!(epoch, "stopwatch started");
        } else {
            tracing::debug!(
                elapsed_seconds = self.stopwatch.elapsed_seconds(),
                "stopwatch stopped"
            );
        }
        state
    }

    pub fn record_lap(&mut self) -> String {
        let lap = self.stopwatch.record_lap().to_string();
        tracing::debug!(lap = %lap, laps = self.stopwatch.laps().len(), "lap recorded");
        lap
    }

    pub fn reset(&mut self) {
        self.release_timer();
        self.stopwatch.reset();
        tracing::debug!("stopwatch reset");
    }

    /// Applies every tick queued since the last call. Returns how many counted.
    pub fn pump_ticks(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(tick) = self.tick_rx.try_recv() {
            if self.stopwatch.apply_tick(tick) {
                applied += 1;
            }
        }
        applied
    }

    pub fn has_active_timer(&self) -> bool {
        self.registration.is_some()
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn snapshot(&self) -> StopwatchSnapshot {
        self.stopwatch.snapshot()
    }

    fn release_timer(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
