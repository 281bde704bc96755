//! Periodic tick generation for a running stopwatch.

use std::{fmt, sync::Arc, time::Duration};

use crossbeam_channel::Sender;
use tokio::{
    runtime::Handle,
    time::{interval_at, Instant, MissedTickBehavior},
};

/// Real-time spacing between ticks. Each delivered tick adds one centisecond.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// One tick produced by the registration that was created for `epoch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub epoch: u64,
}

/// Asked to redraw the view after every delivered tick.
pub trait RedrawNotifier: Send + Sync {
    fn request_redraw(&self);
}

pub struct NoopRedraw;

impl RedrawNotifier for NoopRedraw {
    fn request_redraw(&self) {}
}

/// Produces ticks for one run epoch until the returned registration is released.
pub trait TickScheduler: Send + Sync {
    fn schedule(&self, epoch: u64, period: Duration, ticks: Sender<Tick>) -> TickRegistration;
}

/// Handle to a scheduled tick source. Dropping it cancels the source.
pub struct TickRegistration {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TickRegistration {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TickRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for TickRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickRegistration")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Runs each registration as a task on a tokio runtime.
pub struct TokioTickScheduler {
    handle: Handle,
    notifier: Arc<dyn RedrawNotifier>,
}

impl TokioTickScheduler {
    pub fn new(handle: Handle, notifier: Arc<dyn RedrawNotifier>) -> Self {
        Self { handle, notifier }
    }
}

impl TickScheduler for TokioTickScheduler {
    fn schedule(&self, epoch: u64, period: Duration, ticks: Sender<Tick>) -> TickRegistration {
        let notifier = Arc::clone(&self.notifier);
        let task = self.handle.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(Tick { epoch }).is_err() {
                    tracing::debug!(epoch, "tick receiver dropped; stopping tick task");
                    break;
                }
                notifier.request_redraw();
            }
        });
        tracing::debug!(epoch, period_ms = period.as_millis() as u64, "tick task spawned");

        let abort = task.abort_handle();
        TickRegistration::new(move || {
            abort.abort();
            tracing::debug!(epoch, "tick task cancelled");
        })
    }
}
