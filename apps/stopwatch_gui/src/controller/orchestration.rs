//! Applies UI actions to the stopwatch controller.

use stopwatch_core::StopwatchController;

use crate::controller::events::UiAction;

pub fn dispatch_action(controller: &mut StopwatchController, action: UiAction) {
    // Fold in ticks that arrived before the click so laps see the latest time.
    controller.pump_ticks();
    match action {
        UiAction::ToggleRun => {
            controller.toggle_run();
        }
        UiAction::RecordLap => {
            controller.record_lap();
        }
        UiAction::Reset => controller.reset(),
    }
    tracing::debug!(action = action.name(), "applied ui action");
}

#[cfg(test)]
mod tests {
    use super::dispatch_action;
    use crate::controller::events::UiAction;
    use std::sync::Arc;
    use stopwatch_core::{NoopRedraw, RunState, StopwatchController, TokioTickScheduler};

    fn controller(runtime: &tokio::runtime::Runtime) -> StopwatchController {
        StopwatchController::new(Box::new(TokioTickScheduler::new(
            runtime.handle().clone(),
            Arc::new(NoopRedraw),
        )))
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .expect("runtime")
    }

    #[test]
    fn toggle_action_starts_and_stops_the_timer() {
        let runtime = runtime();
        let mut controller = controller(&runtime);

        dispatch_action(&mut controller, UiAction::ToggleRun);
        assert_eq!(controller.stopwatch().run_state(), RunState::Running);
        assert!(controller.has_active_timer());

        dispatch_action(&mut controller, UiAction::ToggleRun);
        assert_eq!(controller.stopwatch().run_state(), RunState::Stopped);
        assert!(!controller.has_active_timer());
    }

    #[test]
    fn lap_and_reset_actions_edit_the_log() {
        let runtime = runtime();
        let mut controller = controller(&runtime);

        dispatch_action(&mut controller, UiAction::RecordLap);
        dispatch_action(&mut controller, UiAction::RecordLap);
        assert_eq!(controller.snapshot().laps, vec!["00:00.00", "00:00.00"]);

        dispatch_action(&mut controller, UiAction::ToggleRun);
        dispatch_action(&mut controller, UiAction::Reset);
        let snapshot = controller.snapshot();
        assert!(snapshot.laps.is_empty());
        assert_eq!(snapshot.elapsed_centis, 0);
        assert!(!controller.has_active_timer());
    }

    #[test]
    fn action_names_are_stable() {
        assert_eq!(UiAction::ToggleRun.name(), "toggle_run");
        assert_eq!(UiAction::RecordLap.name(), "record_lap");
        assert_eq!(UiAction::Reset.name(), "reset");
    }
}
