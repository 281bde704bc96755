//! User intents raised by the window.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ToggleRun,
    RecordLap,
    Reset,
}

impl UiAction {
    pub fn name(self) -> &'static str {
        match self {
            UiAction::ToggleRun => "toggle_run",
            UiAction::RecordLap => "record_lap",
            UiAction::Reset => "reset",
        }
    }
}
