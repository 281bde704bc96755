//! UI layer: eframe app shell and the view model it renders.

pub mod app;
pub mod view_model;

pub use app::StopwatchApp;
pub use view_model::TITLE;
