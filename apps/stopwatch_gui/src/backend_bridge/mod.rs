//! Bridge between the egui thread and the tokio runtime that produces ticks.

pub mod redraw;
pub mod runtime;
