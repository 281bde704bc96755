//! Controller layer: UI actions and how they reach the stopwatch.

pub mod events;
pub mod orchestration;
