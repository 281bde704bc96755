use std::sync::Arc;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use stopwatch_core::{StopwatchController, TokioTickScheduler};

use crate::backend_bridge::{redraw::EguiRedraw, runtime::build_tick_runtime};
use crate::config::StartupConfig;
use crate::ui::{StopwatchApp, TITLE};

fn main() -> anyhow::Result<()> {
    let config = StartupConfig::parse();
    config.validate()?;
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .init();

    let tick_runtime = build_tick_runtime().inspect_err(|err| {
        tracing::error!("stopwatch startup failure: {err:#}");
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size(config.inner_size())
            .with_min_inner_size([280.0, 320.0]),
        ..Default::default()
    };
    tracing::info!(width = config.width, height = config.height, "opening stopwatch window");

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| {
            let redraw = Arc::new(EguiRedraw::new(cc.egui_ctx.clone()));
            let scheduler = TokioTickScheduler::new(tick_runtime.handle().clone(), redraw);
            let controller = StopwatchController::new(Box::new(scheduler));
            Ok(Box::new(StopwatchApp::new(controller, tick_runtime)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("stopwatch window failed")
}
