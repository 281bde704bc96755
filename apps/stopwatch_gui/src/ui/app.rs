use stopwatch_core::StopwatchController;
use tokio::runtime::Runtime;

use crate::controller::events::UiAction;
use crate::controller::orchestration::dispatch_action;
use crate::ui::view_model::{ViewModel, LAPS_HEADING, LAP_LABEL, RESET_LABEL, TITLE};

const DISPLAY_FONT_SIZE: f32 = 48.0;
const BUTTON_SIZE: [f32; 2] = [96.0, 32.0];
const ACTIVE_TOGGLE_FILL: egui::Color32 = egui::Color32::from_rgb(192, 57, 43);
const IDLE_TOGGLE_FILL: egui::Color32 = egui::Color32::from_rgb(39, 174, 96);

pub struct StopwatchApp {
    controller: StopwatchController,
    // Dropped after the controller so the tick task is cancelled first.
    _tick_runtime: Runtime,
}

impl StopwatchApp {
    pub fn new(controller: StopwatchController, tick_runtime: Runtime) -> Self {
        Self {
            controller,
            _tick_runtime: tick_runtime,
        }
    }

    fn show_controls(ui: &mut egui::Ui, view: &ViewModel) -> Option<UiAction> {
        let mut action = None;
        ui.horizontal(|ui| {
            let fill = if view.toggle_active {
                ACTIVE_TOGGLE_FILL
            } else {
                IDLE_TOGGLE_FILL
            };
            let toggle = egui::Button::new(
                egui::RichText::new(view.toggle_label).color(egui::Color32::WHITE),
            )
            .fill(fill)
            .min_size(BUTTON_SIZE.into());
            if ui.add(toggle).clicked() {
                action = Some(UiAction::ToggleRun);
            }
            if ui
                .add(egui::Button::new(LAP_LABEL).min_size(BUTTON_SIZE.into()))
                .clicked()
            {
                action = Some(UiAction::RecordLap);
            }
            if ui
                .add(egui::Button::new(RESET_LABEL).min_size(BUTTON_SIZE.into()))
                .clicked()
            {
                action = Some(UiAction::Reset);
            }
        });
        action
    }

    fn show_laps(ui: &mut egui::Ui, view: &ViewModel) {
        ui.heading(LAPS_HEADING);
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, lap) in view.laps.iter().enumerate() {
                    ui.label(egui::RichText::new(format!("{}. {lap}", index + 1)).monospace());
                }
            });
    }
}

impl eframe::App for StopwatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.pump_ticks();
        let view = ViewModel::project(self.controller.snapshot());

        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(TITLE);
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(&view.display)
                        .monospace()
                        .size(DISPLAY_FONT_SIZE),
                );
                ui.add_space(8.0);
                action = Self::show_controls(ui, &view);
            });
            ui.separator();
            Self::show_laps(ui, &view);
        });

        if let Some(action) = action {
            dispatch_action(&mut self.controller, action);
            ctx.request_repaint();
        }
    }
}
