use stopwatch_core::RedrawNotifier;

/// Wakes the egui event loop so every tick is rendered.
pub struct EguiRedraw {
    ctx: egui::Context,
}

impl EguiRedraw {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl RedrawNotifier for EguiRedraw {
    fn request_redraw(&self) {
        self.ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::EguiRedraw;
    use stopwatch_core::RedrawNotifier;

    #[test]
    fn redraw_works_on_a_headless_context() {
        let ctx = egui::Context::default();
        EguiRedraw::new(ctx.clone()).request_redraw();
        assert!(ctx.has_requested_repaint());
    }
}
