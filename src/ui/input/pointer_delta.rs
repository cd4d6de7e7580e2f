//! Pointer-Delta-Verarbeitung: Kamera-Pan.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas für Kamera-Pan.
    pub(crate) fn handle_pointer_delta(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let wpp = ctx.camera.world_per_pixel(ctx.viewport_size[1]);
        let pan = AppIntent::CameraPan {
            delta: glam::Vec2::new(-pointer_delta.x * wpp, -pointer_delta.y * wpp),
        };

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            if self.primary_drag_mode == PrimaryDragMode::CameraPan {
                events.push(pan);
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(pan);
        }
    }
}
