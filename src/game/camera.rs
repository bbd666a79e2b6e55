// Drag-to-pan camera over the module field
//
// The camera position is a pixel offset subtracted from every module's
// world position. Panning only happens while no UI element is
// authoritative, so dragging on a menu never moves the world behind it.

use crate::coords::{PixelVec, ScreenVec, round_half_up};
use crate::input_system::{InputManager, mouse_buttons};
use serde::{Deserialize, Serialize};

/// Inclusive camera limits in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraBounds {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Default for CameraBounds {
    fn default() -> Self {
        CameraBounds {
            x1: -20,
            y1: -20,
            x2: 64,
            y2: 32,
        }
    }
}

impl CameraBounds {
    pub fn clamp(&self, pos: PixelVec) -> PixelVec {
        PixelVec::new(pos.x.clamp(self.x1, self.x2), pos.y.clamp(self.y1, self.y2))
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    pos: PixelVec,
    bounds: CameraBounds,
    /// Screen pixels of drag per pixel of camera movement
    pan_divisor: u32,
    drag_origin: Option<ScreenVec>,
}

impl Camera {
    pub fn new(bounds: CameraBounds, pan_divisor: u32) -> Self {
        Camera {
            pos: PixelVec::default(),
            bounds,
            pan_divisor: pan_divisor.max(1),
            drag_origin: None,
        }
    }

    pub fn position(&self) -> PixelVec {
        self.pos
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Advances the drag. `ui_idle` is true when no UI element is
    /// authoritative. Returns true if the camera position changed.
    pub fn update(&mut self, input: &InputManager, ui_idle: bool) -> bool {
        let mouse = &input.mouse;
        let mut moved = false;

        if ui_idle {
            if mouse.is_pressed(mouse_buttons::LEFT) {
                self.drag_origin = Some(mouse.position());
            }

            if let Some(origin) = self.drag_origin {
                if mouse.is_moving() {
                    let delta = origin - mouse.position();
                    let divisor = f64::from(self.pan_divisor);
                    let step = PixelVec::new(
                        round_half_up(delta.x / divisor) as i32,
                        round_half_up(delta.y / divisor) as i32,
                    );
                    let next = self.bounds.clamp(self.pos + step);
                    moved = next != self.pos;
                    self.pos = next;
                    self.drag_origin = Some(mouse.position());
                }
            }
        }

        if mouse.is_released(mouse_buttons::LEFT) {
            self.drag_origin = None;
        }

        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_system::InputEvent;

    #[test]
    fn test_drag_pans_opposite_to_pointer() {
        let mut input = InputManager::new();
        let mut camera = Camera::new(CameraBounds::default(), 8);

        input.handle_event(InputEvent::MouseMove(ScreenVec::new(300.0, 300.0)));
        input.handle_event(InputEvent::MouseDown(mouse_buttons::LEFT));
        camera.update(&input, true);
        input.advance_tick();
        assert!(camera.is_dragging());

        // 16 screen pixels left and 4 up: 2 and 0.5 camera pixels
        input.handle_event(InputEvent::MouseMove(ScreenVec::new(284.0, 296.0)));
        assert!(camera.update(&input, true));
        assert_eq!(camera.position(), PixelVec::new(2, 1));
    }

    #[test]
    fn test_position_clamped_to_bounds() {
        let mut input = InputManager::new();
        let mut camera = Camera::new(CameraBounds::default(), 8);

        input.handle_event(InputEvent::MouseMove(ScreenVec::new(600.0, 600.0)));
        input.handle_event(InputEvent::MouseDown(mouse_buttons::LEFT));
        camera.update(&input, true);
        input.advance_tick();

        input.handle_event(InputEvent::MouseMove(ScreenVec::new(0.0, 0.0)));
        camera.update(&input, true);
        assert_eq!(camera.position(), PixelVec::new(64, 32));

        let mut camera = Camera::new(CameraBounds::default(), 8);
        let mut input = InputManager::new();
        input.handle_event(InputEvent::MouseDown(mouse_buttons::LEFT));
        camera.update(&input, true);
        input.advance_tick();

        input.handle_event(InputEvent::MouseMove(ScreenVec::new(640.0, 640.0)));
        camera.update(&input, true);
        assert_eq!(camera.position(), PixelVec::new(-20, -20));
    }

    #[test]
    fn test_no_pan_while_ui_is_authoritative() {
        let mut input = InputManager::new();
        let mut camera = Camera::new(CameraBounds::default(), 8);

        input.handle_event(InputEvent::MouseMove(ScreenVec::new(300.0, 300.0)));
        input.handle_event(InputEvent::MouseDown(mouse_buttons::LEFT));
        camera.update(&input, false);
        input.advance_tick();

        input.handle_event(InputEvent::MouseMove(ScreenVec::new(100.0, 100.0)));
        assert!(!camera.update(&input, false));
        assert_eq!(camera.position(), PixelVec::default());
        assert!(!camera.is_dragging());
    }

    #[test]
    fn test_release_ends_drag() {
        let mut input = InputManager::new();
        let mut camera = Camera::new(CameraBounds::default(), 8);

        input.handle_event(InputEvent::MouseDown(mouse_buttons::LEFT));
        camera.update(&input, true);
        input.advance_tick();

        // Released while a UI element holds input still ends the drag
        input.handle_event(InputEvent::MouseUp(mouse_buttons::LEFT));
        camera.update(&input, false);
        assert!(!camera.is_dragging());
    }
}
