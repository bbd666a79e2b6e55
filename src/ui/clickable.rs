//! Press/hover/release state machine for pointer-interactive elements.
//!
//! # Transitions (once per tick)
//!
//! Only while the element may act (see [`ClickGate`]):
//!
//! | hovering | condition                  | next       |
//! |----------|----------------------------|------------|
//! | yes      | left press edge            | `Down`     |
//! | yes      | was `UpActive`             | `Down`     |
//! | yes      | otherwise, unless `Down`   | `Hover`    |
//! | no       | was `Down` or `UpActive`   | `UpActive` |
//! | no       | otherwise                  | `Up`       |
//!
//! Then, whether or not the element may act, a left release edge settles the
//! press: a `Down` element fires its click handler exactly once, wherever the
//! pointer is, and the status becomes `Hover` (hovering) or `Up`.
//!
//! Entering `Up` always drops the element's arbitration claim.
//!
//! An element claims before it checks authority, so an uncontested element
//! acts on the same tick it is first hovered. Only an element that has to
//! take authority from a lower-layer owner updated earlier waits a tick.

use super::UiContext;
use super::arbiter::{ActiveUiArbitrator, ElementId};
use super::element::UiElement;
use crate::input_system::mouse_buttons;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickStatus {
    #[default]
    Up,
    Hover,
    Down,
    /// Pressed on the element, then dragged off without releasing
    UpActive,
}

/// Who decides whether a clickable may advance its state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickGate {
    /// Claims input while hovered and acts only while authoritative
    #[default]
    Arbitrated,
    /// Never claims. Acts only while no UI element is authoritative, so it
    /// sits underneath all arbitrated UI (world objects).
    WhenUiIdle,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClickError {
    #[error("click handler of element {element:?} failed: {reason}")]
    HandlerFailed { element: ElementId, reason: String },
}

pub type ClickHandler = Box<dyn FnMut() -> Result<(), String>>;

pub struct Clickable {
    status: ClickStatus,
    gate: ClickGate,
    on_click: Option<ClickHandler>,
}

impl fmt::Debug for Clickable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clickable")
            .field("status", &self.status)
            .field("gate", &self.gate)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl Clickable {
    pub fn new(gate: ClickGate) -> Self {
        Clickable {
            status: ClickStatus::Up,
            gate,
            on_click: None,
        }
    }

    pub fn with_handler(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn set_handler(&mut self, handler: ClickHandler) {
        self.on_click = Some(handler);
    }

    pub fn status(&self) -> ClickStatus {
        self.status
    }

    pub fn gate(&self) -> ClickGate {
        self.gate
    }

    fn set_status(&mut self, status: ClickStatus, element: &mut UiElement, ctx: &mut UiContext) {
        self.status = status;
        if status == ClickStatus::Up {
            element.deactivate_ui(ctx.arbiter);
        }
    }

    /// Advances one tick. Returns `Ok(true)` if the element was clicked.
    ///
    /// A failing handler never leaves the machine half-updated: the status
    /// settles first and the failure is returned afterwards.
    pub fn update(&mut self, element: &mut UiElement, ctx: &mut UiContext) -> Result<bool, ClickError> {
        if !element.is_alive() {
            return Ok(false);
        }

        let hovering = element.is_mouse_hovering(ctx.input);

        let may_act = match self.gate {
            ClickGate::Arbitrated => {
                if hovering {
                    element.activate_ui(ctx.arbiter);
                }
                element.is_authoritative(ctx.arbiter)
            }
            ClickGate::WhenUiIdle => !ctx.arbiter.has_authoritative(),
        };

        if may_act {
            self.handle_hover(element, ctx, hovering);
        }

        self.handle_release(element, ctx, hovering)
    }

    fn handle_hover(&mut self, element: &mut UiElement, ctx: &mut UiContext, hovering: bool) {
        if hovering {
            if ctx.input.mouse.is_pressed(mouse_buttons::LEFT) {
                self.set_status(ClickStatus::Down, element, ctx);
            } else if self.status == ClickStatus::UpActive {
                self.set_status(ClickStatus::Down, element, ctx);
            } else if self.status != ClickStatus::Down {
                self.set_status(ClickStatus::Hover, element, ctx);
            }
        } else if matches!(self.status, ClickStatus::Down | ClickStatus::UpActive) {
            self.set_status(ClickStatus::UpActive, element, ctx);
        } else {
            self.set_status(ClickStatus::Up, element, ctx);
        }
    }

    fn handle_release(
        &mut self,
        element: &mut UiElement,
        ctx: &mut UiContext,
        hovering: bool,
    ) -> Result<bool, ClickError> {
        if !ctx.input.mouse.is_released(mouse_buttons::LEFT) {
            return Ok(false);
        }

        let mut clicked = false;
        let mut outcome = Ok(());
        if self.status == ClickStatus::Down {
            clicked = true;
            if let Some(handler) = self.on_click.as_mut() {
                outcome = handler();
            }
        }

        let settled = if hovering { ClickStatus::Hover } else { ClickStatus::Up };
        self.set_status(settled, element, ctx);

        match outcome {
            Ok(()) => Ok(clicked),
            Err(reason) => Err(ClickError::HandlerFailed {
                element: element.id(),
                reason,
            }),
        }
    }

    /// Releases the claim and disables the element
    pub fn kill(&mut self, element: &mut UiElement, arbiter: &mut ActiveUiArbitrator) {
        element.kill(arbiter);
    }

    /// Re-enables the element in the `Up` state
    pub fn revive(&mut self, element: &mut UiElement) {
        element.revive();
        self.status = ClickStatus::Up;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::RatioVec;
    use crate::ui::element::{HAlign, UiOptions, VAlign};
    use crate::ui::test_support::Harness;
    use std::cell::Cell;
    use std::rc::Rc;

    /// 0.25 x 0.25 box at the top-left corner: screen (0,0)-(160,160)
    fn corner_element(h: &mut Harness, layer: i32) -> UiElement {
        UiElement::new(
            &mut h.ctx(),
            RatioVec::new(0.0, 0.0),
            RatioVec::new(0.25, 0.25),
            UiOptions::new().align(HAlign::Left, VAlign::Top).layer(layer),
        )
    }

    fn counting_button(count: &Rc<Cell<u32>>) -> Clickable {
        let count = Rc::clone(count);
        Clickable::new(ClickGate::Arbitrated).with_handler(Box::new(move || {
            count.set(count.get() + 1);
            Ok(())
        }))
    }

    #[test]
    fn test_hover_claims_and_leaving_releases() {
        let mut h = Harness::new();
        let mut element = corner_element(&mut h, 0);
        let mut button = Clickable::new(ClickGate::Arbitrated);

        h.move_to(50.0, 50.0);
        button.update(&mut element, &mut h.ctx()).unwrap();
        assert_eq!(button.status(), ClickStatus::Hover);
        assert!(element.is_authoritative(&h.arbiter));
        h.end_tick();

        h.move_to(300.0, 300.0);
        button.update(&mut element, &mut h.ctx()).unwrap();
        assert_eq!(button.status(), ClickStatus::Up);
        assert_eq!(h.arbiter.resolve_authoritative(), None);
    }

    #[test]
    fn test_click_fires_once_on_release_tick() {
        let mut h = Harness::new();
        let mut element = corner_element(&mut h, 0);
        let count = Rc::new(Cell::new(0));
        let mut button = counting_button(&count);

        h.move_to(50.0, 50.0);
        button.update(&mut element, &mut h.ctx()).unwrap();
        h.end_tick();

        h.press();
        let clicked = button.update(&mut element, &mut h.ctx()).unwrap();
        assert!(!clicked);
        assert_eq!(button.status(), ClickStatus::Down);
        assert_eq!(count.get(), 0);
        h.end_tick();

        h.release();
        let clicked = button.update(&mut element, &mut h.ctx()).unwrap();
        assert!(clicked);
        assert_eq!(count.get(), 1);
        assert_eq!(button.status(), ClickStatus::Hover);
        h.end_tick();

        // Nothing more fires on later ticks
        let clicked = button.update(&mut element, &mut h.ctx()).unwrap();
        assert!(!clicked);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_drag_off_is_sticky_and_reentry_presses_again() {
        let mut h = Harness::new();
        let mut element = corner_element(&mut h, 0);
        let count = Rc::new(Cell::new(0));
        let mut button = counting_button(&count);

        h.move_to(50.0, 50.0);
        h.press();
        button.update(&mut element, &mut h.ctx()).unwrap();
        assert_eq!(button.status(), ClickStatus::Down);
        h.end_tick();

        h.move_to(400.0, 400.0);
        button.update(&mut element, &mut h.ctx()).unwrap();
        assert_eq!(button.status(), ClickStatus::UpActive);
        // The press keeps the claim while dragged off
        assert!(element.is_authoritative(&h.arbiter));
        h.end_tick();

        h.move_to(60.0, 60.0);
        button.update(&mut element, &mut h.ctx()).unwrap();
        assert_eq!(button.status(), ClickStatus::Down);
        assert_eq!(count.get(), 0);
        h.end_tick();

        h.release();
        assert!(button.update(&mut element, &mut h.ctx()).unwrap());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_release_off_element_does_not_click() {
        let mut h = Harness::new();
        let mut element = corner_element(&mut h, 0);
        let count = Rc::new(Cell::new(0));
        let mut button = counting_button(&count);

        h.move_to(50.0, 50.0);
        h.press();
        button.update(&mut element, &mut h.ctx()).unwrap();
        h.end_tick();

        h.move_to(400.0, 400.0);
        h.release();
        let clicked = button.update(&mut element, &mut h.ctx()).unwrap();

        assert!(!clicked);
        assert_eq!(count.get(), 0);
        assert_eq!(button.status(), ClickStatus::Up);
        assert_eq!(h.arbiter.claim_count(), 0);
    }

    #[test]
    fn test_press_released_under_another_owner_still_clicks() {
        let mut h = Harness::new();
        let mut pressed = corner_element(&mut h, 0);
        // (320,0)-(480,160), above the pressed element's layer
        let mut overlay = UiElement::new(
            &mut h.ctx(),
            RatioVec::new(0.5, 0.0),
            RatioVec::new(0.25, 0.25),
            UiOptions::new().align(HAlign::Left, VAlign::Top).layer(-2),
        );
        let count = Rc::new(Cell::new(0));
        let mut button = counting_button(&count);
        let mut overlay_button = Clickable::new(ClickGate::Arbitrated);

        h.move_to(50.0, 50.0);
        h.press();
        button.update(&mut pressed, &mut h.ctx()).unwrap();
        assert_eq!(button.status(), ClickStatus::Down);
        h.end_tick();

        // The overlay updates first and takes authority
        h.move_to(400.0, 50.0);
        overlay_button.update(&mut overlay, &mut h.ctx()).unwrap();
        button.update(&mut pressed, &mut h.ctx()).unwrap();
        assert!(overlay.is_authoritative(&h.arbiter));
        assert_eq!(button.status(), ClickStatus::Down);
        h.end_tick();

        h.release();
        overlay_button.update(&mut overlay, &mut h.ctx()).unwrap();
        let clicked = button.update(&mut pressed, &mut h.ctx()).unwrap();

        assert!(clicked);
        assert_eq!(count.get(), 1);
        assert_eq!(button.status(), ClickStatus::Up);
        assert!(!h.arbiter.is_claiming(pressed.id()));
    }

    #[test]
    fn test_non_authoritative_element_does_not_transition() {
        let mut h = Harness::new();
        let mut top = corner_element(&mut h, -2);
        let mut bottom = corner_element(&mut h, 0);
        let mut top_button = Clickable::new(ClickGate::Arbitrated);
        let mut bottom_button = Clickable::new(ClickGate::Arbitrated);

        h.move_to(50.0, 50.0);
        top_button.update(&mut top, &mut h.ctx()).unwrap();
        bottom_button.update(&mut bottom, &mut h.ctx()).unwrap();

        assert_eq!(top_button.status(), ClickStatus::Hover);
        assert_eq!(bottom_button.status(), ClickStatus::Up);
        // Both claim, only the smaller layer resolves
        assert_eq!(h.arbiter.claim_count(), 2);
        assert_eq!(h.arbiter.resolve_authoritative(), Some(top.id()));
    }

    #[test]
    fn test_newly_hovered_element_steals_authority() {
        let mut h = Harness::new();
        let mut low_priority = corner_element(&mut h, 0);
        let mut button = Clickable::new(ClickGate::Arbitrated);

        h.move_to(50.0, 50.0);
        button.update(&mut low_priority, &mut h.ctx()).unwrap();
        assert!(low_priority.is_authoritative(&h.arbiter));
        h.end_tick();

        let mut overlay = corner_element(&mut h, -1);
        let mut overlay_button = Clickable::new(ClickGate::Arbitrated);
        overlay_button.update(&mut overlay, &mut h.ctx()).unwrap();
        assert!(overlay.is_authoritative(&h.arbiter));

        // The old owner is left alone until it is authoritative again
        button.update(&mut low_priority, &mut h.ctx()).unwrap();
        assert_eq!(button.status(), ClickStatus::Hover);
    }

    #[test]
    fn test_failing_handler_still_settles_state() {
        let mut h = Harness::new();
        let mut element = corner_element(&mut h, 0);
        let mut button = Clickable::new(ClickGate::Arbitrated)
            .with_handler(Box::new(|| Err("out of money".to_string())));

        h.move_to(50.0, 50.0);
        h.press();
        button.update(&mut element, &mut h.ctx()).unwrap();
        h.end_tick();

        h.release();
        let result = button.update(&mut element, &mut h.ctx());

        assert_eq!(
            result,
            Err(ClickError::HandlerFailed {
                element: element.id(),
                reason: "out of money".to_string(),
            })
        );
        assert_eq!(button.status(), ClickStatus::Hover);
        h.end_tick();

        // And it keeps working afterwards
        button.update(&mut element, &mut h.ctx()).unwrap();
        assert_eq!(button.status(), ClickStatus::Hover);
    }

    #[test]
    fn test_kill_and_revive() {
        let mut h = Harness::new();
        let mut element = corner_element(&mut h, 0);
        let mut button = Clickable::new(ClickGate::Arbitrated);

        h.move_to(50.0, 50.0);
        h.press();
        button.update(&mut element, &mut h.ctx()).unwrap();
        assert_eq!(button.status(), ClickStatus::Down);

        button.kill(&mut element, &mut h.arbiter);
        assert_eq!(h.arbiter.resolve_authoritative(), None);
        h.end_tick();

        // Dead elements ignore input entirely
        assert!(!button.update(&mut element, &mut h.ctx()).unwrap());
        assert_eq!(h.arbiter.claim_count(), 0);

        button.revive(&mut element);
        assert_eq!(button.status(), ClickStatus::Up);
        button.update(&mut element, &mut h.ctx()).unwrap();
        assert_eq!(button.status(), ClickStatus::Hover);
    }

    #[test]
    fn test_idle_gate_acts_only_without_authoritative_ui() {
        let mut h = Harness::new();
        let mut world_element = corner_element(&mut h, 0);
        let mut world_button = Clickable::new(ClickGate::WhenUiIdle);

        h.move_to(50.0, 50.0);
        world_button.update(&mut world_element, &mut h.ctx()).unwrap();
        assert_eq!(world_button.status(), ClickStatus::Hover);
        // Never claims
        assert_eq!(h.arbiter.claim_count(), 0);
        h.end_tick();

        let mut panel = corner_element(&mut h, -1);
        panel.activate_ui(&mut h.arbiter);
        h.press();
        world_button.update(&mut world_element, &mut h.ctx()).unwrap();
        assert_eq!(world_button.status(), ClickStatus::Hover);
    }
}
