use super::UiContext;
use super::arbiter::ActiveUiArbitrator;
use super::clickable::ClickError;
use super::widget::Widget;
use crate::coords::ResolutionContext;
use crate::render::Renderer;

/// Index of a widget inside its [`UiGroup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetKey(usize);

/// A set of widgets shown, hidden and torn down together.
///
/// Widgets update and render in insertion order. An inactive group neither
/// updates nor renders, and drops every member's claim each tick so a hidden
/// panel cannot keep swallowing input.
#[derive(Debug)]
pub struct UiGroup {
    widgets: Vec<Widget>,
    active: bool,
}

impl Default for UiGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl UiGroup {
    pub fn new() -> Self {
        UiGroup {
            widgets: Vec::new(),
            active: true,
        }
    }

    pub fn add(&mut self, widget: Widget) -> WidgetKey {
        self.widgets.push(widget);
        WidgetKey(self.widgets.len() - 1)
    }

    pub fn get(&self, key: WidgetKey) -> Option<&Widget> {
        self.widgets.get(key.0)
    }

    pub fn get_mut(&mut self, key: WidgetKey) -> Option<&mut Widget> {
        self.widgets.get_mut(key.0)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Updates every member and returns the keys clicked this tick.
    ///
    /// A failing click handler does not stop the remaining members from
    /// updating; the first failure is returned once all have run.
    pub fn update(&mut self, ctx: &mut UiContext) -> Result<Vec<WidgetKey>, ClickError> {
        if !self.active {
            for widget in self.widgets.iter_mut() {
                widget.deactivate_ui(ctx.arbiter);
            }
            return Ok(Vec::new());
        }

        let mut clicked = Vec::new();
        let mut first_error = None;
        for (index, widget) in self.widgets.iter_mut().enumerate() {
            match widget.update(ctx) {
                Ok(true) => clicked.push(WidgetKey(index)),
                Ok(false) => {}
                Err(err) => {
                    log::error!("{}", err);
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(clicked),
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer, res: &ResolutionContext) -> Result<(), String> {
        if !self.active {
            return Ok(());
        }
        for widget in &self.widgets {
            widget.render(renderer, res)?;
        }
        Ok(())
    }

    pub fn kill(&mut self, arbiter: &mut ActiveUiArbitrator) {
        for widget in self.widgets.iter_mut() {
            widget.kill(arbiter);
        }
    }

    pub fn revive(&mut self) {
        for widget in self.widgets.iter_mut() {
            widget.revive();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::RatioVec;
    use crate::render::testing::RecordingRenderer;
    use crate::ui::element::{HAlign, UiOptions, VAlign};
    use crate::ui::test_support::Harness;

    fn top_left() -> UiOptions {
        UiOptions::new().align(HAlign::Left, VAlign::Top)
    }

    /// Full-canvas panel at layer -1 with a button at layer -2 in its corner
    fn menu(h: &mut Harness) -> (UiGroup, WidgetKey, WidgetKey) {
        let mut group = UiGroup::new();
        let panel = Widget::panel(
            &mut h.ctx(),
            RatioVec::new(0.0, 0.0),
            RatioVec::new(1.0, 1.0),
            top_left().layer(-1),
        );
        let button = Widget::button(
            &mut h.ctx(),
            RatioVec::new(0.0, 0.0),
            RatioVec::new(0.25, 0.25),
            top_left().layer(-2).text("Close"),
        );
        let panel = group.add(panel);
        let button = group.add(button);
        (group, panel, button)
    }

    #[test]
    fn test_button_over_panel_gets_the_click() {
        let mut h = Harness::new();
        let (mut group, panel, button) = menu(&mut h);

        h.move_to(50.0, 50.0);
        h.press();
        group.update(&mut h.ctx()).unwrap();
        h.end_tick();

        let button_id = group.get(button).unwrap().id();
        assert_eq!(h.arbiter.resolve_authoritative(), Some(button_id));
        assert_eq!(h.arbiter.claim_count(), 2);

        h.release();
        let clicked = group.update(&mut h.ctx()).unwrap();
        assert_eq!(clicked, vec![button]);
        assert!(!clicked.contains(&panel));
    }

    #[test]
    fn test_inactive_group_releases_claims_and_hides() {
        let mut h = Harness::new();
        let (mut group, _, _) = menu(&mut h);

        h.move_to(50.0, 50.0);
        group.update(&mut h.ctx()).unwrap();
        assert!(h.arbiter.has_authoritative());

        group.set_active(false);
        group.update(&mut h.ctx()).unwrap();
        assert!(!h.arbiter.has_authoritative());

        let mut renderer = RecordingRenderer::new();
        group.render(&mut renderer, &h.resolution).unwrap();
        assert!(renderer.calls.is_empty());
    }

    #[test]
    fn test_failure_does_not_stop_other_members() {
        let mut h = Harness::new();
        let mut group = UiGroup::new();
        let failing = Widget::button(
            &mut h.ctx(),
            RatioVec::new(0.0, 0.0),
            RatioVec::new(0.25, 0.25),
            top_left(),
        )
        .with_on_click(Box::new(|| Err("broken".to_string())));
        let panel = Widget::panel(
            &mut h.ctx(),
            RatioVec::new(0.0, 0.0),
            RatioVec::new(1.0, 1.0),
            top_left().layer(1),
        );
        group.add(failing);
        let panel = group.add(panel);

        h.move_to(50.0, 50.0);
        h.press();
        group.update(&mut h.ctx()).unwrap();
        h.end_tick();

        h.release();
        let result = group.update(&mut h.ctx());
        assert!(matches!(result, Err(ClickError::HandlerFailed { .. })));

        // The panel after the failing button still ran and holds its claim
        let panel_id = group.get(panel).unwrap().id();
        assert!(h.arbiter.is_claiming(panel_id));
    }

    #[test]
    fn test_kill_and_revive_all() {
        let mut h = Harness::new();
        let (mut group, _, button) = menu(&mut h);

        h.move_to(50.0, 50.0);
        group.update(&mut h.ctx()).unwrap();
        group.kill(&mut h.arbiter);
        assert_eq!(h.arbiter.claim_count(), 0);

        let mut renderer = RecordingRenderer::new();
        group.render(&mut renderer, &h.resolution).unwrap();
        assert!(renderer.calls.is_empty());

        group.revive();
        assert!(group.get(button).unwrap().is_alive());
        assert_eq!(group.len(), 2);
    }
}
