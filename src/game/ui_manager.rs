// UiManager struct
//
// Holds every screen-space UI piece of the main world: the bottom button
// bar, the stats panel, the module menu (if open) and its Close button.

use crate::assets::GameAssets;
use crate::coords::{RatioVec, ResolutionContext};
use crate::gui::{BUTTON_LAYER, ModuleMenu};
use crate::render::{FontRenderer, ImageHandle};
use crate::ui::{ActiveUiArbitrator, HAlign, UiContext, UiGroup, UiOptions, VAlign, Widget, WidgetKey};

use super::types::{ModuleKind, Resources};

const STAT_PAD: f64 = 0.02;

/// UiManager holds all UI state and components of the main world
#[derive(Debug)]
pub struct UiManager {
    pub buttons: UiGroup,
    pub action_button: WidgetKey,
    pub end_week_button: WidgetKey,
    pub stats_button: WidgetKey,
    pub stats: UiGroup,
    population_text: WidgetKey,
    money_text: WidgetKey,
    research_text: WidgetKey,
    pub close_menu_button: Widget,
    pub module_menu: Option<ModuleMenu>,
}

impl UiManager {
    pub fn new(ctx: &mut UiContext, assets: &GameAssets, resources: &Resources) -> Self {
        let mut buttons = UiGroup::new();
        let action_button = buttons.add(Widget::button(
            ctx,
            RatioVec::new(1.0, 1.0),
            RatioVec::new(0.5, 0.25),
            UiOptions::new().align(HAlign::Right, VAlign::Bottom),
        ));
        let end_week_button = buttons.add(Widget::button(
            ctx,
            RatioVec::new(0.0, 0.875),
            RatioVec::new(0.5, 0.125),
            UiOptions::new().align(HAlign::Left, VAlign::Bottom).text("End"),
        ));
        let stats_button = buttons.add(Widget::button(
            ctx,
            RatioVec::new(0.0, 1.0),
            RatioVec::new(0.5, 0.125),
            UiOptions::new().align(HAlign::Left, VAlign::Bottom).text("Stats"),
        ));

        let top_left = UiOptions::new().align(HAlign::Left, VAlign::Top);
        let mut stats = UiGroup::new();

        let person_icon = Widget::image(ctx, RatioVec::new(0.01, 0.0), assets.person_icon, top_left.clone());
        let population = Widget::text(
            ctx,
            RatioVec::new(person_icon.element().right() + STAT_PAD, 0.0),
            top_left.clone().text(resources.population_label()),
        );

        let money_y = person_icon.element().bottom() + 0.01;
        let money_icon = Widget::image(ctx, RatioVec::new(0.01, money_y), assets.money_icon, top_left.clone());
        let money = Widget::text(
            ctx,
            RatioVec::new(money_icon.element().right() + STAT_PAD, money_y),
            top_left.clone().text(resources.money.to_string()),
        );

        let research_y = money_icon.element().bottom() + 0.02;
        let research_icon = Widget::image(ctx, RatioVec::new(0.01, research_y), assets.research_icon, top_left.clone());
        let research = Widget::text(
            ctx,
            RatioVec::new(money_icon.element().right() + STAT_PAD, research_y),
            top_left.text(resources.research.to_string()),
        );

        let population_text = stats.add(population);
        stats.add(person_icon);
        let money_text = stats.add(money);
        stats.add(money_icon);
        let research_text = stats.add(research);
        stats.add(research_icon);
        stats.set_active(false);

        let mut close_menu_button = Widget::button(
            ctx,
            RatioVec::new(1.0, 0.0),
            RatioVec::new(0.35, 0.125),
            UiOptions::new()
                .align(HAlign::Right, VAlign::Top)
                .layer(BUTTON_LAYER)
                .text("Close"),
        );
        close_menu_button.kill(ctx.arbiter);

        UiManager {
            buttons,
            action_button,
            end_week_button,
            stats_button,
            stats,
            population_text,
            money_text,
            research_text,
            close_menu_button,
            module_menu: None,
        }
    }

    pub fn toggle_stats(&mut self) {
        let active = !self.stats.is_active();
        self.stats.set_active(active);
    }

    pub fn refresh_stats(&mut self, res: &ResolutionContext, font: &dyn FontRenderer, resources: &Resources) {
        let labels = [
            (self.population_text, resources.population_label()),
            (self.money_text, resources.money.to_string()),
            (self.research_text, resources.research.to_string()),
        ];
        for (key, label) in labels {
            if let Some(text) = self.stats.get_mut(key) {
                text.set_text(res, font, &label);
            }
        }
    }

    pub fn set_action_icon(&mut self, icon: ImageHandle) {
        if let Some(button) = self.buttons.get_mut(self.action_button) {
            button.set_icon(icon);
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.module_menu.is_some()
    }

    /// Opens the menu for `kind`, replacing any open one
    pub fn open_menu(&mut self, ctx: &mut UiContext, kind: ModuleKind, assets: &GameAssets) {
        if let Some(mut previous) = self.module_menu.take() {
            previous.kill(ctx.arbiter);
        }
        self.module_menu = Some(ModuleMenu::open(ctx, kind, assets));
        self.close_menu_button.revive();
    }

    pub fn close_menu(&mut self, arbiter: &mut ActiveUiArbitrator) {
        if let Some(mut menu) = self.module_menu.take() {
            menu.kill(arbiter);
        }
        self.close_menu_button.kill(arbiter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingRenderer;
    use crate::ui::test_support::Harness;

    #[test]
    fn test_stats_start_hidden_and_toggle() {
        let mut h = Harness::new();
        let mut ui = UiManager::new(&mut h.ctx(), &GameAssets::placeholders(), &Resources::default());
        assert!(!ui.stats.is_active());

        ui.toggle_stats();
        let mut renderer = RecordingRenderer::new();
        ui.stats.render(&mut renderer, &h.resolution).unwrap();
        assert_eq!(renderer.texts(), vec!["0/1000", "10000", "0"]);
    }

    #[test]
    fn test_refresh_stats() {
        let mut h = Harness::new();
        let mut ui = UiManager::new(&mut h.ctx(), &GameAssets::placeholders(), &Resources::default());
        ui.toggle_stats();

        let resources = Resources {
            money: 9850,
            research: 3,
            ..Resources::default()
        };
        ui.refresh_stats(&h.resolution, &h.font, &resources);

        let mut renderer = RecordingRenderer::new();
        ui.stats.render(&mut renderer, &h.resolution).unwrap();
        assert_eq!(renderer.texts(), vec!["0/1000", "9850", "3"]);
    }

    #[test]
    fn test_close_button_lives_with_the_menu() {
        let mut h = Harness::new();
        let assets = GameAssets::placeholders();
        let mut ui = UiManager::new(&mut h.ctx(), &assets, &Resources::default());
        assert!(!ui.close_menu_button.is_alive());

        ui.open_menu(&mut h.ctx(), ModuleKind::Research, &assets);
        assert!(ui.is_menu_open());
        assert!(ui.close_menu_button.is_alive());

        ui.close_menu(&mut h.arbiter);
        assert!(!ui.is_menu_open());
        assert!(!ui.close_menu_button.is_alive());
    }
}
