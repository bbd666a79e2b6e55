//! Module Menus
//!
//! Full-screen overlay opened from the action button for the selected
//! module. The backing panel sits on layer -1 and swallows pointer input for
//! the whole canvas; its buttons sit on layer -2 so they win over the panel.

use crate::assets::GameAssets;
use crate::coords::{RatioVec, ResolutionContext};
use crate::game::types::ModuleKind;
use crate::render::Renderer;
use crate::ui::{ActiveUiArbitrator, ClickError, HAlign, UiContext, UiGroup, UiOptions, VAlign, Widget, WidgetKey};

pub const PANEL_LAYER: i32 = -1;
pub const BUTTON_LAYER: i32 = -2;

/// Something the player asked for from a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Buy(ModuleKind),
}

#[derive(Debug)]
pub struct ModuleMenu {
    kind: ModuleKind,
    ui: UiGroup,
    buy: Option<WidgetKey>,
}

fn top_left() -> UiOptions {
    UiOptions::new().align(HAlign::Left, VAlign::Top)
}

impl ModuleMenu {
    /// Builds the menu for `kind`
    pub fn open(ctx: &mut UiContext, kind: ModuleKind, assets: &GameAssets) -> Self {
        let mut ui = UiGroup::new();
        ui.add(Widget::panel(
            ctx,
            RatioVec::new(0.0, 0.0),
            RatioVec::new(1.0, 1.0),
            top_left().layer(PANEL_LAYER),
        ));

        let buy = match kind {
            ModuleKind::Develop => Some(Self::develop_content(ctx, &mut ui, assets)),
            ModuleKind::Research => {
                ui.add(Widget::text(ctx, RatioVec::new(0.0, 0.0), top_left().text("Research")));
                None
            }
        };

        log::info!("Opened {} menu", kind.name());
        ModuleMenu { kind, ui, buy }
    }

    /// Title, price row and Buy button. Returns the Buy button's key.
    fn develop_content(ctx: &mut UiContext, ui: &mut UiGroup, assets: &GameAssets) -> WidgetKey {
        let left = UiOptions::new().align(HAlign::Left, VAlign::Center);

        let title = Widget::text(ctx, RatioVec::new(0.0, 0.0), top_left().text("Dev Ops"));
        let dev_module = Widget::text(ctx, RatioVec::new(0.0, 0.25), top_left().text("Dev Module"));
        let row = dev_module.element().bottom();

        let money_icon = Widget::image(ctx, RatioVec::new(0.0, row), assets.money_icon, left.clone());
        let cost = Widget::text(
            ctx,
            RatioVec::new(money_icon.element().right() + 0.01, row + 0.03),
            left.clone().text("150"),
        );
        let pop_icon = Widget::image(
            ctx,
            RatioVec::new(cost.element().right() + 0.05, row),
            assets.person_icon,
            left.clone(),
        );
        let pop_cost = Widget::text(
            ctx,
            RatioVec::new(pop_icon.element().right() + 0.02, row + 0.03),
            left.text("1"),
        );

        let buy = Widget::button(
            ctx,
            RatioVec::new(0.98, row),
            RatioVec::new(0.25, 0.15),
            UiOptions::new()
                .align(HAlign::Right, VAlign::Bottom)
                .layer(BUTTON_LAYER)
                .text("Buy"),
        );

        ui.add(title);
        ui.add(dev_module);
        ui.add(cost);
        ui.add(money_icon);
        ui.add(pop_icon);
        ui.add(pop_cost);
        ui.add(buy)
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn update(&mut self, ctx: &mut UiContext) -> Result<Option<MenuAction>, ClickError> {
        let clicked = self.ui.update(ctx)?;
        let bought = self.buy.is_some_and(|buy| clicked.contains(&buy));
        Ok(bought.then_some(MenuAction::Buy(self.kind)))
    }

    pub fn render(&self, renderer: &mut dyn Renderer, res: &ResolutionContext) -> Result<(), String> {
        self.ui.render(renderer, res)
    }

    /// Releases every claim. Call before dropping the menu.
    pub fn kill(&mut self, arbiter: &mut ActiveUiArbitrator) {
        self.ui.kill(arbiter);
        log::info!("Closed {} menu", self.kind.name());
    }
}
