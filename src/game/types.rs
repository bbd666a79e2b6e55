// Shared enums and helper structs used throughout the game

use crate::assets::GameAssets;
use crate::render::ImageHandle;

/// Kinds of module that can be placed in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Develop,
    Research,
}

impl ModuleKind {
    pub fn name(&self) -> &'static str {
        match self {
            ModuleKind::Develop => "Develop",
            ModuleKind::Research => "Research",
        }
    }

    /// Sprite drawn in the world
    pub fn image(&self, assets: &GameAssets) -> ImageHandle {
        match self {
            ModuleKind::Develop => assets.factory,
            ModuleKind::Research => assets.lab,
        }
    }

    /// Icon shown on the action button while this kind is selected
    pub fn action_icon(&self, assets: &GameAssets) -> ImageHandle {
        match self {
            ModuleKind::Develop => assets.money_icon,
            ModuleKind::Research => assets.research_icon,
        }
    }
}

/// Economy counters shown in the stats panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resources {
    pub population: u32,
    pub population_max: u32,
    pub money: i64,
    pub research: u32,
    pub week: u32,
}

impl Default for Resources {
    fn default() -> Self {
        Resources {
            population: 0,
            population_max: 1000,
            money: 10000,
            research: 0,
            week: 1,
        }
    }
}

impl Resources {
    pub fn population_label(&self) -> String {
        format!("{}/{}", self.population, self.population_max)
    }
}

/// How a module is tinted this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleHighlight {
    None,
    /// Placement mode: every existing module is flagged as an obstacle
    Blocked,
    Selected,
}
