//! Screen-Space GUI System
//!
//! Menus assembled from the [`crate::ui`] toolkit. Each menu owns a
//! [`crate::ui::UiGroup`], so opening and closing it is a matter of building
//! the group and killing it again.
//!
//! # Available Components
//!
//! - [`ModuleMenu`] - Dev Ops / Research overlay opened from the action button
//!
//! # Example Usage
//!
//! ```rust,ignore
//! let mut menu = ModuleMenu::open(&mut ctx, ModuleKind::Develop, &assets);
//!
//! if let Some(MenuAction::Buy(kind)) = menu.update(&mut ctx)? {
//!     start_placement(kind);
//! }
//!
//! // Release every claim before dropping it
//! menu.kill(ctx.arbiter);
//! ```

pub mod menu;

pub use menu::{BUTTON_LAYER, MenuAction, ModuleMenu, PANEL_LAYER};
