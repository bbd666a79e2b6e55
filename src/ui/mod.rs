//! Screen-Space UI Components
//!
//! Every UI element is a rectangle laid out in *ratio space* (fractions of
//! the canvas) and quantized to the pixel grid through the shared
//! [`ResolutionContext`]. Pointer input is arbitrated: an element that wants
//! exclusive input *claims* it with the [`ActiveUiArbitrator`], and only the
//! authoritative claimant (smallest layer) reacts.
//!
//! # Layers
//!
//! Smaller layer values sit on top. The module menus use `-1` for the panel
//! and `-2` for buttons on it, so a hovered button beats the hovered panel.
//!
//! # Available Components
//!
//! - [`UiElement`] - positioned rectangle, options, claim helpers
//! - [`Clickable`] - press/hover/release state machine
//! - [`Widget`] - element + behavior + content (panel, button, image, text)
//! - [`UiGroup`] - show/hide a set of widgets together
//!
//! # Example Usage
//!
//! ```rust,ignore
//! let mut ctx = UiContext { resolution: &res, input: &input, arbiter: &mut arbiter, font: &font };
//! let mut end = Widget::button(&mut ctx, RatioVec::new(0.0, 0.875), RatioVec::new(0.5, 0.125),
//!     UiOptions::new().align(HAlign::Left, VAlign::Top).text("End"));
//!
//! // once per tick
//! if end.update(&mut ctx)? {
//!     week += 1;
//! }
//! end.render(renderer, ctx.resolution)?;
//! ```

pub mod arbiter;
pub mod clickable;
pub mod element;
pub mod group;
pub mod widget;

pub use arbiter::{ActiveUiArbitrator, ElementId};
pub use clickable::{ClickError, ClickGate, ClickHandler, ClickStatus, Clickable};
pub use element::{HAlign, UiElement, UiOptions, VAlign};
pub use group::{UiGroup, WidgetKey};
pub use widget::{Behavior, ButtonPalette, Content, Widget};

use crate::coords::ResolutionContext;
use crate::input_system::InputManager;
use crate::render::FontRenderer;

/// Everything a UI element needs while constructing or updating.
///
/// The resolution context, input and font are shared read-only; the
/// arbitrator is the one piece of shared state elements mutate.
pub struct UiContext<'a> {
    pub resolution: &'a ResolutionContext,
    pub input: &'a InputManager,
    pub arbiter: &'a mut ActiveUiArbitrator,
    pub font: &'a dyn FontRenderer,
}
