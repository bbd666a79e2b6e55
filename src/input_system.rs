use crate::collision::ScreenRect;
use crate::coords::ScreenVec;
use std::collections::HashSet;

/// Keyboard codes.
///
/// Letters and digits use the ASCII code of their upper-case character
/// (`b'A' as u32`, `b'7' as u32`); see [`keys::letter`].
pub mod keys {
    pub const BACKSPACE: u32 = 8;
    pub const TAB: u32 = 9;
    pub const ENTER: u32 = 13;
    pub const SHIFT: u32 = 16;
    pub const CTRL: u32 = 17;
    pub const ALT: u32 = 18;
    pub const CAPSLOCK: u32 = 20;
    pub const ESCAPE: u32 = 27;
    pub const SPACE: u32 = 32;
    pub const PAGEUP: u32 = 33;
    pub const PAGEDOWN: u32 = 34;
    pub const END: u32 = 35;
    pub const HOME: u32 = 36;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
    pub const INSERT: u32 = 45;
    pub const DELETE: u32 = 46;

    // Numeric keypad
    pub const NUMPAD_0: u32 = 96;
    pub const NUMPAD_9: u32 = 105;

    pub const SEMICOLON: u32 = 186;
    pub const EQUAL: u32 = 187;
    pub const COMMA: u32 = 188;
    pub const DASH: u32 = 189;
    pub const PERIOD: u32 = 190;
    pub const SLASH: u32 = 191;
    pub const GRAVE: u32 = 192;
    pub const OPENBRACKET: u32 = 219;
    pub const BACKSLASH: u32 = 220;
    pub const CLOSEBRACKET: u32 = 221;
    pub const QUOTE: u32 = 222;

    /// Code for a letter or digit key
    pub fn letter(c: char) -> u32 {
        c.to_ascii_uppercase() as u32
    }
}

/// Mouse button codes
pub mod mouse_buttons {
    pub const LEFT: u32 = 1;
    pub const MIDDLE: u32 = 2;
    pub const RIGHT: u32 = 3;
}

/// Raw device event as delivered by the host.
///
/// Events are only *recorded* into the [`InputManager`]; game logic reads the
/// result synchronously at tick boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(u32),
    KeyUp(u32),
    MouseMove(ScreenVec),
    MouseDown(u32),
    MouseUp(u32),
}

/// Edge-triggered state for one family of buttons (keys or mouse buttons).
///
/// Codes are stored verbatim. Unknown codes are fine: they simply never
/// match a query game logic makes.
#[derive(Debug, Clone, Default)]
pub struct ButtonTracker {
    down: HashSet<u32>,
    just_pressed: Vec<u32>,
    just_released: Vec<u32>,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press. A repeated press while already down is ignored.
    pub fn press(&mut self, code: u32) {
        if self.down.insert(code) {
            self.just_pressed.push(code);
        }
    }

    /// Records a release. Releasing a code that is not down is ignored.
    pub fn release(&mut self, code: u32) {
        if self.down.remove(&code) {
            self.just_released.push(code);
        }
    }

    pub fn is_down(&self, code: u32) -> bool {
        self.down.contains(&code)
    }

    /// True only during the tick the press edge was recorded
    pub fn is_pressed(&self, code: u32) -> bool {
        self.just_pressed.contains(&code)
    }

    /// True only during the tick the release edge was recorded
    pub fn is_released(&self, code: u32) -> bool {
        self.just_released.contains(&code)
    }

    pub fn is_down_any(&self, codes: &[u32]) -> bool {
        codes.iter().any(|&code| self.is_down(code))
    }

    pub fn is_pressed_any(&self, codes: &[u32]) -> bool {
        codes.iter().any(|&code| self.is_pressed(code))
    }

    pub fn is_released_any(&self, codes: &[u32]) -> bool {
        codes.iter().any(|&code| self.is_released(code))
    }

    pub fn down_count(&self) -> usize {
        self.down.len()
    }

    /// Press edges of this tick, in arrival order
    pub fn pressed_this_tick(&self) -> &[u32] {
        &self.just_pressed
    }

    /// Release edges of this tick, in arrival order
    pub fn released_this_tick(&self) -> &[u32] {
        &self.just_released
    }

    fn clear_edges(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

/// Keyboard state
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    buttons: ButtonTracker,
}

impl Keyboard {
    pub fn on_key_down(&mut self, code: u32) {
        self.buttons.press(code);
    }

    pub fn on_key_up(&mut self, code: u32) {
        self.buttons.release(code);
    }

    pub fn is_down(&self, code: u32) -> bool {
        self.buttons.is_down(code)
    }

    pub fn is_pressed(&self, code: u32) -> bool {
        self.buttons.is_pressed(code)
    }

    pub fn is_released(&self, code: u32) -> bool {
        self.buttons.is_released(code)
    }

    pub fn buttons(&self) -> &ButtonTracker {
        &self.buttons
    }

    fn advance_tick(&mut self) {
        self.buttons.clear_edges();
    }
}

/// Mouse state: buttons plus pointer position in screen space
#[derive(Debug, Clone, Default)]
pub struct Mouse {
    buttons: ButtonTracker,
    position: ScreenVec,
    moved: bool,
}

impl Mouse {
    pub fn on_mouse_move(&mut self, position: ScreenVec) {
        self.position = position;
        self.moved = true;
    }

    pub fn on_mouse_down(&mut self, button: u32) {
        self.buttons.press(button);
    }

    pub fn on_mouse_up(&mut self, button: u32) {
        self.buttons.release(button);
    }

    pub fn position(&self) -> ScreenVec {
        self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// True if the pointer moved at least once this tick
    pub fn is_moving(&self) -> bool {
        self.moved
    }

    pub fn is_down(&self, button: u32) -> bool {
        self.buttons.is_down(button)
    }

    pub fn is_pressed(&self, button: u32) -> bool {
        self.buttons.is_pressed(button)
    }

    pub fn is_released(&self, button: u32) -> bool {
        self.buttons.is_released(button)
    }

    pub fn buttons(&self) -> &ButtonTracker {
        &self.buttons
    }

    /// True iff the pointer lies inside the closed rectangle `(x1,y1)-(x2,y2)`.
    pub fn is_colliding(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
        self.position.x >= x1 && self.position.x <= x2 && self.position.y >= y1 && self.position.y <= y2
    }

    pub fn is_colliding_rect(&self, rect: &ScreenRect) -> bool {
        rect.contains_point(self.position)
    }

    fn advance_tick(&mut self) {
        self.buttons.clear_edges();
        self.moved = false;
    }
}

/// InputManager turns queued device events into a tick-scoped polling API.
///
/// # Tick contract
///
/// 1. The host feeds every pending event through [`InputManager::handle_event`]
/// 2. UI and world logic poll `is_pressed` / `is_released` / `is_down`
/// 3. [`InputManager::advance_tick`] runs last, so each edge is seen by
///    exactly one tick's worth of consumers
#[derive(Debug, Clone, Default)]
pub struct InputManager {
    pub key: Keyboard,
    pub mouse: Mouse,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(code) => self.key.on_key_down(code),
            InputEvent::KeyUp(code) => self.key.on_key_up(code),
            InputEvent::MouseMove(position) => self.mouse.on_mouse_move(position),
            InputEvent::MouseDown(button) => self.mouse.on_mouse_down(button),
            InputEvent::MouseUp(button) => self.mouse.on_mouse_up(button),
        }
    }

    /// Clears this tick's press/release edges and the moved flag.
    /// Must be the last input-related call of a tick.
    pub fn advance_tick(&mut self) {
        self.key.advance_tick();
        self.mouse.advance_tick();
    }
}
