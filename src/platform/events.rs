//! SDL2 event translation
//!
//! Device events are turned into [`InputEvent`]s and recorded; nothing here
//! acts on them. Letters and digits map to the ASCII code of their upper-case
//! character, named keys to the codes in [`keys`], and anything else passes
//! through as its raw SDL keycode.

use crate::coords::ScreenVec;
use crate::input_system::{InputEvent, keys, mouse_buttons};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

pub fn key_code(keycode: Keycode) -> u32 {
    let name = keycode.name();
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphanumeric() {
            return keys::letter(c);
        }
    }

    match keycode {
        Keycode::Backspace => keys::BACKSPACE,
        Keycode::Tab => keys::TAB,
        Keycode::Return | Keycode::KpEnter => keys::ENTER,
        Keycode::LShift | Keycode::RShift => keys::SHIFT,
        Keycode::LCtrl | Keycode::RCtrl => keys::CTRL,
        Keycode::LAlt | Keycode::RAlt => keys::ALT,
        Keycode::CapsLock => keys::CAPSLOCK,
        Keycode::Escape => keys::ESCAPE,
        Keycode::Space => keys::SPACE,
        Keycode::PageUp => keys::PAGEUP,
        Keycode::PageDown => keys::PAGEDOWN,
        Keycode::End => keys::END,
        Keycode::Home => keys::HOME,
        Keycode::Left => keys::LEFT,
        Keycode::Up => keys::UP,
        Keycode::Right => keys::RIGHT,
        Keycode::Down => keys::DOWN,
        Keycode::Insert => keys::INSERT,
        Keycode::Delete => keys::DELETE,
        Keycode::Semicolon => keys::SEMICOLON,
        Keycode::Equals => keys::EQUAL,
        Keycode::Comma => keys::COMMA,
        Keycode::Minus => keys::DASH,
        Keycode::Period => keys::PERIOD,
        Keycode::Slash => keys::SLASH,
        Keycode::Backquote => keys::GRAVE,
        Keycode::LeftBracket => keys::OPENBRACKET,
        Keycode::Backslash => keys::BACKSLASH,
        Keycode::RightBracket => keys::CLOSEBRACKET,
        Keycode::Quote => keys::QUOTE,
        other => other.into_i32() as u32,
    }
}

pub fn mouse_button_code(button: MouseButton) -> u32 {
    match button {
        MouseButton::Left => mouse_buttons::LEFT,
        MouseButton::Middle => mouse_buttons::MIDDLE,
        MouseButton::Right => mouse_buttons::RIGHT,
        MouseButton::X1 => 4,
        MouseButton::X2 => 5,
        MouseButton::Unknown => 0,
    }
}

/// The input event carried by `event`, if any
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => Some(InputEvent::KeyDown(key_code(*keycode))),
        Event::KeyUp {
            keycode: Some(keycode),
            ..
        } => Some(InputEvent::KeyUp(key_code(*keycode))),
        Event::MouseMotion { x, y, .. } => Some(InputEvent::MouseMove(ScreenVec::new(
            f64::from(*x),
            f64::from(*y),
        ))),
        Event::MouseButtonDown { mouse_btn, .. } => Some(InputEvent::MouseDown(mouse_button_code(*mouse_btn))),
        Event::MouseButtonUp { mouse_btn, .. } => Some(InputEvent::MouseUp(mouse_button_code(*mouse_btn))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits_use_upper_ascii() {
        assert_eq!(key_code(Keycode::A), 65);
        assert_eq!(key_code(Keycode::Z), 90);
        assert_eq!(key_code(Keycode::Num7), 55);
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(key_code(Keycode::Return), keys::ENTER);
        assert_eq!(key_code(Keycode::Escape), keys::ESCAPE);
        assert_eq!(key_code(Keycode::Left), keys::LEFT);
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(mouse_button_code(MouseButton::Left), mouse_buttons::LEFT);
        assert_eq!(mouse_button_code(MouseButton::Right), mouse_buttons::RIGHT);
    }

    #[test]
    fn test_translate_ignores_unrelated_events() {
        let event = Event::Quit { timestamp: 0 };
        assert_eq!(translate(&event), None);
    }
}
