// Copyright 2025 the Casement developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides translation from the native windowing backend (`glfw`) to the
//! toolkit's abstract events.
//!
//! This module is the adapter between GLFW's callback messages and the core
//! event model: every native message either maps to exactly one
//! [`WindowEvent`] or is deliberately dropped. The key, button, and modifier
//! vocabularies are mapped in both directions so that polling queries can be
//! forwarded to the native library as well.

use casement_core::event::WindowEvent;
use casement_core::input::{InputEvent, Key, Modifiers, MouseButton};
use casement_core::math::{Extent2D, Position2D};

/// Translates a `glfw::WindowEvent` into the toolkit's [`WindowEvent`].
///
/// Returns `None` for messages the toolkit deliberately drops: character
/// input with modifiers (the plain character stream already carries the
/// text; forwarding both would duplicate every keystroke) and mouse button
/// repeats, which the native library never generates.
pub fn translate_event(event: &glfw::WindowEvent) -> Option<WindowEvent> {
    match event {
        glfw::WindowEvent::Pos(x, y) => Some(WindowEvent::Moved {
            position: Position2D::new(*x, *y),
        }),
        glfw::WindowEvent::Size(width, height) => Some(WindowEvent::Resized {
            size: extent_from(*width, *height),
        }),
        glfw::WindowEvent::FramebufferSize(width, height) => {
            Some(WindowEvent::FramebufferResized {
                size: extent_from(*width, *height),
            })
        }
        glfw::WindowEvent::Refresh => Some(WindowEvent::RedrawRequested),
        glfw::WindowEvent::Close => Some(WindowEvent::CloseRequested),
        glfw::WindowEvent::Focus(focused) => Some(WindowEvent::FocusChanged { focused: *focused }),
        glfw::WindowEvent::Iconify(iconified) => Some(WindowEvent::IconifyChanged {
            iconified: *iconified,
        }),
        glfw::WindowEvent::Maximize(maximized) => Some(WindowEvent::MaximizeChanged {
            maximized: *maximized,
        }),
        glfw::WindowEvent::ContentScale(x, y) => {
            Some(WindowEvent::ContentScaleChanged { x: *x, y: *y })
        }
        glfw::WindowEvent::FileDrop(paths) => Some(WindowEvent::FilesDropped {
            paths: paths.clone(),
        }),
        glfw::WindowEvent::Key(key, scancode, action, mods) => {
            let key = map_key(*key);
            let scancode = *scancode;
            let modifiers = map_modifiers(*mods);
            let input = match action {
                glfw::Action::Press => InputEvent::KeyPressed {
                    key,
                    scancode,
                    modifiers,
                },
                glfw::Action::Repeat => InputEvent::KeyRepeated {
                    key,
                    scancode,
                    modifiers,
                },
                glfw::Action::Release => InputEvent::KeyReleased {
                    key,
                    scancode,
                    modifiers,
                },
            };
            Some(WindowEvent::Input(input))
        }
        glfw::WindowEvent::Char(character) => Some(WindowEvent::Input(InputEvent::CharTyped {
            character: *character,
        })),
        // Folded into the plain character stream above.
        glfw::WindowEvent::CharModifiers(..) => None,
        glfw::WindowEvent::MouseButton(button, action, mods) => {
            let button = map_mouse_button(*button);
            let modifiers = map_modifiers(*mods);
            let input = match action {
                glfw::Action::Press => InputEvent::MouseButtonPressed { button, modifiers },
                glfw::Action::Release => InputEvent::MouseButtonReleased { button, modifiers },
                glfw::Action::Repeat => return None,
            };
            Some(WindowEvent::Input(input))
        }
        glfw::WindowEvent::CursorPos(x, y) => {
            Some(WindowEvent::Input(InputEvent::MouseMoved { x: *x, y: *y }))
        }
        glfw::WindowEvent::CursorEnter(entered) => Some(WindowEvent::Input(if *entered {
            InputEvent::MouseEntered
        } else {
            InputEvent::MouseLeft
        })),
        glfw::WindowEvent::Scroll(delta_x, delta_y) => {
            Some(WindowEvent::Input(InputEvent::MouseWheelScrolled {
                delta_x: *delta_x,
                delta_y: *delta_y,
            }))
        }
    }
}

/// (Internal) Clamps a native size report to an extent. The native library
/// uses signed integers; negative values have been observed on some X11
/// configurations during teardown and are treated as zero.
fn extent_from(width: i32, height: i32) -> Extent2D {
    Extent2D::new(width.max(0) as u32, height.max(0) as u32)
}

/// (Internal) Maps the native modifier bitfield to [`Modifiers`].
pub(crate) fn map_modifiers(mods: glfw::Modifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if mods.contains(glfw::Modifiers::Shift) {
        out |= Modifiers::SHIFT;
    }
    if mods.contains(glfw::Modifiers::Control) {
        out |= Modifiers::CONTROL;
    }
    if mods.contains(glfw::Modifiers::Alt) {
        out |= Modifiers::ALT;
    }
    if mods.contains(glfw::Modifiers::Super) {
        out |= Modifiers::SUPER;
    }
    if mods.contains(glfw::Modifiers::CapsLock) {
        out |= Modifiers::CAPS_LOCK;
    }
    if mods.contains(glfw::Modifiers::NumLock) {
        out |= Modifiers::NUM_LOCK;
    }
    out
}

/// (Internal) Maps a native mouse button to the toolkit's [`MouseButton`].
///
/// Buttons four and five are the conventional back/forward side buttons;
/// the remaining buttons keep their one-based native numbering.
pub(crate) fn map_mouse_button(button: glfw::MouseButton) -> MouseButton {
    match button {
        glfw::MouseButton::Button1 => MouseButton::Left,
        glfw::MouseButton::Button2 => MouseButton::Right,
        glfw::MouseButton::Button3 => MouseButton::Middle,
        glfw::MouseButton::Button4 => MouseButton::Back,
        glfw::MouseButton::Button5 => MouseButton::Forward,
        glfw::MouseButton::Button6 => MouseButton::Other(6),
        glfw::MouseButton::Button7 => MouseButton::Other(7),
        glfw::MouseButton::Button8 => MouseButton::Other(8),
    }
}

/// (Internal) Maps a toolkit mouse button back to the native one, for
/// polling queries. Returns `None` for `Other` numbers the native library
/// has no button for.
pub(crate) fn mouse_button_to_glfw(button: MouseButton) -> Option<glfw::MouseButton> {
    match button {
        MouseButton::Left => Some(glfw::MouseButton::Button1),
        MouseButton::Right => Some(glfw::MouseButton::Button2),
        MouseButton::Middle => Some(glfw::MouseButton::Button3),
        MouseButton::Back => Some(glfw::MouseButton::Button4),
        MouseButton::Forward => Some(glfw::MouseButton::Button5),
        MouseButton::Other(6) => Some(glfw::MouseButton::Button6),
        MouseButton::Other(7) => Some(glfw::MouseButton::Button7),
        MouseButton::Other(8) => Some(glfw::MouseButton::Button8),
        MouseButton::Other(_) => None,
    }
}

/// (Internal) Maps a native key to the toolkit's [`Key`].
pub(crate) fn map_key(key: glfw::Key) -> Key {
    match key {
        glfw::Key::Space => Key::Space,
        glfw::Key::Apostrophe => Key::Apostrophe,
        glfw::Key::Comma => Key::Comma,
        glfw::Key::Minus => Key::Minus,
        glfw::Key::Period => Key::Period,
        glfw::Key::Slash => Key::Slash,
        glfw::Key::Num0 => Key::Num0,
        glfw::Key::Num1 => Key::Num1,
        glfw::Key::Num2 => Key::Num2,
        glfw::Key::Num3 => Key::Num3,
        glfw::Key::Num4 => Key::Num4,
        glfw::Key::Num5 => Key::Num5,
        glfw::Key::Num6 => Key::Num6,
        glfw::Key::Num7 => Key::Num7,
        glfw::Key::Num8 => Key::Num8,
        glfw::Key::Num9 => Key::Num9,
        glfw::Key::Semicolon => Key::Semicolon,
        glfw::Key::Equal => Key::Equal,
        glfw::Key::A => Key::A,
        glfw::Key::B => Key::B,
        glfw::Key::C => Key::C,
        glfw::Key::D => Key::D,
        glfw::Key::E => Key::E,
        glfw::Key::F => Key::F,
        glfw::Key::G => Key::G,
        glfw::Key::H => Key::H,
        glfw::Key::I => Key::I,
        glfw::Key::J => Key::J,
        glfw::Key::K => Key::K,
        glfw::Key::L => Key::L,
        glfw::Key::M => Key::M,
        glfw::Key::N => Key::N,
        glfw::Key::O => Key::O,
        glfw::Key::P => Key::P,
        glfw::Key::Q => Key::Q,
        glfw::Key::R => Key::R,
        glfw::Key::S => Key::S,
        glfw::Key::T => Key::T,
        glfw::Key::U => Key::U,
        glfw::Key::V => Key::V,
        glfw::Key::W => Key::W,
        glfw::Key::X => Key::X,
        glfw::Key::Y => Key::Y,
        glfw::Key::Z => Key::Z,
        glfw::Key::LeftBracket => Key::LeftBracket,
        glfw::Key::Backslash => Key::Backslash,
        glfw::Key::RightBracket => Key::RightBracket,
        glfw::Key::GraveAccent => Key::GraveAccent,
        glfw::Key::World1 => Key::World1,
        glfw::Key::World2 => Key::World2,
        glfw::Key::Escape => Key::Escape,
        glfw::Key::Enter => Key::Enter,
        glfw::Key::Tab => Key::Tab,
        glfw::Key::Backspace => Key::Backspace,
        glfw::Key::Insert => Key::Insert,
        glfw::Key::Delete => Key::Delete,
        glfw::Key::Right => Key::Right,
        glfw::Key::Left => Key::Left,
        glfw::Key::Down => Key::Down,
        glfw::Key::Up => Key::Up,
        glfw::Key::PageUp => Key::PageUp,
        glfw::Key::PageDown => Key::PageDown,
        glfw::Key::Home => Key::Home,
        glfw::Key::End => Key::End,
        glfw::Key::CapsLock => Key::CapsLock,
        glfw::Key::ScrollLock => Key::ScrollLock,
        glfw::Key::NumLock => Key::NumLock,
        glfw::Key::PrintScreen => Key::PrintScreen,
        glfw::Key::Pause => Key::Pause,
        glfw::Key::F1 => Key::F1,
        glfw::Key::F2 => Key::F2,
        glfw::Key::F3 => Key::F3,
        glfw::Key::F4 => Key::F4,
        glfw::Key::F5 => Key::F5,
        glfw::Key::F6 => Key::F6,
        glfw::Key::F7 => Key::F7,
        glfw::Key::F8 => Key::F8,
        glfw::Key::F9 => Key::F9,
        glfw::Key::F10 => Key::F10,
        glfw::Key::F11 => Key::F11,
        glfw::Key::F12 => Key::F12,
        glfw::Key::F13 => Key::F13,
        glfw::Key::F14 => Key::F14,
        glfw::Key::F15 => Key::F15,
        glfw::Key::F16 => Key::F16,
        glfw::Key::F17 => Key::F17,
        glfw::Key::F18 => Key::F18,
        glfw::Key::F19 => Key::F19,
        glfw::Key::F20 => Key::F20,
        glfw::Key::F21 => Key::F21,
        glfw::Key::F22 => Key::F22,
        glfw::Key::F23 => Key::F23,
        glfw::Key::F24 => Key::F24,
        glfw::Key::F25 => Key::F25,
        glfw::Key::Kp0 => Key::Kp0,
        glfw::Key::Kp1 => Key::Kp1,
        glfw::Key::Kp2 => Key::Kp2,
        glfw::Key::Kp3 => Key::Kp3,
        glfw::Key::Kp4 => Key::Kp4,
        glfw::Key::Kp5 => Key::Kp5,
        glfw::Key::Kp6 => Key::Kp6,
        glfw::Key::Kp7 => Key::Kp7,
        glfw::Key::Kp8 => Key::Kp8,
        glfw::Key::Kp9 => Key::Kp9,
        glfw::Key::KpDecimal => Key::KpDecimal,
        glfw::Key::KpDivide => Key::KpDivide,
        glfw::Key::KpMultiply => Key::KpMultiply,
        glfw::Key::KpSubtract => Key::KpSubtract,
        glfw::Key::KpAdd => Key::KpAdd,
        glfw::Key::KpEnter => Key::KpEnter,
        glfw::Key::KpEqual => Key::KpEqual,
        glfw::Key::LeftShift => Key::LeftShift,
        glfw::Key::LeftControl => Key::LeftControl,
        glfw::Key::LeftAlt => Key::LeftAlt,
        glfw::Key::LeftSuper => Key::LeftSuper,
        glfw::Key::RightShift => Key::RightShift,
        glfw::Key::RightControl => Key::RightControl,
        glfw::Key::RightAlt => Key::RightAlt,
        glfw::Key::RightSuper => Key::RightSuper,
        glfw::Key::Menu => Key::Menu,
        glfw::Key::Unknown => Key::Unknown,
    }
}

/// (Internal) Maps a toolkit key back to the native one, for polling
/// queries.
pub(crate) fn key_to_glfw(key: Key) -> glfw::Key {
    match key {
        Key::Space => glfw::Key::Space,
        Key::Apostrophe => glfw::Key::Apostrophe,
        Key::Comma => glfw::Key::Comma,
        Key::Minus => glfw::Key::Minus,
        Key::Period => glfw::Key::Period,
        Key::Slash => glfw::Key::Slash,
        Key::Num0 => glfw::Key::Num0,
        Key::Num1 => glfw::Key::Num1,
        Key::Num2 => glfw::Key::Num2,
        Key::Num3 => glfw::Key::Num3,
        Key::Num4 => glfw::Key::Num4,
        Key::Num5 => glfw::Key::Num5,
        Key::Num6 => glfw::Key::Num6,
        Key::Num7 => glfw::Key::Num7,
        Key::Num8 => glfw::Key::Num8,
        Key::Num9 => glfw::Key::Num9,
        Key::Semicolon => glfw::Key::Semicolon,
        Key::Equal => glfw::Key::Equal,
        Key::A => glfw::Key::A,
        Key::B => glfw::Key::B,
        Key::C => glfw::Key::C,
        Key::D => glfw::Key::D,
        Key::E => glfw::Key::E,
        Key::F => glfw::Key::F,
        Key::G => glfw::Key::G,
        Key::H => glfw::Key::H,
        Key::I => glfw::Key::I,
        Key::J => glfw::Key::J,
        Key::K => glfw::Key::K,
        Key::L => glfw::Key::L,
        Key::M => glfw::Key::M,
        Key::N => glfw::Key::N,
        Key::O => glfw::Key::O,
        Key::P => glfw::Key::P,
        Key::Q => glfw::Key::Q,
        Key::R => glfw::Key::R,
        Key::S => glfw::Key::S,
        Key::T => glfw::Key::T,
        Key::U => glfw::Key::U,
        Key::V => glfw::Key::V,
        Key::W => glfw::Key::W,
        Key::X => glfw::Key::X,
        Key::Y => glfw::Key::Y,
        Key::Z => glfw::Key::Z,
        Key::LeftBracket => glfw::Key::LeftBracket,
        Key::Backslash => glfw::Key::Backslash,
        Key::RightBracket => glfw::Key::RightBracket,
        Key::GraveAccent => glfw::Key::GraveAccent,
        Key::World1 => glfw::Key::World1,
        Key::World2 => glfw::Key::World2,
        Key::Escape => glfw::Key::Escape,
        Key::Enter => glfw::Key::Enter,
        Key::Tab => glfw::Key::Tab,
        Key::Backspace => glfw::Key::Backspace,
        Key::Insert => glfw::Key::Insert,
        Key::Delete => glfw::Key::Delete,
        Key::Right => glfw::Key::Right,
        Key::Left => glfw::Key::Left,
        Key::Down => glfw::Key::Down,
        Key::Up => glfw::Key::Up,
        Key::PageUp => glfw::Key::PageUp,
        Key::PageDown => glfw::Key::PageDown,
        Key::Home => glfw::Key::Home,
        Key::End => glfw::Key::End,
        Key::CapsLock => glfw::Key::CapsLock,
        Key::ScrollLock => glfw::Key::ScrollLock,
        Key::NumLock => glfw::Key::NumLock,
        Key::PrintScreen => glfw::Key::PrintScreen,
        Key::Pause => glfw::Key::Pause,
        Key::F1 => glfw::Key::F1,
        Key::F2 => glfw::Key::F2,
        Key::F3 => glfw::Key::F3,
        Key::F4 => glfw::Key::F4,
        Key::F5 => glfw::Key::F5,
        Key::F6 => glfw::Key::F6,
        Key::F7 => glfw::Key::F7,
        Key::F8 => glfw::Key::F8,
        Key::F9 => glfw::Key::F9,
        Key::F10 => glfw::Key::F10,
        Key::F11 => glfw::Key::F11,
        Key::F12 => glfw::Key::F12,
        Key::F13 => glfw::Key::F13,
        Key::F14 => glfw::Key::F14,
        Key::F15 => glfw::Key::F15,
        Key::F16 => glfw::Key::F16,
        Key::F17 => glfw::Key::F17,
        Key::F18 => glfw::Key::F18,
        Key::F19 => glfw::Key::F19,
        Key::F20 => glfw::Key::F20,
        Key::F21 => glfw::Key::F21,
        Key::F22 => glfw::Key::F22,
        Key::F23 => glfw::Key::F23,
        Key::F24 => glfw::Key::F24,
        Key::F25 => glfw::Key::F25,
        Key::Kp0 => glfw::Key::Kp0,
        Key::Kp1 => glfw::Key::Kp1,
        Key::Kp2 => glfw::Key::Kp2,
        Key::Kp3 => glfw::Key::Kp3,
        Key::Kp4 => glfw::Key::Kp4,
        Key::Kp5 => glfw::Key::Kp5,
        Key::Kp6 => glfw::Key::Kp6,
        Key::Kp7 => glfw::Key::Kp7,
        Key::Kp8 => glfw::Key::Kp8,
        Key::Kp9 => glfw::Key::Kp9,
        Key::KpDecimal => glfw::Key::KpDecimal,
        Key::KpDivide => glfw::Key::KpDivide,
        Key::KpMultiply => glfw::Key::KpMultiply,
        Key::KpSubtract => glfw::Key::KpSubtract,
        Key::KpAdd => glfw::Key::KpAdd,
        Key::KpEnter => glfw::Key::KpEnter,
        Key::KpEqual => glfw::Key::KpEqual,
        Key::LeftShift => glfw::Key::LeftShift,
        Key::LeftControl => glfw::Key::LeftControl,
        Key::LeftAlt => glfw::Key::LeftAlt,
        Key::LeftSuper => glfw::Key::LeftSuper,
        Key::RightShift => glfw::Key::RightShift,
        Key::RightControl => glfw::Key::RightControl,
        Key::RightAlt => glfw::Key::RightAlt,
        Key::RightSuper => glfw::Key::RightSuper,
        Key::Menu => glfw::Key::Menu,
        Key::Unknown => glfw::Key::Unknown,
    }
}
