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

//! Defines the backend-agnostic input event stream.

use super::keys::{Key, Scancode};
use super::modifiers::Modifiers;
use super::mouse::MouseButton;

/// A user input event, translated from the native callback stream.
///
/// This enum is backend-agnostic: a platform backend translates its native
/// input callbacks into these variants, and everything above the backend
/// consumes only this representation.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A keyboard key was pressed.
    KeyPressed {
        /// The physical key.
        key: Key,
        /// The platform-specific scancode of the key.
        scancode: Scancode,
        /// The modifiers held when the key was pressed.
        modifiers: Modifiers,
    },
    /// A held keyboard key generated a repeat.
    KeyRepeated {
        /// The physical key.
        key: Key,
        /// The platform-specific scancode of the key.
        scancode: Scancode,
        /// The modifiers held during the repeat.
        modifiers: Modifiers,
    },
    /// A keyboard key was released.
    KeyReleased {
        /// The physical key.
        key: Key,
        /// The platform-specific scancode of the key.
        scancode: Scancode,
        /// The modifiers held when the key was released.
        modifiers: Modifiers,
    },
    /// A Unicode character was produced by keyboard input.
    ///
    /// This is the layout-aware text stream; use it for text entry rather
    /// than reconstructing characters from key events.
    CharTyped {
        /// The character that was typed.
        character: char,
    },
    /// A mouse button was pressed.
    MouseButtonPressed {
        /// The mouse button that was pressed.
        button: MouseButton,
        /// The modifiers held when the button was pressed.
        modifiers: Modifiers,
    },
    /// A mouse button was released.
    MouseButtonReleased {
        /// The mouse button that was released.
        button: MouseButton,
        /// The modifiers held when the button was released.
        modifiers: Modifiers,
    },
    /// The mouse cursor moved.
    MouseMoved {
        /// The new x-coordinate of the cursor, relative to the client area.
        x: f64,
        /// The new y-coordinate of the cursor, relative to the client area.
        y: f64,
    },
    /// The mouse cursor entered the client area.
    MouseEntered,
    /// The mouse cursor left the client area.
    MouseLeft,
    /// The mouse wheel was scrolled.
    MouseWheelScrolled {
        /// The horizontal scroll offset.
        delta_x: f64,
        /// The vertical scroll offset.
        delta_y: f64,
    },
}
