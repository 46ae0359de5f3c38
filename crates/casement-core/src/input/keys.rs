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

//! Defines the physical keyboard key vocabulary.
//!
//! Keys are identified by their position on a US-layout keyboard, following
//! the convention of desktop windowing libraries: the key labeled `A` on a
//! US keyboard is [`Key::A`] regardless of the active layout. The paired
//! [`Scancode`] carries the raw platform-specific code, which stays stable
//! for keys the library has no name for.

/// The platform-specific scancode of a key.
///
/// Scancodes are intended for saved keybindings: they identify a physical
/// key even when it maps to [`Key::Unknown`].
pub type Scancode = i32;

/// A physical key on a US-layout keyboard.
///
/// The set mirrors what desktop windowing libraries report, including the
/// keypad, function keys, and left/right modifier keys. Keys the native
/// library cannot name arrive as [`Key::Unknown`] with a valid scancode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// The space bar.
    Space,
    /// The `'` key.
    Apostrophe,
    /// The `,` key.
    Comma,
    /// The `-` key.
    Minus,
    /// The `.` key.
    Period,
    /// The `/` key.
    Slash,
    /// The `0` key above the letters.
    Num0,
    /// The `1` key above the letters.
    Num1,
    /// The `2` key above the letters.
    Num2,
    /// The `3` key above the letters.
    Num3,
    /// The `4` key above the letters.
    Num4,
    /// The `5` key above the letters.
    Num5,
    /// The `6` key above the letters.
    Num6,
    /// The `7` key above the letters.
    Num7,
    /// The `8` key above the letters.
    Num8,
    /// The `9` key above the letters.
    Num9,
    /// The `;` key.
    Semicolon,
    /// The `=` key.
    Equal,
    /// The `A` key.
    A,
    /// The `B` key.
    B,
    /// The `C` key.
    C,
    /// The `D` key.
    D,
    /// The `E` key.
    E,
    /// The `F` key.
    F,
    /// The `G` key.
    G,
    /// The `H` key.
    H,
    /// The `I` key.
    I,
    /// The `J` key.
    J,
    /// The `K` key.
    K,
    /// The `L` key.
    L,
    /// The `M` key.
    M,
    /// The `N` key.
    N,
    /// The `O` key.
    O,
    /// The `P` key.
    P,
    /// The `Q` key.
    Q,
    /// The `R` key.
    R,
    /// The `S` key.
    S,
    /// The `T` key.
    T,
    /// The `U` key.
    U,
    /// The `V` key.
    V,
    /// The `W` key.
    W,
    /// The `X` key.
    X,
    /// The `Y` key.
    Y,
    /// The `Z` key.
    Z,
    /// The `[` key.
    LeftBracket,
    /// The `\` key.
    Backslash,
    /// The `]` key.
    RightBracket,
    /// The `` ` `` key.
    GraveAccent,
    /// The first non-US key, layout dependent.
    World1,
    /// The second non-US key, layout dependent.
    World2,
    /// The Escape key.
    Escape,
    /// The Enter key.
    Enter,
    /// The Tab key.
    Tab,
    /// The Backspace key.
    Backspace,
    /// The Insert key.
    Insert,
    /// The Delete key.
    Delete,
    /// The right arrow key.
    Right,
    /// The left arrow key.
    Left,
    /// The down arrow key.
    Down,
    /// The up arrow key.
    Up,
    /// The Page Up key.
    PageUp,
    /// The Page Down key.
    PageDown,
    /// The Home key.
    Home,
    /// The End key.
    End,
    /// The Caps Lock key.
    CapsLock,
    /// The Scroll Lock key.
    ScrollLock,
    /// The Num Lock key.
    NumLock,
    /// The Print Screen key.
    PrintScreen,
    /// The Pause key.
    Pause,
    /// The F1 key.
    F1,
    /// The F2 key.
    F2,
    /// The F3 key.
    F3,
    /// The F4 key.
    F4,
    /// The F5 key.
    F5,
    /// The F6 key.
    F6,
    /// The F7 key.
    F7,
    /// The F8 key.
    F8,
    /// The F9 key.
    F9,
    /// The F10 key.
    F10,
    /// The F11 key.
    F11,
    /// The F12 key.
    F12,
    /// The F13 key.
    F13,
    /// The F14 key.
    F14,
    /// The F15 key.
    F15,
    /// The F16 key.
    F16,
    /// The F17 key.
    F17,
    /// The F18 key.
    F18,
    /// The F19 key.
    F19,
    /// The F20 key.
    F20,
    /// The F21 key.
    F21,
    /// The F22 key.
    F22,
    /// The F23 key.
    F23,
    /// The F24 key.
    F24,
    /// The F25 key.
    F25,
    /// The `0` key on the keypad.
    Kp0,
    /// The `1` key on the keypad.
    Kp1,
    /// The `2` key on the keypad.
    Kp2,
    /// The `3` key on the keypad.
    Kp3,
    /// The `4` key on the keypad.
    Kp4,
    /// The `5` key on the keypad.
    Kp5,
    /// The `6` key on the keypad.
    Kp6,
    /// The `7` key on the keypad.
    Kp7,
    /// The `8` key on the keypad.
    Kp8,
    /// The `9` key on the keypad.
    Kp9,
    /// The `.` key on the keypad.
    KpDecimal,
    /// The `/` key on the keypad.
    KpDivide,
    /// The `*` key on the keypad.
    KpMultiply,
    /// The `-` key on the keypad.
    KpSubtract,
    /// The `+` key on the keypad.
    KpAdd,
    /// The Enter key on the keypad.
    KpEnter,
    /// The `=` key on the keypad.
    KpEqual,
    /// The left Shift key.
    LeftShift,
    /// The left Control key.
    LeftControl,
    /// The left Alt key.
    LeftAlt,
    /// The left Super (Windows/Command) key.
    LeftSuper,
    /// The right Shift key.
    RightShift,
    /// The right Control key.
    RightControl,
    /// The right Alt key.
    RightAlt,
    /// The right Super (Windows/Command) key.
    RightSuper,
    /// The Menu key.
    Menu,
    /// A key the native library has no name for. The scancode still
    /// identifies it.
    Unknown,
}
