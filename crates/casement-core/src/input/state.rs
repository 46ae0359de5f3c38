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

//! Aggregates the input event stream into pollable keyboard and mouse state.
//!
//! Both state types are driven the same way: the owner calls `begin_frame`
//! once per frame, feeds every [`InputEvent`] observed during that frame to
//! `apply`, and then answers polling queries from the accumulated state.
//! Edge queries (`was_pressed`, `was_released`) report transitions observed
//! since the last `begin_frame`; `is_down` reports held state across frames.

use super::events::InputEvent;
use super::keys::Key;
use super::modifiers::Modifiers;
use super::mouse::MouseButton;
use std::collections::BTreeSet;

/// Pollable keyboard state, derived from the input event stream.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    down: BTreeSet<Key>,
    pressed: BTreeSet<Key>,
    released: BTreeSet<Key>,
    modifiers: Modifiers,
}

impl KeyboardState {
    /// Creates an empty keyboard state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new frame, clearing the per-frame edge sets.
    ///
    /// Held keys stay down across frames.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    /// Feeds one input event into the state.
    ///
    /// Key repeats refresh the modifier snapshot but do not count as a new
    /// press. A release for a key that was never observed down (for example
    /// after focus was lost mid-press) is recorded as a release edge only.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyPressed { key, modifiers, .. } => {
                self.down.insert(*key);
                self.pressed.insert(*key);
                self.modifiers = *modifiers;
            }
            InputEvent::KeyRepeated { modifiers, .. } => {
                self.modifiers = *modifiers;
            }
            InputEvent::KeyReleased { key, modifiers, .. } => {
                self.down.remove(key);
                self.released.insert(*key);
                self.modifiers = *modifiers;
            }
            _ => {}
        }
    }

    /// Checks if a key is currently held down.
    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    /// Checks if a key went down during the current frame.
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Checks if a key went up during the current frame.
    pub fn was_released(&self, key: Key) -> bool {
        self.released.contains(&key)
    }

    /// Returns the modifiers observed with the most recent key event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Returns an iterator over all keys currently held down.
    pub fn down_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.down.iter().copied()
    }

    /// Clears all state, including held keys.
    pub fn reset(&mut self) {
        self.down.clear();
        self.pressed.clear();
        self.released.clear();
        self.modifiers = Modifiers::NONE;
    }
}

/// Pollable mouse state, derived from the input event stream.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    down: BTreeSet<MouseButton>,
    pressed: BTreeSet<MouseButton>,
    released: BTreeSet<MouseButton>,
    position: (f64, f64),
    has_position: bool,
    delta: (f64, f64),
    scroll: (f64, f64),
    inside: bool,
}

impl MouseState {
    /// Creates an empty mouse state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new frame, clearing the per-frame edges and accumulators.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
        self.delta = (0.0, 0.0);
        self.scroll = (0.0, 0.0);
    }

    /// Feeds one input event into the state.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::MouseButtonPressed { button, .. } => {
                self.down.insert(*button);
                self.pressed.insert(*button);
            }
            InputEvent::MouseButtonReleased { button, .. } => {
                self.down.remove(button);
                self.released.insert(*button);
            }
            InputEvent::MouseMoved { x, y } => {
                // The first report establishes the position without
                // producing a spurious delta from the (0, 0) default.
                if self.has_position {
                    self.delta.0 += x - self.position.0;
                    self.delta.1 += y - self.position.1;
                }
                self.position = (*x, *y);
                self.has_position = true;
            }
            InputEvent::MouseEntered => {
                self.inside = true;
            }
            InputEvent::MouseLeft => {
                self.inside = false;
            }
            InputEvent::MouseWheelScrolled { delta_x, delta_y } => {
                self.scroll.0 += delta_x;
                self.scroll.1 += delta_y;
            }
            _ => {}
        }
    }

    /// Checks if a button is currently held down.
    pub fn is_down(&self, button: MouseButton) -> bool {
        self.down.contains(&button)
    }

    /// Checks if a button went down during the current frame.
    pub fn was_pressed(&self, button: MouseButton) -> bool {
        self.pressed.contains(&button)
    }

    /// Checks if a button went up during the current frame.
    pub fn was_released(&self, button: MouseButton) -> bool {
        self.released.contains(&button)
    }

    /// Returns the last reported cursor position, relative to the client
    /// area. Remains `(0.0, 0.0)` until the cursor moves for the first time.
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    /// Returns the cursor movement accumulated during the current frame.
    pub fn delta(&self) -> (f64, f64) {
        self.delta
    }

    /// Returns the scroll offset accumulated during the current frame.
    pub fn scroll(&self) -> (f64, f64) {
        self.scroll
    }

    /// Checks if the cursor is currently inside the client area.
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Clears all state, including held buttons.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn press(key: Key) -> InputEvent {
        InputEvent::KeyPressed {
            key,
            scancode: 0,
            modifiers: Modifiers::NONE,
        }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::KeyReleased {
            key,
            scancode: 0,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_key_press_and_release_edges() {
        let mut state = KeyboardState::new();

        state.begin_frame();
        state.apply(&press(Key::W));
        assert!(state.is_down(Key::W));
        assert!(state.was_pressed(Key::W));
        assert!(!state.was_released(Key::W));

        // Next frame: still down, but no longer a fresh press.
        state.begin_frame();
        assert!(state.is_down(Key::W));
        assert!(!state.was_pressed(Key::W));

        state.apply(&release(Key::W));
        assert!(!state.is_down(Key::W));
        assert!(state.was_released(Key::W));
    }

    #[test]
    fn test_key_repeat_is_not_a_press() {
        let mut state = KeyboardState::new();

        state.begin_frame();
        state.apply(&press(Key::A));
        state.begin_frame();
        state.apply(&InputEvent::KeyRepeated {
            key: Key::A,
            scancode: 0,
            modifiers: Modifiers::SHIFT,
        });

        assert!(state.is_down(Key::A));
        assert!(!state.was_pressed(Key::A));
        assert_eq!(state.modifiers(), Modifiers::SHIFT);
    }

    #[test]
    fn test_release_without_press_is_benign() {
        let mut state = KeyboardState::new();
        state.begin_frame();
        state.apply(&release(Key::Escape));
        assert!(!state.is_down(Key::Escape));
        assert!(state.was_released(Key::Escape));
    }

    #[test]
    fn test_modifier_snapshot_follows_events() {
        let mut state = KeyboardState::new();
        state.begin_frame();
        state.apply(&InputEvent::KeyPressed {
            key: Key::C,
            scancode: 0,
            modifiers: Modifiers::CONTROL,
        });
        assert_eq!(state.modifiers(), Modifiers::CONTROL);

        state.apply(&InputEvent::KeyReleased {
            key: Key::C,
            scancode: 0,
            modifiers: Modifiers::NONE,
        });
        assert_eq!(state.modifiers(), Modifiers::NONE);
    }

    #[test]
    fn test_keyboard_reset_clears_held_keys() {
        let mut state = KeyboardState::new();
        state.begin_frame();
        state.apply(&press(Key::LeftShift));
        state.reset();
        assert!(!state.is_down(Key::LeftShift));
        assert_eq!(state.down_keys().count(), 0);
    }

    #[test]
    fn test_mouse_button_edges() {
        let mut state = MouseState::new();

        state.begin_frame();
        state.apply(&InputEvent::MouseButtonPressed {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        });
        assert!(state.is_down(MouseButton::Left));
        assert!(state.was_pressed(MouseButton::Left));

        state.begin_frame();
        state.apply(&InputEvent::MouseButtonReleased {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        });
        assert!(!state.is_down(MouseButton::Left));
        assert!(state.was_released(MouseButton::Left));
    }

    #[test]
    fn test_first_move_produces_no_delta() {
        let mut state = MouseState::new();
        state.begin_frame();
        state.apply(&InputEvent::MouseMoved { x: 400.0, y: 300.0 });

        let (dx, dy) = state.delta();
        assert_relative_eq!(dx, 0.0);
        assert_relative_eq!(dy, 0.0);
        assert_relative_eq!(state.position().0, 400.0);
        assert_relative_eq!(state.position().1, 300.0);
    }

    #[test]
    fn test_move_delta_accumulates_within_frame() {
        let mut state = MouseState::new();
        state.begin_frame();
        state.apply(&InputEvent::MouseMoved { x: 100.0, y: 100.0 });
        state.apply(&InputEvent::MouseMoved { x: 110.5, y: 90.0 });
        state.apply(&InputEvent::MouseMoved { x: 120.5, y: 95.5 });

        let (dx, dy) = state.delta();
        assert_relative_eq!(dx, 20.5);
        assert_relative_eq!(dy, -4.5);

        // The accumulator resets with the frame, the position does not.
        state.begin_frame();
        assert_relative_eq!(state.delta().0, 0.0);
        assert_relative_eq!(state.position().0, 120.5);
    }

    #[test]
    fn test_scroll_accumulates_and_resets() {
        let mut state = MouseState::new();
        state.begin_frame();
        state.apply(&InputEvent::MouseWheelScrolled {
            delta_x: 0.0,
            delta_y: 1.0,
        });
        state.apply(&InputEvent::MouseWheelScrolled {
            delta_x: -2.0,
            delta_y: 1.0,
        });

        let (sx, sy) = state.scroll();
        assert_relative_eq!(sx, -2.0);
        assert_relative_eq!(sy, 2.0);

        state.begin_frame();
        assert_relative_eq!(state.scroll().1, 0.0);
    }

    #[test]
    fn test_cursor_enter_leave() {
        let mut state = MouseState::new();
        assert!(!state.is_inside());
        state.apply(&InputEvent::MouseEntered);
        assert!(state.is_inside());
        state.apply(&InputEvent::MouseLeft);
        assert!(!state.is_inside());
    }

    #[test]
    fn test_keyboard_ignores_mouse_events() {
        let mut state = KeyboardState::new();
        state.begin_frame();
        state.apply(&InputEvent::MouseButtonPressed {
            button: MouseButton::Right,
            modifiers: Modifiers::NONE,
        });
        assert_eq!(state.down_keys().count(), 0);
    }
}
