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

//! Provides the backend-agnostic input vocabulary and polling state.
//!
//! The types here mirror what desktop windowing libraries report: physical
//! keys, mouse buttons, and modifier flags, plus the [`InputEvent`] stream a
//! backend produces from them. [`KeyboardState`] and [`MouseState`] aggregate
//! that stream so callers can poll "is this key down right now" instead of
//! tracking transitions themselves.

pub mod events;
pub mod keys;
pub mod modifiers;
pub mod mouse;
pub mod state;

pub use self::events::InputEvent;
pub use self::keys::{Key, Scancode};
pub use self::modifiers::Modifiers;
pub use self::mouse::MouseButton;
pub use self::state::{KeyboardState, MouseState};
