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

//! # Casement SDK
//!
//! The public-facing API of the Casement windowing toolkit: a
//! desktop-forms-style [`GameWindow`] over any platform backend, with the
//! GLFW backend wired up as the default.
//!
//! ```no_run
//! use casement_sdk::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut platform = GlfwPlatform::init()?;
//!     let window = GlfwWindowBuilder::new()
//!         .with_title("Hello")
//!         .with_size(800, 600)
//!         .build(&mut platform)?;
//!     let mut game = GameWindow::new(window);
//!
//!     while !game.should_close() {
//!         for event in game.poll_events() {
//!             log::debug!("{event:?}");
//!         }
//!         game.swap_buffers();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod game_window;

pub use game_window::GameWindow;

/// A [`GameWindow`] backed by the GLFW platform implementation.
pub type GlfwGameWindow = GameWindow<casement_glfw::GlfwWindow>;

/// The common imports for applications built on the toolkit.
pub mod prelude {
    pub use crate::{GameWindow, GlfwGameWindow};
    pub use casement_core::error::PlatformError;
    pub use casement_core::event::WindowEvent;
    pub use casement_core::input::{
        InputEvent, Key, KeyboardState, Modifiers, MouseButton, MouseState,
    };
    pub use casement_core::math::{Extent2D, FrameExtents, Position2D, Rect};
    pub use casement_core::platform::{
        CursorMode, MonitorInfo, PlatformWindow, StandardCursor, VideoMode, VsyncMode,
        WindowConfig, WindowState,
    };
    pub use casement_glfw::{GlfwPlatform, GlfwWindow, GlfwWindowBuilder};
}
