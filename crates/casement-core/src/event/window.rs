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

//! Defines the window notification stream.

use crate::input::InputEvent;
use crate::math::{Extent2D, Position2D};
use std::path::PathBuf;

/// A window-system notification, translated from the native callback stream.
///
/// One variant exists per native window callback. User input is nested under
/// [`WindowEvent::Input`] so consumers that only care about window lifecycle
/// can match it with a single arm.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    /// The window was moved.
    Moved {
        /// The new position of the client area's top-left corner, in screen
        /// coordinates.
        position: Position2D,
    },
    /// The client area was resized.
    ///
    /// This is the size in screen coordinates; on a scaled monitor it can
    /// differ from the framebuffer size.
    Resized {
        /// The new size of the client area.
        size: Extent2D,
    },
    /// The framebuffer was resized.
    ///
    /// Use this size for viewport and projection setup.
    FramebufferResized {
        /// The new size of the framebuffer, in pixels.
        size: Extent2D,
    },
    /// The window contents were damaged and need to be redrawn.
    RedrawRequested,
    /// The user requested that the window close.
    ///
    /// The request also raises the window's should-close flag; the
    /// application may veto it by clearing the flag.
    CloseRequested,
    /// The window gained or lost input focus.
    FocusChanged {
        /// `true` if the window now has focus.
        focused: bool,
    },
    /// The window was iconified (minimized) or restored from that state.
    IconifyChanged {
        /// `true` if the window is now iconified.
        iconified: bool,
    },
    /// The window was maximized or restored from that state.
    MaximizeChanged {
        /// `true` if the window is now maximized.
        maximized: bool,
    },
    /// The content scale of the window changed, for example after moving to
    /// a monitor with a different DPI.
    ContentScaleChanged {
        /// The new horizontal content scale.
        x: f32,
        /// The new vertical content scale.
        y: f32,
    },
    /// Files were dragged and dropped onto the window.
    FilesDropped {
        /// The paths of the dropped files, in the order reported.
        paths: Vec<PathBuf>,
    },
    /// A user input event.
    Input(InputEvent),
}
