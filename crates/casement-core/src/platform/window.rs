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

//! Defines the window contract every platform backend implements.
//!
//! The trait covers the complete window surface the higher layers need, so
//! that facade logic can be written against it once and exercised in tests
//! with a scripted backend. Implementations forward each call to the native
//! library; only state the native library cannot answer (such as the title
//! on some platforms) may be tracked by the backend itself.
//!
//! Window operations are main-thread affine on most platforms, so the trait
//! deliberately carries no `Send` or `Sync` bound.

use crate::error::PlatformError;
use crate::event::WindowEvent;
use crate::input::{Key, MouseButton};
use crate::math::{Extent2D, FrameExtents, Position2D, Rect};
use crate::platform::monitor::MonitorInfo;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the cursor behaves while over the client area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorMode {
    /// The cursor is visible and moves freely.
    #[default]
    Normal,
    /// The cursor is hidden while over the client area but moves freely.
    Hidden,
    /// The cursor is hidden and locked to the window, providing unbounded
    /// virtual movement. Used for first-person camera controls.
    Disabled,
}

/// The standard cursor shapes provided by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StandardCursor {
    /// The regular arrow.
    #[default]
    Arrow,
    /// The text-input I-beam.
    IBeam,
    /// The crosshair.
    Crosshair,
    /// The pointing hand.
    Hand,
    /// The horizontal-resize arrows.
    HResize,
    /// The vertical-resize arrows.
    VResize,
}

/// Buffer-swap synchronization with the monitor refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VsyncMode {
    /// Swap immediately, without waiting for the refresh.
    Off,
    /// Wait for one vertical refresh per swap.
    #[default]
    On,
    /// Late-swap tearing: wait for the refresh, unless the frame is already
    /// late. Falls back to [`VsyncMode::On`] where unsupported.
    Adaptive,
}

/// The overall presentation state of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowState {
    /// Plain windowed, neither minimized nor maximized.
    #[default]
    Normal,
    /// Iconified to the taskbar or dock.
    Minimized,
    /// Maximized to fill the monitor work area.
    Maximized,
    /// Exclusive fullscreen on a monitor.
    Fullscreen,
}

/// The client API the window's context is created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClientApi {
    /// Desktop OpenGL.
    #[default]
    OpenGl,
    /// OpenGL ES.
    OpenGlEs,
    /// No client API; the window is used with an external renderer.
    NoApi,
}

/// The OpenGL profile to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GlProfile {
    /// Let the platform pick a profile.
    #[default]
    Any,
    /// The core profile.
    Core,
    /// The compatibility profile.
    Compat,
}

/// Settings for the rendering context created with a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// The client API to create the context for.
    pub api: ClientApi,
    /// The minimum (major, minor) context version to request.
    pub version: (u32, u32),
    /// The OpenGL profile to request. Only meaningful for OpenGL 3.2+.
    pub profile: GlProfile,
    /// Whether to request a forward-compatible context. Required for core
    /// contexts on macOS.
    pub forward_compat: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            api: ClientApi::OpenGl,
            version: (1, 0),
            profile: GlProfile::Any,
            forward_compat: false,
        }
    }
}

/// Creation-time attributes for a window.
///
/// Defaults match the native library's: a visible, resizable, decorated
/// window. Vsync defaults to on, which is the convention for a game window
/// even though the native library leaves the swap interval unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// The initial window title.
    pub title: String,
    /// The initial client-area size, in screen coordinates.
    pub size: Extent2D,
    /// The initial client-area position. `None` lets the platform place the
    /// window.
    pub position: Option<Position2D>,
    /// Whether the user can resize the window.
    pub resizable: bool,
    /// Whether the window is visible after creation.
    pub visible: bool,
    /// Whether the window has frame decorations.
    pub decorated: bool,
    /// Whether the window starts maximized.
    pub maximized: bool,
    /// Whether the framebuffer supports transparency.
    pub transparent: bool,
    /// MSAA sample count for the default framebuffer. `None` leaves the
    /// platform default.
    pub samples: Option<u32>,
    /// Buffer-swap synchronization for the window's context.
    pub vsync: VsyncMode,
    /// Settings for the rendering context.
    pub context: ContextConfig,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Casement".to_string(),
            size: Extent2D::new(1024, 768),
            position: None,
            resizable: true,
            visible: true,
            decorated: true,
            maximized: false,
            transparent: false,
            samples: None,
            vsync: VsyncMode::On,
            context: ContextConfig::default(),
        }
    }
}

/// The contract between a native window and the rest of the toolkit.
///
/// Any windowing backend (GLFW, SDL, a test double, etc.) can implement
/// this trait to be driven by the higher layers. Calls are 1:1 forwards to
/// the native library; the backend's one active duty is `pump_events`,
/// which drains the native callback queue, translates each message into a
/// [`WindowEvent`], and publishes it on the channel behind [`events`].
///
/// [`events`]: PlatformWindow::events
pub trait PlatformWindow {
    /// Processes pending native events without blocking.
    ///
    /// Translated events become available on the [`events`] receiver in the
    /// order the native library reported them.
    ///
    /// [`events`]: PlatformWindow::events
    fn pump_events(&mut self);

    /// Blocks until at least one event arrives or the timeout elapses, then
    /// processes pending events like [`pump_events`].
    ///
    /// With `None` the wait is unbounded.
    ///
    /// [`pump_events`]: PlatformWindow::pump_events
    fn wait_events(&mut self, timeout: Option<Duration>);

    /// Posts an empty event to wake up a blocking [`wait_events`] call.
    ///
    /// Safe to call from any thread on most platforms; used to interrupt an
    /// event-driven loop from a worker.
    ///
    /// [`wait_events`]: PlatformWindow::wait_events
    fn post_empty_event(&mut self);

    /// Returns the receiver end of the translated event stream.
    fn events(&self) -> &flume::Receiver<WindowEvent>;

    /// Returns the window title.
    fn title(&self) -> String;

    /// Sets the window title.
    fn set_title(&mut self, title: &str);

    /// Returns the position of the client area's top-left corner, in screen
    /// coordinates.
    fn position(&self) -> Position2D;

    /// Moves the window so its client area's top-left corner is at the given
    /// screen position.
    fn set_position(&mut self, position: Position2D);

    /// Returns the size of the client area, in screen coordinates.
    fn size(&self) -> Extent2D;

    /// Resizes the client area.
    fn set_size(&mut self, size: Extent2D);

    /// Returns the size of the framebuffer, in pixels.
    fn framebuffer_size(&self) -> Extent2D;

    /// Returns the thickness of the window's frame decorations.
    fn frame_extents(&self) -> FrameExtents;

    /// Returns the window's (horizontal, vertical) content scale.
    fn content_scale(&self) -> (f32, f32);

    /// Constrains the client-area size the user can resize to.
    ///
    /// `None` removes the corresponding limit.
    fn set_size_limits(&mut self, min: Option<Extent2D>, max: Option<Extent2D>);

    /// Checks if the window is visible.
    fn is_visible(&self) -> bool;

    /// Makes the window visible.
    fn show(&mut self);

    /// Hides the window.
    fn hide(&mut self);

    /// Checks if the window has input focus.
    fn is_focused(&self) -> bool;

    /// Brings the window to front and gives it input focus.
    fn focus(&mut self);

    /// Requests user attention (taskbar flash or dock bounce) without
    /// stealing focus.
    fn request_attention(&mut self);

    /// Checks if the window is iconified.
    fn is_iconified(&self) -> bool;

    /// Iconifies (minimizes) the window.
    fn iconify(&mut self);

    /// Checks if the window is maximized.
    fn is_maximized(&self) -> bool;

    /// Maximizes the window.
    fn maximize(&mut self);

    /// Restores the window from iconified or maximized state.
    fn restore(&mut self);

    /// Checks if the window is in exclusive fullscreen mode.
    fn is_fullscreen(&self) -> bool;

    /// Makes the window fullscreen on the given monitor, or on the primary
    /// monitor if `None`.
    fn enter_fullscreen(&mut self, monitor: Option<&MonitorInfo>) -> Result<(), PlatformError>;

    /// Returns the window to windowed mode with the given client bounds.
    ///
    /// The native library does not remember pre-fullscreen placement, so the
    /// caller supplies the bounds to restore.
    fn exit_fullscreen(&mut self, bounds: Rect);

    /// Checks the window's should-close flag.
    ///
    /// The flag is raised by a user close request and can be set or cleared
    /// by the application at any time.
    fn should_close(&self) -> bool;

    /// Sets or clears the should-close flag.
    fn set_should_close(&mut self, value: bool);

    /// Checks if the window has frame decorations.
    fn is_decorated(&self) -> bool;

    /// Enables or disables frame decorations.
    fn set_decorated(&mut self, decorated: bool);

    /// Checks if the user can resize the window.
    fn is_resizable(&self) -> bool;

    /// Enables or disables user resizing.
    fn set_resizable(&mut self, resizable: bool);

    /// Returns the window opacity, from `0.0` (transparent) to `1.0`.
    fn opacity(&self) -> f32;

    /// Sets the window opacity, from `0.0` (transparent) to `1.0`.
    fn set_opacity(&mut self, opacity: f32);

    /// Returns the current cursor mode.
    fn cursor_mode(&self) -> CursorMode;

    /// Sets the cursor mode.
    fn set_cursor_mode(&mut self, mode: CursorMode);

    /// Returns the cursor position, relative to the client area.
    fn cursor_position(&self) -> (f64, f64);

    /// Moves the cursor to a position relative to the client area.
    ///
    /// The window must be focused for this to take effect.
    fn set_cursor_position(&mut self, x: f64, y: f64);

    /// Selects a standard cursor shape for the client area.
    fn set_cursor_shape(&mut self, shape: StandardCursor);

    /// Samples whether a key is currently down, directly from the native
    /// library.
    ///
    /// [`Key::Unknown`] always reports `false`.
    fn is_key_down(&self, key: Key) -> bool;

    /// Samples whether a mouse button is currently down, directly from the
    /// native library.
    fn is_mouse_button_down(&self, button: MouseButton) -> bool;

    /// Returns snapshots of all connected monitors.
    fn monitors(&self) -> Vec<MonitorInfo>;

    /// Returns a snapshot of the primary monitor, if any is connected.
    fn primary_monitor(&self) -> Option<MonitorInfo>;

    /// Returns the clipboard contents, if they hold a UTF-8 string.
    fn clipboard(&self) -> Option<String>;

    /// Replaces the clipboard contents.
    fn set_clipboard(&mut self, text: &str);

    /// Makes the window's rendering context current on the calling thread.
    fn make_current(&mut self);

    /// Swaps the front and back buffers.
    fn swap_buffers(&mut self);

    /// Sets buffer-swap synchronization for the window's context.
    ///
    /// The context must be current on the calling thread.
    fn set_vsync(&mut self, mode: VsyncMode);
}
