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

//! A GLFW-based implementation of the `PlatformWindow` trait.

use casement_core::error::PlatformError;
use casement_core::event::{EventBus, WindowEvent};
use casement_core::input::{Key, MouseButton};
use casement_core::math::{Extent2D, FrameExtents, Position2D, Rect};
use casement_core::platform::{
    ClientApi, CursorMode, MonitorInfo, PlatformWindow, StandardCursor, VsyncMode, WindowConfig,
};
use glfw::Context;
use std::time::Duration;

use crate::input;
use crate::monitor;
use crate::platform::{map_vsync, GlfwPlatform};

/// A wrapper around a native GLFW window that implements [`PlatformWindow`].
///
/// Owns the native window, its callback receiver, and the [`EventBus`] the
/// translated events are published on. Most trait methods are 1:1 forwards
/// to the native window; the adaptation work happens in the event pump,
/// which drains the native receiver and translates each message.
///
/// The title is mirrored locally because the native library provides no
/// query for it.
pub struct GlfwWindow {
    native: glfw::PWindow,
    native_events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    bus: EventBus<WindowEvent>,
    title: String,
}

/// A builder for creating [`GlfwWindow`] instances.
///
/// This follows the builder pattern to provide an ergonomic API over
/// [`WindowConfig`]; every setter has a config field behind it.
pub struct GlfwWindowBuilder {
    config: WindowConfig,
}

impl GlfwWindowBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: WindowConfig::default(),
        }
    }

    /// Creates a builder starting from an existing configuration.
    pub fn from_config(config: WindowConfig) -> Self {
        Self { config }
    }

    /// Sets the title of the window to be built.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Sets the initial client-area size of the window to be built.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.size = Extent2D::new(width, height);
        self
    }

    /// Sets the initial client-area position. Without it the platform picks
    /// a placement.
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.config.position = Some(Position2D::new(x, y));
        self
    }

    /// Sets whether the user can resize the window.
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.config.resizable = resizable;
        self
    }

    /// Sets whether the window is visible after creation.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.config.visible = visible;
        self
    }

    /// Sets whether the window has frame decorations.
    pub fn with_decorated(mut self, decorated: bool) -> Self {
        self.config.decorated = decorated;
        self
    }

    /// Sets whether the window starts maximized.
    pub fn with_maximized(mut self, maximized: bool) -> Self {
        self.config.maximized = maximized;
        self
    }

    /// Sets the buffer-swap synchronization for the window's context.
    pub fn with_vsync(mut self, vsync: VsyncMode) -> Self {
        self.config.vsync = vsync;
        self
    }

    /// Builds the window on the given platform.
    ///
    /// Takes the platform mutably because window hints are library-global
    /// state. On success the window's context is made current on the calling
    /// thread (unless the configuration requests no client API) and the
    /// configured swap interval is applied.
    ///
    /// # Errors
    /// Returns [`PlatformError::WindowCreation`] if the native library
    /// cannot create the window, for example when the requested context
    /// version is unsupported by the driver.
    pub fn build(self, platform: &mut GlfwPlatform) -> Result<GlfwWindow, PlatformError> {
        let config = self.config;
        log::info!(
            "Building window '{}' ({}x{})",
            config.title,
            config.size.width,
            config.size.height
        );

        platform.apply_window_hints(&config);

        let (mut native, native_events) = platform
            .glfw
            .create_window(
                config.size.width,
                config.size.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| PlatformError::WindowCreation {
                title: config.title.clone(),
                details: "the native library could not create the window".to_string(),
            })?;

        native.set_all_polling(true);

        if let Some(position) = config.position {
            native.set_pos(position.x, position.y);
        }

        if config.context.api != ClientApi::NoApi {
            native.make_current();
            platform.glfw.set_swap_interval(map_vsync(config.vsync));
        }

        log::info!("GLFW window created successfully.");
        Ok(GlfwWindow {
            native,
            native_events,
            bus: EventBus::new(),
            title: config.title,
        })
    }
}

impl Default for GlfwWindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GlfwWindow {
    /// Drains the native callback receiver, translating and publishing each
    /// message. Messages with no translation are dropped with a trace log.
    fn drain_native(&mut self) {
        for (_, event) in glfw::flush_messages(&self.native_events) {
            match input::translate_event(&event) {
                Some(translated) => self.bus.publish(translated),
                None => log::trace!("Dropping native event with no translation: {event:?}"),
            }
        }
    }
}

impl PlatformWindow for GlfwWindow {
    fn pump_events(&mut self) {
        self.native.glfw.poll_events();
        self.drain_native();
    }

    fn wait_events(&mut self, timeout: Option<Duration>) {
        match timeout {
            Some(timeout) => self.native.glfw.wait_events_timeout(timeout.as_secs_f64()),
            None => self.native.glfw.wait_events(),
        }
        self.drain_native();
    }

    fn post_empty_event(&mut self) {
        self.native.glfw.post_empty_event();
    }

    fn events(&self) -> &flume::Receiver<WindowEvent> {
        self.bus.receiver()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.native.set_title(title);
        self.title = title.to_string();
    }

    fn position(&self) -> Position2D {
        let (x, y) = self.native.get_pos();
        Position2D::new(x, y)
    }

    fn set_position(&mut self, position: Position2D) {
        self.native.set_pos(position.x, position.y);
    }

    fn size(&self) -> Extent2D {
        let (width, height) = self.native.get_size();
        Extent2D::new(width.max(0) as u32, height.max(0) as u32)
    }

    fn set_size(&mut self, size: Extent2D) {
        self.native.set_size(size.width as i32, size.height as i32);
    }

    fn framebuffer_size(&self) -> Extent2D {
        let (width, height) = self.native.get_framebuffer_size();
        Extent2D::new(width.max(0) as u32, height.max(0) as u32)
    }

    fn frame_extents(&self) -> FrameExtents {
        let (left, top, right, bottom) = self.native.get_frame_size();
        FrameExtents::new(
            left.max(0) as u32,
            top.max(0) as u32,
            right.max(0) as u32,
            bottom.max(0) as u32,
        )
    }

    fn content_scale(&self) -> (f32, f32) {
        self.native.get_content_scale()
    }

    fn set_size_limits(&mut self, min: Option<Extent2D>, max: Option<Extent2D>) {
        self.native.set_size_limits(
            min.map(|e| e.width),
            min.map(|e| e.height),
            max.map(|e| e.width),
            max.map(|e| e.height),
        );
    }

    fn is_visible(&self) -> bool {
        self.native.is_visible()
    }

    fn show(&mut self) {
        self.native.show();
    }

    fn hide(&mut self) {
        self.native.hide();
    }

    fn is_focused(&self) -> bool {
        self.native.is_focused()
    }

    fn focus(&mut self) {
        self.native.focus();
    }

    fn request_attention(&mut self) {
        self.native.request_attention();
    }

    fn is_iconified(&self) -> bool {
        self.native.is_iconified()
    }

    fn iconify(&mut self) {
        self.native.iconify();
    }

    fn is_maximized(&self) -> bool {
        self.native.is_maximized()
    }

    fn maximize(&mut self) {
        self.native.maximize();
    }

    fn restore(&mut self) {
        self.native.restore();
    }

    fn is_fullscreen(&self) -> bool {
        self.native
            .with_window_mode(|mode| matches!(mode, glfw::WindowMode::FullScreen(_)))
    }

    fn enter_fullscreen(&mut self, monitor: Option<&MonitorInfo>) -> Result<(), PlatformError> {
        let requested = monitor.map(|info| info.position);
        let mut glfw = self.native.glfw.clone();
        let native = &mut self.native;
        glfw.with_connected_monitors(|_, monitors| {
            // Snapshots are re-resolved to a live handle by their position on
            // the virtual screen; the first connected monitor is the primary.
            let target = match requested {
                Some(position) => monitors.iter().find(|m| {
                    let (x, y) = m.get_pos();
                    x == position.x && y == position.y
                }),
                None => monitors.first(),
            };
            let Some(target) = target else {
                return Err(PlatformError::NoMonitor {
                    details: match requested {
                        Some(position) => {
                            format!("no connected monitor at ({}, {})", position.x, position.y)
                        }
                        None => "no monitors connected".to_string(),
                    },
                });
            };

            let (width, height, refresh_rate) = match target.get_video_mode() {
                Some(mode) => (mode.width, mode.height, Some(mode.refresh_rate)),
                None => {
                    let (w, h) = native.get_size();
                    (w.max(0) as u32, h.max(0) as u32, None)
                }
            };
            native.set_monitor(
                glfw::WindowMode::FullScreen(target),
                0,
                0,
                width,
                height,
                refresh_rate,
            );
            Ok(())
        })
    }

    fn exit_fullscreen(&mut self, bounds: Rect) {
        self.native.set_monitor(
            glfw::WindowMode::Windowed,
            bounds.left(),
            bounds.top(),
            bounds.extent.width,
            bounds.extent.height,
            None,
        );
    }

    fn should_close(&self) -> bool {
        self.native.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.native.set_should_close(value);
    }

    fn is_decorated(&self) -> bool {
        self.native.is_decorated()
    }

    fn set_decorated(&mut self, decorated: bool) {
        self.native.set_decorated(decorated);
    }

    fn is_resizable(&self) -> bool {
        self.native.is_resizable()
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.native.set_resizable(resizable);
    }

    fn opacity(&self) -> f32 {
        self.native.get_opacity()
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.native.set_opacity(opacity);
    }

    fn cursor_mode(&self) -> CursorMode {
        map_cursor_mode_from(self.native.get_cursor_mode())
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.native.set_cursor_mode(map_cursor_mode(mode));
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.native.get_cursor_pos()
    }

    fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.native.set_cursor_pos(x, y);
    }

    fn set_cursor_shape(&mut self, shape: StandardCursor) {
        self.native
            .set_cursor(Some(glfw::Cursor::standard(map_standard_cursor(shape))));
    }

    fn is_key_down(&self, key: Key) -> bool {
        if key == Key::Unknown {
            return false;
        }
        matches!(
            self.native.get_key(input::key_to_glfw(key)),
            glfw::Action::Press | glfw::Action::Repeat
        )
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        match input::mouse_button_to_glfw(button) {
            Some(button) => matches!(self.native.get_mouse_button(button), glfw::Action::Press),
            None => false,
        }
    }

    fn monitors(&self) -> Vec<MonitorInfo> {
        // The library handle is cloneable; monitor enumeration needs it
        // mutably while `&self` is all a query should require.
        let mut glfw = self.native.glfw.clone();
        glfw.with_connected_monitors(|_, monitors| {
            monitors.iter().map(|m| monitor::snapshot(m)).collect()
        })
    }

    fn primary_monitor(&self) -> Option<MonitorInfo> {
        let mut glfw = self.native.glfw.clone();
        glfw.with_primary_monitor(|_, monitor| monitor.as_deref().map(monitor::snapshot))
    }

    fn clipboard(&self) -> Option<String> {
        self.native.get_clipboard_string()
    }

    fn set_clipboard(&mut self, text: &str) {
        self.native.set_clipboard_string(text);
    }

    fn make_current(&mut self) {
        self.native.make_current();
    }

    fn swap_buffers(&mut self) {
        self.native.swap_buffers();
    }

    fn set_vsync(&mut self, mode: VsyncMode) {
        self.native.glfw.set_swap_interval(map_vsync(mode));
    }
}

/// (Internal) Maps a toolkit cursor mode to the native one.
fn map_cursor_mode(mode: CursorMode) -> glfw::CursorMode {
    match mode {
        CursorMode::Normal => glfw::CursorMode::Normal,
        CursorMode::Hidden => glfw::CursorMode::Hidden,
        CursorMode::Disabled => glfw::CursorMode::Disabled,
    }
}

/// (Internal) Maps a native cursor mode back to the toolkit's.
fn map_cursor_mode_from(mode: glfw::CursorMode) -> CursorMode {
    match mode {
        glfw::CursorMode::Normal => CursorMode::Normal,
        glfw::CursorMode::Hidden => CursorMode::Hidden,
        glfw::CursorMode::Disabled => CursorMode::Disabled,
    }
}

/// (Internal) Maps a toolkit standard cursor shape to the native one.
fn map_standard_cursor(shape: StandardCursor) -> glfw::StandardCursor {
    match shape {
        StandardCursor::Arrow => glfw::StandardCursor::Arrow,
        StandardCursor::IBeam => glfw::StandardCursor::IBeam,
        StandardCursor::Crosshair => glfw::StandardCursor::Crosshair,
        StandardCursor::Hand => glfw::StandardCursor::Hand,
        StandardCursor::HResize => glfw::StandardCursor::HResize,
        StandardCursor::VResize => glfw::StandardCursor::VResize,
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    // Window creation needs a display; the mapping helpers are pure and
    // covered here, the rest is exercised by the sandbox.

    #[test]
    fn test_cursor_mode_round_trips() {
        for mode in [CursorMode::Normal, CursorMode::Hidden, CursorMode::Disabled] {
            assert_eq!(map_cursor_mode_from(map_cursor_mode(mode)), mode);
        }
    }

    #[test]
    fn test_standard_cursor_mapping() {
        assert!(matches!(
            map_standard_cursor(StandardCursor::Arrow),
            glfw::StandardCursor::Arrow
        ));
        assert!(matches!(
            map_standard_cursor(StandardCursor::HResize),
            glfw::StandardCursor::HResize
        ));
    }

    #[test]
    fn test_builder_accumulates_config() {
        let builder = GlfwWindowBuilder::new()
            .with_title("Test")
            .with_size(640, 360)
            .with_position(20, 40)
            .with_resizable(false)
            .with_decorated(false)
            .with_vsync(VsyncMode::Off);
        assert_eq!(builder.config.title, "Test");
        assert_eq!(builder.config.size, Extent2D::new(640, 360));
        assert_eq!(builder.config.position, Some(Position2D::new(20, 40)));
        assert!(!builder.config.resizable);
        assert!(!builder.config.decorated);
        assert_eq!(builder.config.vsync, VsyncMode::Off);
    }
}
