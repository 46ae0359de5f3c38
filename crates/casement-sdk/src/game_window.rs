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

//! The `GameWindow` facade: one object aggregating a platform window, its
//! translated event stream, and pollable input state.

use casement_core::error::PlatformError;
use casement_core::event::WindowEvent;
use casement_core::input::{Key, KeyboardState, MouseButton, MouseState};
use casement_core::math::{Extent2D, Position2D, Rect};
use casement_core::platform::{
    CursorMode, MonitorInfo, PlatformWindow, StandardCursor, VsyncMode, WindowState,
};
use std::time::Duration;

/// A desktop-forms-style window: properties, derived geometry, and input
/// polling over any [`PlatformWindow`] backend.
///
/// `GameWindow` owns the backend window and drives its event pump. Each call
/// to [`poll_events`] (or [`wait_events`]) drains the translated event
/// stream, feeds it into the aggregated [`KeyboardState`] and [`MouseState`],
/// and returns the drained events in the order the native library reported
/// them. After a poll returns, state queries and the returned events agree:
/// the state is derived from exactly the events the caller just observed.
///
/// Window attributes are read-through and write-through: nothing native is
/// cached here. The facade stores only what the native library cannot
/// answer, which is the windowed client bounds to restore when leaving
/// fullscreen.
///
/// [`poll_events`]: GameWindow::poll_events
/// [`wait_events`]: GameWindow::wait_events
#[derive(Debug)]
pub struct GameWindow<W: PlatformWindow> {
    window: W,
    keyboard: KeyboardState,
    mouse: MouseState,
    restore_bounds: Option<Rect>,
}

impl<W: PlatformWindow> GameWindow<W> {
    /// Wraps a platform window in the facade.
    pub fn new(window: W) -> Self {
        Self {
            window,
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
            restore_bounds: None,
        }
    }

    /// Returns a reference to the underlying platform window.
    pub fn window(&self) -> &W {
        &self.window
    }

    /// Returns a mutable reference to the underlying platform window, for
    /// backend-specific operations the facade does not cover.
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// Consumes the facade and returns the underlying platform window.
    pub fn into_inner(self) -> W {
        self.window
    }

    // --- Event pump ---

    /// Processes pending events without blocking.
    ///
    /// Starts a new input frame, pumps the backend, applies every translated
    /// event to the aggregated input state, and returns the events in the
    /// order the native library reported them.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.keyboard.begin_frame();
        self.mouse.begin_frame();
        self.window.pump_events();
        self.drain()
    }

    /// Blocks until at least one event arrives or the timeout elapses, then
    /// processes pending events like [`poll_events`].
    ///
    /// With `None` the wait is unbounded; [`post_empty_event`] wakes it up.
    ///
    /// [`poll_events`]: GameWindow::poll_events
    /// [`post_empty_event`]: GameWindow::post_empty_event
    pub fn wait_events(&mut self, timeout: Option<Duration>) -> Vec<WindowEvent> {
        self.keyboard.begin_frame();
        self.mouse.begin_frame();
        self.window.wait_events(timeout);
        self.drain()
    }

    /// Posts an empty event to wake up a blocking [`wait_events`] call.
    ///
    /// [`wait_events`]: GameWindow::wait_events
    pub fn post_empty_event(&mut self) {
        self.window.post_empty_event();
    }

    /// Returns a receiver subscribed to the translated event stream.
    ///
    /// The channel has a single queue: an event claimed through this
    /// receiver is consumed and will not be seen by [`poll_events`], and
    /// events drained by `poll_events` do not reach this receiver. Use it
    /// when handing the whole stream to an event-driven consumer instead of
    /// polling.
    ///
    /// [`poll_events`]: GameWindow::poll_events
    pub fn events(&self) -> flume::Receiver<WindowEvent> {
        self.window.events().clone()
    }

    fn drain(&mut self) -> Vec<WindowEvent> {
        let mut drained = Vec::new();
        while let Ok(event) = self.window.events().try_recv() {
            if let WindowEvent::Input(input) = &event {
                self.keyboard.apply(input);
                self.mouse.apply(input);
            }
            drained.push(event);
        }
        drained
    }

    // --- Input polling ---

    /// Returns the keyboard state aggregated from the event stream.
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Returns the mouse state aggregated from the event stream.
    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    /// Samples whether a key is down right now, directly from the native
    /// library.
    ///
    /// Unlike [`keyboard`], this bypasses the event stream and can observe
    /// changes that happened since the last poll.
    ///
    /// [`keyboard`]: GameWindow::keyboard
    pub fn is_key_down(&self, key: Key) -> bool {
        self.window.is_key_down(key)
    }

    /// Samples whether a mouse button is down right now, directly from the
    /// native library.
    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.window.is_mouse_button_down(button)
    }

    // --- Read-through properties ---

    /// Returns the window title.
    pub fn title(&self) -> String {
        self.window.title()
    }

    /// Sets the window title.
    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    /// Returns the position of the client area's top-left corner, in screen
    /// coordinates.
    pub fn position(&self) -> Position2D {
        self.window.position()
    }

    /// Moves the window so its client area's top-left corner is at the given
    /// screen position.
    pub fn set_position(&mut self, position: Position2D) {
        self.window.set_position(position);
    }

    /// Returns the size of the client area, in screen coordinates.
    pub fn size(&self) -> Extent2D {
        self.window.size()
    }

    /// Resizes the client area.
    pub fn set_size(&mut self, size: Extent2D) {
        self.window.set_size(size);
    }

    /// Returns the size of the framebuffer, in pixels.
    pub fn framebuffer_size(&self) -> Extent2D {
        self.window.framebuffer_size()
    }

    /// Returns the window's (horizontal, vertical) content scale.
    pub fn content_scale(&self) -> (f32, f32) {
        self.window.content_scale()
    }

    /// Constrains the client-area size the user can resize to.
    pub fn set_size_limits(&mut self, min: Option<Extent2D>, max: Option<Extent2D>) {
        self.window.set_size_limits(min, max);
    }

    /// Checks if the window is visible.
    pub fn is_visible(&self) -> bool {
        self.window.is_visible()
    }

    /// Makes the window visible.
    pub fn show(&mut self) {
        self.window.show();
    }

    /// Hides the window.
    pub fn hide(&mut self) {
        self.window.hide();
    }

    /// Checks if the window has input focus.
    pub fn is_focused(&self) -> bool {
        self.window.is_focused()
    }

    /// Brings the window to front and gives it input focus.
    pub fn focus(&mut self) {
        self.window.focus();
    }

    /// Requests user attention without stealing focus.
    pub fn request_attention(&mut self) {
        self.window.request_attention();
    }

    /// Checks if the window has frame decorations.
    pub fn is_decorated(&self) -> bool {
        self.window.is_decorated()
    }

    /// Enables or disables frame decorations.
    pub fn set_decorated(&mut self, decorated: bool) {
        self.window.set_decorated(decorated);
    }

    /// Checks if the user can resize the window.
    pub fn is_resizable(&self) -> bool {
        self.window.is_resizable()
    }

    /// Enables or disables user resizing.
    pub fn set_resizable(&mut self, resizable: bool) {
        self.window.set_resizable(resizable);
    }

    /// Returns the window opacity, from `0.0` (transparent) to `1.0`.
    pub fn opacity(&self) -> f32 {
        self.window.opacity()
    }

    /// Sets the window opacity.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.window.set_opacity(opacity);
    }

    /// Returns the current cursor mode.
    pub fn cursor_mode(&self) -> CursorMode {
        self.window.cursor_mode()
    }

    /// Sets the cursor mode.
    pub fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.window.set_cursor_mode(mode);
    }

    /// Returns the cursor position, relative to the client area.
    pub fn cursor_position(&self) -> (f64, f64) {
        self.window.cursor_position()
    }

    /// Moves the cursor to a position relative to the client area.
    pub fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.window.set_cursor_position(x, y);
    }

    /// Selects a standard cursor shape for the client area.
    pub fn set_cursor_shape(&mut self, shape: StandardCursor) {
        self.window.set_cursor_shape(shape);
    }

    /// Returns the clipboard contents, if they hold a UTF-8 string.
    pub fn clipboard(&self) -> Option<String> {
        self.window.clipboard()
    }

    /// Replaces the clipboard contents.
    pub fn set_clipboard(&mut self, text: &str) {
        self.window.set_clipboard(text);
    }

    /// Returns snapshots of all connected monitors.
    pub fn monitors(&self) -> Vec<MonitorInfo> {
        self.window.monitors()
    }

    /// Returns a snapshot of the primary monitor, if any is connected.
    pub fn primary_monitor(&self) -> Option<MonitorInfo> {
        self.window.primary_monitor()
    }

    /// Makes the window's rendering context current on the calling thread.
    pub fn make_current(&mut self) {
        self.window.make_current();
    }

    /// Swaps the front and back buffers.
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Sets buffer-swap synchronization for the window's context.
    pub fn set_vsync(&mut self, mode: VsyncMode) {
        self.window.set_vsync(mode);
    }

    // --- Derived geometry ---

    /// Returns the client-area bounds, in screen coordinates.
    pub fn client_bounds(&self) -> Rect {
        Rect::new(self.window.position(), self.window.size())
    }

    /// Moves and resizes the client area in one call.
    pub fn set_client_bounds(&mut self, bounds: Rect) {
        self.window.set_position(bounds.origin);
        self.window.set_size(bounds.extent);
    }

    /// Returns the outer window bounds, including frame decorations.
    pub fn bounds(&self) -> Rect {
        self.window.frame_extents().expand(self.client_bounds())
    }

    /// Moves and resizes the window so its outer bounds, including frame
    /// decorations, match the given rectangle.
    pub fn set_bounds(&mut self, bounds: Rect) {
        let client = self.window.frame_extents().shrink(bounds);
        self.set_client_bounds(client);
    }

    /// Converts a point from screen coordinates to client coordinates.
    pub fn point_to_client(&self, point: Position2D) -> Position2D {
        let origin = self.window.position();
        point.offset(-origin.x, -origin.y)
    }

    /// Converts a point from client coordinates to screen coordinates.
    pub fn point_to_screen(&self, point: Position2D) -> Position2D {
        let origin = self.window.position();
        point.offset(origin.x, origin.y)
    }

    /// Centers the window on a monitor.
    ///
    /// The outer bounds, including frame decorations, are centered within
    /// the monitor's work area, so the visible frame ends up centered rather
    /// than the bare client area.
    pub fn center_on(&mut self, monitor: &MonitorInfo) {
        let centered = self.bounds().centered_within(&monitor.work_area);
        self.set_bounds(centered);
    }

    // --- Window state ---

    /// Derives the presentation state from native queries.
    ///
    /// Fullscreen takes precedence: a fullscreen window that was maximized
    /// before entering reports `Fullscreen` until it leaves.
    pub fn window_state(&self) -> WindowState {
        if self.window.is_fullscreen() {
            WindowState::Fullscreen
        } else if self.window.is_iconified() {
            WindowState::Minimized
        } else if self.window.is_maximized() {
            WindowState::Maximized
        } else {
            WindowState::Normal
        }
    }

    /// Transitions the window to the given presentation state.
    ///
    /// Entering fullscreen remembers the windowed client bounds and targets
    /// the monitor under the window's center, falling back to the primary
    /// monitor. Leaving fullscreen restores the remembered bounds exactly;
    /// the native library does not keep them.
    ///
    /// # Errors
    /// Returns [`PlatformError::NoMonitor`] if fullscreen is requested with
    /// no monitor connected.
    pub fn set_window_state(&mut self, state: WindowState) -> Result<(), PlatformError> {
        let current = self.window_state();
        if current == state {
            return Ok(());
        }
        match state {
            WindowState::Fullscreen => {
                let bounds = self.client_bounds();
                let monitor = self
                    .window
                    .monitors()
                    .into_iter()
                    .find(|m| m.bounds().contains_point(bounds.center()));
                self.restore_bounds = Some(bounds);
                self.window.enter_fullscreen(monitor.as_ref())
            }
            WindowState::Normal => {
                if current == WindowState::Fullscreen {
                    let bounds = self.take_restore_bounds();
                    self.window.exit_fullscreen(bounds);
                } else {
                    self.window.restore();
                }
                Ok(())
            }
            WindowState::Minimized => {
                self.window.iconify();
                Ok(())
            }
            WindowState::Maximized => {
                if current == WindowState::Fullscreen {
                    let bounds = self.take_restore_bounds();
                    self.window.exit_fullscreen(bounds);
                }
                self.window.maximize();
                Ok(())
            }
        }
    }

    /// Switches between fullscreen and windowed mode.
    pub fn toggle_fullscreen(&mut self) -> Result<(), PlatformError> {
        if self.window_state() == WindowState::Fullscreen {
            self.set_window_state(WindowState::Normal)
        } else {
            self.set_window_state(WindowState::Fullscreen)
        }
    }

    fn take_restore_bounds(&mut self) -> Rect {
        match self.restore_bounds.take() {
            Some(bounds) => bounds,
            None => {
                // Fullscreen without a remembered placement happens when the
                // backend window was created fullscreen or the state was
                // changed behind the facade's back.
                log::warn!("Leaving fullscreen without remembered bounds; keeping current size.");
                self.client_bounds()
            }
        }
    }

    // --- Close protocol ---

    /// Checks whether a close was requested and not vetoed.
    ///
    /// A user close request raises this flag and delivers
    /// [`WindowEvent::CloseRequested`] from the same poll that observed it.
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Requests that the window close, as if the user had asked.
    pub fn close(&mut self) {
        self.window.set_should_close(true);
    }

    /// Vetoes a pending close request by clearing the should-close flag.
    ///
    /// The flag is not reset automatically: call this after observing
    /// [`WindowEvent::CloseRequested`] and before acting on
    /// [`should_close`].
    ///
    /// [`should_close`]: GameWindow::should_close
    pub fn cancel_close(&mut self) {
        self.window.set_should_close(false);
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use casement_core::event::EventBus;
    use casement_core::input::{InputEvent, Modifiers};
    use casement_core::math::FrameExtents;
    use casement_core::platform::VideoMode;

    /// A scripted backend: events queued by the test are published when the
    /// facade pumps, and every window attribute is a plain field.
    struct FakeWindow {
        bus: EventBus<WindowEvent>,
        queued: Vec<WindowEvent>,
        title: String,
        position: Position2D,
        size: Extent2D,
        frame: FrameExtents,
        visible: bool,
        focused: bool,
        iconified: bool,
        maximized: bool,
        fullscreen: bool,
        should_close: bool,
        decorated: bool,
        resizable: bool,
        opacity: f32,
        cursor_mode: CursorMode,
        cursor_position: (f64, f64),
        clipboard: Option<String>,
        monitors: Vec<MonitorInfo>,
        last_wait_timeout: Option<Option<Duration>>,
        fullscreen_monitor: Option<Option<Position2D>>,
    }

    impl FakeWindow {
        fn new() -> Self {
            Self {
                bus: EventBus::new(),
                queued: Vec::new(),
                title: "Fake".to_string(),
                position: Position2D::new(100, 100),
                size: Extent2D::new(640, 480),
                frame: FrameExtents::new(8, 31, 8, 8),
                visible: true,
                focused: true,
                iconified: false,
                maximized: false,
                fullscreen: false,
                should_close: false,
                decorated: true,
                resizable: true,
                opacity: 1.0,
                cursor_mode: CursorMode::Normal,
                cursor_position: (0.0, 0.0),
                clipboard: None,
                monitors: vec![sample_monitor(Position2D::new(0, 0))],
                last_wait_timeout: None,
                fullscreen_monitor: None,
            }
        }

        fn queue(&mut self, event: WindowEvent) {
            self.queued.push(event);
        }
    }

    fn sample_monitor(position: Position2D) -> MonitorInfo {
        MonitorInfo {
            name: "Fake Display".to_string(),
            position,
            work_area: Rect::new(position, Extent2D::new(1920, 1080)),
            physical_size_mm: Extent2D::new(600, 340),
            content_scale: (1.0, 1.0),
            video_mode: Some(VideoMode {
                size: Extent2D::new(1920, 1200),
                refresh_rate: 60,
                red_bits: 8,
                green_bits: 8,
                blue_bits: 8,
            }),
            video_modes: Vec::new(),
        }
    }

    impl PlatformWindow for FakeWindow {
        fn pump_events(&mut self) {
            for event in self.queued.drain(..) {
                // A user close request raises the native flag as well.
                if event == WindowEvent::CloseRequested {
                    self.should_close = true;
                }
                self.bus.publish(event);
            }
        }

        fn wait_events(&mut self, timeout: Option<Duration>) {
            self.last_wait_timeout = Some(timeout);
            self.pump_events();
        }

        fn post_empty_event(&mut self) {}

        fn events(&self) -> &flume::Receiver<WindowEvent> {
            self.bus.receiver()
        }

        fn title(&self) -> String {
            self.title.clone()
        }

        fn set_title(&mut self, title: &str) {
            self.title = title.to_string();
        }

        fn position(&self) -> Position2D {
            self.position
        }

        fn set_position(&mut self, position: Position2D) {
            self.position = position;
        }

        fn size(&self) -> Extent2D {
            self.size
        }

        fn set_size(&mut self, size: Extent2D) {
            self.size = size;
        }

        fn framebuffer_size(&self) -> Extent2D {
            self.size
        }

        fn frame_extents(&self) -> FrameExtents {
            self.frame
        }

        fn content_scale(&self) -> (f32, f32) {
            (1.0, 1.0)
        }

        fn set_size_limits(&mut self, _min: Option<Extent2D>, _max: Option<Extent2D>) {}

        fn is_visible(&self) -> bool {
            self.visible
        }

        fn show(&mut self) {
            self.visible = true;
        }

        fn hide(&mut self) {
            self.visible = false;
        }

        fn is_focused(&self) -> bool {
            self.focused
        }

        fn focus(&mut self) {
            self.focused = true;
        }

        fn request_attention(&mut self) {}

        fn is_iconified(&self) -> bool {
            self.iconified
        }

        fn iconify(&mut self) {
            self.iconified = true;
        }

        fn is_maximized(&self) -> bool {
            self.maximized
        }

        fn maximize(&mut self) {
            self.maximized = true;
            self.iconified = false;
        }

        fn restore(&mut self) {
            self.iconified = false;
            self.maximized = false;
        }

        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }

        fn enter_fullscreen(&mut self, monitor: Option<&MonitorInfo>) -> Result<(), PlatformError> {
            self.fullscreen = true;
            self.fullscreen_monitor = Some(monitor.map(|m| m.position));
            Ok(())
        }

        fn exit_fullscreen(&mut self, bounds: Rect) {
            self.fullscreen = false;
            self.position = bounds.origin;
            self.size = bounds.extent;
        }

        fn should_close(&self) -> bool {
            self.should_close
        }

        fn set_should_close(&mut self, value: bool) {
            self.should_close = value;
        }

        fn is_decorated(&self) -> bool {
            self.decorated
        }

        fn set_decorated(&mut self, decorated: bool) {
            self.decorated = decorated;
        }

        fn is_resizable(&self) -> bool {
            self.resizable
        }

        fn set_resizable(&mut self, resizable: bool) {
            self.resizable = resizable;
        }

        fn opacity(&self) -> f32 {
            self.opacity
        }

        fn set_opacity(&mut self, opacity: f32) {
            self.opacity = opacity;
        }

        fn cursor_mode(&self) -> CursorMode {
            self.cursor_mode
        }

        fn set_cursor_mode(&mut self, mode: CursorMode) {
            self.cursor_mode = mode;
        }

        fn cursor_position(&self) -> (f64, f64) {
            self.cursor_position
        }

        fn set_cursor_position(&mut self, x: f64, y: f64) {
            self.cursor_position = (x, y);
        }

        fn set_cursor_shape(&mut self, _shape: StandardCursor) {}

        fn is_key_down(&self, _key: Key) -> bool {
            false
        }

        fn is_mouse_button_down(&self, _button: MouseButton) -> bool {
            false
        }

        fn monitors(&self) -> Vec<MonitorInfo> {
            self.monitors.clone()
        }

        fn primary_monitor(&self) -> Option<MonitorInfo> {
            self.monitors.first().cloned()
        }

        fn clipboard(&self) -> Option<String> {
            self.clipboard.clone()
        }

        fn set_clipboard(&mut self, text: &str) {
            self.clipboard = Some(text.to_string());
        }

        fn make_current(&mut self) {}

        fn swap_buffers(&mut self) {}

        fn set_vsync(&mut self, _mode: VsyncMode) {}
    }

    fn key_press(key: Key) -> WindowEvent {
        WindowEvent::Input(InputEvent::KeyPressed {
            key,
            scancode: 0,
            modifiers: Modifiers::NONE,
        })
    }

    #[test]
    fn test_poll_returns_events_in_order_and_feeds_state() {
        let mut game = GameWindow::new(FakeWindow::new());
        game.window_mut().queue(key_press(Key::W));
        game.window_mut().queue(WindowEvent::Input(InputEvent::MouseMoved {
            x: 10.0,
            y: 20.0,
        }));
        game.window_mut().queue(WindowEvent::Resized {
            size: Extent2D::new(800, 600),
        });

        let events = game.poll_events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], key_press(Key::W));
        assert_eq!(
            events[2],
            WindowEvent::Resized {
                size: Extent2D::new(800, 600),
            }
        );

        // State agrees with the returned events.
        assert!(game.keyboard().is_down(Key::W));
        assert!(game.keyboard().was_pressed(Key::W));
        assert_relative_eq!(game.mouse().position().0, 10.0);
        assert_relative_eq!(game.mouse().position().1, 20.0);
    }

    #[test]
    fn test_poll_starts_a_new_input_frame() {
        let mut game = GameWindow::new(FakeWindow::new());
        game.window_mut().queue(key_press(Key::Space));
        game.poll_events();
        assert!(game.keyboard().was_pressed(Key::Space));

        // No new events: held state persists, the edge does not.
        let events = game.poll_events();
        assert!(events.is_empty());
        assert!(game.keyboard().is_down(Key::Space));
        assert!(!game.keyboard().was_pressed(Key::Space));
    }

    #[test]
    fn test_wait_events_forwards_timeout() {
        let mut game = GameWindow::new(FakeWindow::new());
        game.wait_events(Some(Duration::from_millis(250)));
        assert_eq!(
            game.window().last_wait_timeout,
            Some(Some(Duration::from_millis(250)))
        );
        game.wait_events(None);
        assert_eq!(game.window().last_wait_timeout, Some(None));
    }

    #[test]
    fn test_close_request_can_be_vetoed() {
        let mut game = GameWindow::new(FakeWindow::new());
        game.window_mut().queue(WindowEvent::CloseRequested);

        let events = game.poll_events();
        assert!(events.contains(&WindowEvent::CloseRequested));
        assert!(game.should_close());

        game.cancel_close();
        assert!(!game.should_close());

        game.close();
        assert!(game.should_close());
    }

    #[test]
    fn test_bounds_include_frame_decorations() {
        let game = GameWindow::new(FakeWindow::new());
        // Client at (100, 100) 640x480 with frame (8, 31, 8, 8).
        assert_eq!(game.client_bounds(), Rect::from_coords(100, 100, 640, 480));
        assert_eq!(game.bounds(), Rect::from_coords(92, 69, 656, 519));
    }

    #[test]
    fn test_set_bounds_round_trips_through_frame() {
        let mut game = GameWindow::new(FakeWindow::new());
        let outer = Rect::from_coords(300, 200, 856, 719);
        game.set_bounds(outer);
        assert_eq!(game.bounds(), outer);
        assert_eq!(game.client_bounds(), Rect::from_coords(308, 231, 840, 680));
    }

    #[test]
    fn test_point_conversion() {
        let game = GameWindow::new(FakeWindow::new());
        let screen = Position2D::new(150, 160);
        let client = game.point_to_client(screen);
        assert_eq!(client, Position2D::new(50, 60));
        assert_eq!(game.point_to_screen(client), screen);
    }

    #[test]
    fn test_center_on_centers_the_outer_rect() {
        let mut game = GameWindow::new(FakeWindow::new());
        let monitor = sample_monitor(Position2D::new(0, 0));
        game.center_on(&monitor);

        // Outer 656x519 centered in 1920x1080 puts its origin at (632, 280);
        // the client origin sits inside the frame.
        assert_eq!(game.bounds(), Rect::from_coords(632, 280, 656, 519));
        assert_eq!(game.client_bounds(), Rect::from_coords(640, 311, 640, 480));
    }

    #[test]
    fn test_window_state_derivation() {
        let mut game = GameWindow::new(FakeWindow::new());
        assert_eq!(game.window_state(), WindowState::Normal);

        game.window_mut().maximized = true;
        assert_eq!(game.window_state(), WindowState::Maximized);

        // Fullscreen wins over a remembered maximize.
        game.window_mut().fullscreen = true;
        assert_eq!(game.window_state(), WindowState::Fullscreen);

        game.window_mut().fullscreen = false;
        game.window_mut().maximized = false;
        game.window_mut().iconified = true;
        assert_eq!(game.window_state(), WindowState::Minimized);
    }

    #[test]
    fn test_fullscreen_restores_windowed_bounds() {
        let mut game = GameWindow::new(FakeWindow::new());
        let before = game.client_bounds();

        game.set_window_state(WindowState::Fullscreen)
            .expect("enter fullscreen");
        assert_eq!(game.window_state(), WindowState::Fullscreen);

        // Pretend the backend resized to the monitor's video mode.
        game.window_mut().position = Position2D::new(0, 0);
        game.window_mut().size = Extent2D::new(1920, 1200);

        game.set_window_state(WindowState::Normal)
            .expect("exit fullscreen");
        assert_eq!(game.window_state(), WindowState::Normal);
        assert_eq!(game.client_bounds(), before);
    }

    #[test]
    fn test_fullscreen_targets_monitor_under_window() {
        let mut game = GameWindow::new(FakeWindow::new());
        // Two monitors side by side; the window sits on the second one.
        game.window_mut().monitors = vec![
            sample_monitor(Position2D::new(0, 0)),
            sample_monitor(Position2D::new(1920, 0)),
        ];
        game.window_mut().position = Position2D::new(2000, 50);

        game.set_window_state(WindowState::Fullscreen)
            .expect("enter fullscreen");
        assert_eq!(
            game.window().fullscreen_monitor,
            Some(Some(Position2D::new(1920, 0)))
        );
    }

    #[test]
    fn test_toggle_fullscreen() {
        let mut game = GameWindow::new(FakeWindow::new());
        game.toggle_fullscreen().expect("enter");
        assert_eq!(game.window_state(), WindowState::Fullscreen);
        game.toggle_fullscreen().expect("exit");
        assert_eq!(game.window_state(), WindowState::Normal);
    }

    #[test]
    fn test_maximized_then_fullscreen_restores_windowed_placement() {
        let mut game = GameWindow::new(FakeWindow::new());
        game.set_window_state(WindowState::Maximized).expect("maximize");
        let maximized_bounds = game.client_bounds();

        game.set_window_state(WindowState::Fullscreen)
            .expect("enter fullscreen");
        game.set_window_state(WindowState::Normal)
            .expect("exit fullscreen");

        // Leaving fullscreen lands in plain windowed mode with the bounds
        // captured at entry; the native set-monitor model keeps no maximize.
        assert_eq!(game.window_state(), WindowState::Normal);
        assert_eq!(game.client_bounds(), maximized_bounds);
    }

    #[test]
    fn test_set_window_state_is_idempotent() {
        let mut game = GameWindow::new(FakeWindow::new());
        game.set_window_state(WindowState::Normal).expect("noop");
        assert_eq!(game.window_state(), WindowState::Normal);

        game.set_window_state(WindowState::Fullscreen).expect("enter");
        let remembered = game.restore_bounds;
        game.set_window_state(WindowState::Fullscreen).expect("noop");
        // Re-entering must not overwrite the remembered windowed bounds.
        assert_eq!(game.restore_bounds, remembered);
    }

    #[test]
    fn test_subscription_receiver_sees_pumped_events() {
        let mut game = GameWindow::new(FakeWindow::new());
        let receiver = game.events();
        game.window_mut().queue(WindowEvent::RedrawRequested);
        game.window_mut().pump_events();

        assert_eq!(receiver.try_recv(), Ok(WindowEvent::RedrawRequested));
    }

    #[test]
    fn test_read_through_properties_forward() {
        let mut game = GameWindow::new(FakeWindow::new());
        game.set_title("Renamed");
        assert_eq!(game.title(), "Renamed");

        game.set_cursor_mode(CursorMode::Disabled);
        assert_eq!(game.cursor_mode(), CursorMode::Disabled);

        game.set_clipboard("copied");
        assert_eq!(game.clipboard().as_deref(), Some("copied"));

        game.hide();
        assert!(!game.is_visible());
        game.show();
        assert!(game.is_visible());
    }
}
