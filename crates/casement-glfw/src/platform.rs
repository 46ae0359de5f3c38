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

//! Wraps native library initialization and global queries.

use casement_core::error::PlatformError;
use casement_core::platform::{
    ClientApi, GlProfile, MonitorInfo, VsyncMode, WindowConfig,
};
use std::time::Duration;

use crate::monitor;

/// Routes native error reports into the logging pipeline.
///
/// The native library keeps running after reporting an error; operations
/// that can fail in a way the caller must handle surface a
/// [`PlatformError`] instead.
fn log_native_error(error: glfw::Error, description: String) {
    log::error!("GLFW error ({error:?}): {description}");
}

/// An initialized instance of the native windowing library.
///
/// Owns library-global concerns: window hints, monitor queries, the global
/// event pump, and the time source. Windows are created through
/// [`GlfwWindowBuilder::build`], which takes the platform mutably because
/// window hints are library-global state.
///
/// Must be created and used on the main thread.
///
/// [`GlfwWindowBuilder::build`]: crate::GlfwWindowBuilder::build
pub struct GlfwPlatform {
    pub(crate) glfw: glfw::Glfw,
}

impl GlfwPlatform {
    /// Initializes the native windowing library.
    ///
    /// Native errors reported after initialization are logged through
    /// [`log::error!`].
    pub fn init() -> Result<Self, PlatformError> {
        let glfw = glfw::init(log_native_error).map_err(|e| PlatformError::InitFailed {
            details: e.to_string(),
        })?;
        log::info!("GLFW initialized (version: {})", glfw::get_version_string());
        Ok(Self { glfw })
    }

    /// Returns snapshots of all connected monitors.
    ///
    /// The first entry is the primary monitor, matching the native ordering.
    pub fn monitors(&mut self) -> Vec<MonitorInfo> {
        self.glfw
            .with_connected_monitors(|_, monitors| {
                monitors.iter().map(|m| monitor::snapshot(m)).collect()
            })
    }

    /// Returns a snapshot of the primary monitor, if any is connected.
    pub fn primary_monitor(&mut self) -> Option<MonitorInfo> {
        self.glfw
            .with_primary_monitor(|_, monitor| monitor.as_deref().map(monitor::snapshot))
    }

    /// Processes pending events for every window without blocking.
    ///
    /// Translated events appear on each window's receiver after its next
    /// pump. Prefer the per-window pump unless multiple windows share one
    /// loop.
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Blocks until at least one event arrives or the timeout elapses.
    ///
    /// With `None` the wait is unbounded.
    pub fn wait_events(&mut self, timeout: Option<Duration>) {
        match timeout {
            Some(timeout) => self.glfw.wait_events_timeout(timeout.as_secs_f64()),
            None => self.glfw.wait_events(),
        }
    }

    /// Posts an empty event to wake up a blocking [`wait_events`] call.
    ///
    /// [`wait_events`]: GlfwPlatform::wait_events
    pub fn post_empty_event(&mut self) {
        self.glfw.post_empty_event();
    }

    /// Returns the time in seconds since library initialization.
    pub fn time(&self) -> f64 {
        self.glfw.get_time()
    }

    /// Applies a window configuration to the library-global window hints.
    pub(crate) fn apply_window_hints(&mut self, config: &WindowConfig) {
        self.glfw.default_window_hints();
        self.glfw
            .window_hint(glfw::WindowHint::Resizable(config.resizable));
        self.glfw
            .window_hint(glfw::WindowHint::Visible(config.visible));
        self.glfw
            .window_hint(glfw::WindowHint::Decorated(config.decorated));
        self.glfw
            .window_hint(glfw::WindowHint::Maximized(config.maximized));
        self.glfw
            .window_hint(glfw::WindowHint::TransparentFramebuffer(config.transparent));
        if config.samples.is_some() {
            self.glfw
                .window_hint(glfw::WindowHint::Samples(config.samples));
        }

        let api = match config.context.api {
            ClientApi::OpenGl => glfw::ClientApiHint::OpenGl,
            ClientApi::OpenGlEs => glfw::ClientApiHint::OpenGlEs,
            ClientApi::NoApi => glfw::ClientApiHint::NoApi,
        };
        self.glfw.window_hint(glfw::WindowHint::ClientApi(api));

        if config.context.api != ClientApi::NoApi {
            let (major, minor) = config.context.version;
            self.glfw
                .window_hint(glfw::WindowHint::ContextVersion(major, minor));
            let profile = match config.context.profile {
                GlProfile::Any => glfw::OpenGlProfileHint::Any,
                GlProfile::Core => glfw::OpenGlProfileHint::Core,
                GlProfile::Compat => glfw::OpenGlProfileHint::Compat,
            };
            self.glfw
                .window_hint(glfw::WindowHint::OpenGlProfile(profile));
            self.glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(
                config.context.forward_compat,
            ));
        }
    }
}

/// Maps a vsync mode to the native swap interval.
pub(crate) fn map_vsync(mode: VsyncMode) -> glfw::SwapInterval {
    match mode {
        VsyncMode::Off => glfw::SwapInterval::None,
        VsyncMode::On => glfw::SwapInterval::Sync(1),
        VsyncMode::Adaptive => glfw::SwapInterval::Adaptive,
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    // Library initialization needs a display and is covered by the sandbox;
    // only the pure mappings are tested here.

    #[test]
    fn test_map_vsync() {
        assert!(matches!(map_vsync(VsyncMode::Off), glfw::SwapInterval::None));
        assert!(matches!(
            map_vsync(VsyncMode::On),
            glfw::SwapInterval::Sync(1)
        ));
        assert!(matches!(
            map_vsync(VsyncMode::Adaptive),
            glfw::SwapInterval::Adaptive
        ));
    }
}
