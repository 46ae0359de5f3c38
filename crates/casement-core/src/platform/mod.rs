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

//! Provides abstractions over platform-specific windowing functionality.
//!
//! This module defines the contract between the toolkit and a concrete
//! windowing backend: the [`PlatformWindow`] trait, the creation-time
//! [`WindowConfig`], and the monitor snapshot types. Any native backend
//! (GLFW, SDL, etc.) can implement these to drive the higher layers.

pub mod monitor;
pub mod window;

pub use self::monitor::{MonitorInfo, VideoMode};
pub use self::window::{
    ClientApi, ContextConfig, CursorMode, GlProfile, PlatformWindow, StandardCursor, VsyncMode,
    WindowConfig, WindowState,
};
