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

//! # Casement GLFW
//!
//! GLFW-backed implementation of the platform contracts defined in
//! `casement-core`.
//!
//! [`GlfwPlatform`] wraps library initialization and global queries;
//! [`GlfwWindowBuilder`] creates [`GlfwWindow`]s, which implement
//! [`casement_core::platform::PlatformWindow`] by forwarding to the native
//! window and translating its callback messages into the core event stream.
//!
//! GLFW requires initialization, window creation, and event processing to
//! happen on the main thread; none of the types here are `Send`.

#![warn(missing_docs)]

pub mod input;
pub mod monitor;
pub mod platform;
pub mod window;

pub use input::translate_event;
pub use platform::GlfwPlatform;
pub use window::{GlfwWindow, GlfwWindowBuilder};
