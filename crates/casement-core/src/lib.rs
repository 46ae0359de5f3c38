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

//! # Casement Core
//!
//! Foundational crate containing the event model, input vocabulary, window
//! geometry, and platform contracts that define the toolkit's architecture.
//!
//! Nothing in this crate touches a native windowing library. Backend crates
//! (such as `casement-glfw`) implement the [`platform::PlatformWindow`]
//! contract and feed the event types defined here; higher-level crates build
//! on those contracts without knowing which backend is active.

#![warn(missing_docs)]

pub mod error;
pub mod event;
pub mod input;
pub mod math;
pub mod platform;

pub use error::PlatformError;
