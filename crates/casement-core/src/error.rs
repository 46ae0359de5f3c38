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

//! Defines the error types for platform and windowing operations.

use std::fmt;

/// An error produced by the windowing layer or the underlying native library.
#[derive(Debug)]
pub enum PlatformError {
    /// The native windowing library failed to initialize.
    InitFailed {
        /// Detailed error description reported by the native library.
        details: String,
    },
    /// A window could not be created.
    WindowCreation {
        /// The title of the window that could not be created.
        title: String,
        /// Detailed error description reported by the native library.
        details: String,
    },
    /// No monitor was available for the requested operation.
    NoMonitor {
        /// A description of the monitor lookup that failed.
        details: String,
    },
    /// The operation is not supported by the active platform backend.
    Unsupported {
        /// The name of the unsupported operation.
        operation: String,
    },
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::InitFailed { details } => {
                write!(f, "Platform initialization failed: {details}")
            }
            PlatformError::WindowCreation { title, details } => {
                write!(f, "Failed to create window '{title}': {details}")
            }
            PlatformError::NoMonitor { details } => {
                write!(f, "No suitable monitor: {details}")
            }
            PlatformError::Unsupported { operation } => {
                write!(f, "Operation not supported by this backend: {operation}")
            }
        }
    }
}

impl std::error::Error for PlatformError {}
