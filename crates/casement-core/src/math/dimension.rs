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

//! Provides structs for representing sizes and screen positions.
//!
//! These types use integer components, making them suitable for pixel-based
//! coordinates: extents are `u32` because a size is never negative, while
//! positions are `i32` because the virtual screen extends into negative
//! coordinates on multi-monitor desktops.

use serde::{Deserialize, Serialize};

/// A two-dimensional extent, representing width and height in pixels.
///
/// This is commonly used for window, framebuffer, or monitor sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Extent2D {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
}

impl Extent2D {
    /// Creates a new extent from a width and a height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the area in pixels.
    ///
    /// The result is widened to `u64` so that large extents cannot overflow.
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A two-dimensional position in screen coordinates.
///
/// This typically describes the top-left corner of a window's client area or
/// a point on the virtual screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position2D {
    /// The x-coordinate of the position.
    pub x: i32,
    /// The y-coordinate of the position.
    pub y: i32,
}

impl Position2D {
    /// Creates a new position from x and y coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position translated by the given deltas.
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
