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

//! Defines snapshot types describing connected monitors.
//!
//! Monitors are reported as plain data captured at query time, not live
//! handles. A snapshot stays valid as a description even after the monitor
//! is disconnected; backends re-resolve a snapshot to a native monitor by
//! its virtual-screen position when an operation needs one.

use crate::math::{Extent2D, Position2D, Rect};
use serde::{Deserialize, Serialize};

/// A video mode supported by a monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMode {
    /// The resolution, in screen coordinates.
    pub size: Extent2D,
    /// The refresh rate, in Hz.
    pub refresh_rate: u32,
    /// The bit depth of the red channel.
    pub red_bits: u32,
    /// The bit depth of the green channel.
    pub green_bits: u32,
    /// The bit depth of the blue channel.
    pub blue_bits: u32,
}

/// A snapshot of one connected monitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorInfo {
    /// The human-readable monitor name.
    pub name: String,
    /// The position of the monitor's top-left corner on the virtual screen.
    pub position: Position2D,
    /// The area not occupied by taskbars or docks, in screen coordinates.
    /// Windows should be placed and centered within this region.
    pub work_area: Rect,
    /// The physical size of the display, in millimetres. Zero if unknown.
    pub physical_size_mm: Extent2D,
    /// The monitor's (horizontal, vertical) content scale.
    pub content_scale: (f32, f32),
    /// The currently active video mode, if the monitor reports one.
    pub video_mode: Option<VideoMode>,
    /// All video modes the monitor supports.
    pub video_modes: Vec<VideoMode>,
}

impl MonitorInfo {
    /// Returns the full monitor rectangle on the virtual screen, derived
    /// from its position and current video mode.
    ///
    /// Falls back to the work area when no video mode is reported.
    pub fn bounds(&self) -> Rect {
        match self.video_mode {
            Some(mode) => Rect::new(self.position, mode.size),
            None => self.work_area,
        }
    }
}

// --- Tests ---
