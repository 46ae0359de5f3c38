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

//! Converts native monitor handles into core monitor snapshots.
//!
//! Native monitor handles borrow the library context and cannot leave the
//! query callback, so everything the higher layers need is captured into a
//! [`MonitorInfo`] while the handle is alive.

use casement_core::math::{Extent2D, Position2D, Rect};
use casement_core::platform::{MonitorInfo, VideoMode};

/// Captures a full snapshot of a native monitor.
pub(crate) fn snapshot(monitor: &glfw::Monitor) -> MonitorInfo {
    let (x, y) = monitor.get_pos();
    let (work_x, work_y, work_w, work_h) = monitor.get_workarea();
    let (phys_w, phys_h) = monitor.get_physical_size();

    MonitorInfo {
        name: monitor
            .get_name()
            .unwrap_or_else(|| "Unknown Monitor".to_string()),
        position: Position2D::new(x, y),
        work_area: Rect::from_coords(
            work_x,
            work_y,
            work_w.max(0) as u32,
            work_h.max(0) as u32,
        ),
        physical_size_mm: Extent2D::new(phys_w.max(0) as u32, phys_h.max(0) as u32),
        content_scale: monitor.get_content_scale(),
        video_mode: monitor.get_video_mode().map(|mode| video_mode_from(&mode)),
        video_modes: monitor
            .get_video_modes()
            .iter()
            .map(video_mode_from)
            .collect(),
    }
}

/// Converts a native video mode into the core snapshot type.
pub(crate) fn video_mode_from(mode: &glfw::VidMode) -> VideoMode {
    VideoMode {
        size: Extent2D::new(mode.width, mode.height),
        refresh_rate: mode.refresh_rate,
        red_bits: mode.red_bits,
        green_bits: mode.green_bits,
        blue_bits: mode.blue_bits,
    }
}

// --- Tests ---
