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

//! Defines rectangles and frame-decoration extents in screen space.
//!
//! [`Rect`] describes an axis-aligned region of the virtual screen, such as a
//! window's client area or a monitor's work area. [`FrameExtents`] describes
//! the thickness of the decorations (title bar, borders) around a client
//! area, and converts between client and outer window bounds.

use super::dimension::{Extent2D, Position2D};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen coordinates.
///
/// The origin is the top-left corner; the y axis grows downward. Edges are
/// half-open: a point on the left or top edge is inside, a point on the
/// right or bottom edge is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// The top-left corner of the rectangle.
    pub origin: Position2D,
    /// The width and height of the rectangle.
    pub extent: Extent2D,
}

impl Rect {
    /// A rectangle with zero origin and zero extent.
    pub const ZERO: Self = Self {
        origin: Position2D::new(0, 0),
        extent: Extent2D::new(0, 0),
    };

    /// Creates a rectangle from an origin and an extent.
    pub const fn new(origin: Position2D, extent: Extent2D) -> Self {
        Self { origin, extent }
    }

    /// Creates a rectangle from raw coordinates and dimensions.
    pub const fn from_coords(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: Position2D::new(x, y),
            extent: Extent2D::new(width, height),
        }
    }

    /// Returns the x-coordinate of the left edge.
    pub const fn left(&self) -> i32 {
        self.origin.x
    }

    /// Returns the y-coordinate of the top edge.
    pub const fn top(&self) -> i32 {
        self.origin.y
    }

    /// Returns the x-coordinate one past the right edge.
    pub const fn right(&self) -> i32 {
        self.origin.x + self.extent.width as i32
    }

    /// Returns the y-coordinate one past the bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.origin.y + self.extent.height as i32
    }

    /// Returns the center point, rounding toward the origin.
    pub const fn center(&self) -> Position2D {
        Position2D::new(
            self.origin.x + (self.extent.width / 2) as i32,
            self.origin.y + (self.extent.height / 2) as i32,
        )
    }

    /// Returns `true` if the rectangle has no area.
    pub const fn is_empty(&self) -> bool {
        self.extent.is_empty()
    }

    /// Checks whether a point lies inside the rectangle.
    ///
    /// Points on the left and top edges are inside; points on the right and
    /// bottom edges are not.
    pub fn contains_point(&self, point: Position2D) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Checks whether this rectangle overlaps another.
    ///
    /// Rectangles that merely share an edge do not overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Returns the overlapping region of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left < right && top < bottom {
            Some(Rect::from_coords(
                left,
                top,
                (right - left) as u32,
                (bottom - top) as u32,
            ))
        } else {
            None
        }
    }

    /// Returns a rectangle of the same extent centered within a container.
    ///
    /// If this rectangle is larger than the container, the result extends
    /// beyond the container and its origin may be negative. This matches the
    /// native behavior when centering an oversized window on a monitor.
    pub fn centered_within(&self, container: &Rect) -> Rect {
        let dx = (container.extent.width as i32 - self.extent.width as i32) / 2;
        let dy = (container.extent.height as i32 - self.extent.height as i32) / 2;
        Rect::new(container.origin.offset(dx, dy), self.extent)
    }
}

/// The thickness of the window frame decorations, in pixels.
///
/// Reported by the native library for a decorated window: the title bar and
/// borders that surround the client area. An undecorated window reports all
/// zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FrameExtents {
    /// Thickness of the left border.
    pub left: u32,
    /// Thickness of the title bar and top border.
    pub top: u32,
    /// Thickness of the right border.
    pub right: u32,
    /// Thickness of the bottom border.
    pub bottom: u32,
}

impl FrameExtents {
    /// Extents of an undecorated window.
    pub const NONE: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Creates frame extents from the four border thicknesses.
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns the combined thickness of the left and right borders.
    pub const fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Returns the combined thickness of the top and bottom borders.
    pub const fn vertical(&self) -> u32 {
        self.top + self.bottom
    }

    /// Grows a client-area rectangle into the outer window bounds.
    pub fn expand(&self, client: Rect) -> Rect {
        Rect::new(
            client.origin.offset(-(self.left as i32), -(self.top as i32)),
            Extent2D::new(
                client.extent.width + self.horizontal(),
                client.extent.height + self.vertical(),
            ),
        )
    }

    /// Shrinks an outer window rectangle back to its client-area bounds.
    ///
    /// Extents larger than the rectangle saturate to a zero-sized result.
    pub fn shrink(&self, outer: Rect) -> Rect {
        Rect::new(
            outer.origin.offset(self.left as i32, self.top as i32),
            Extent2D::new(
                outer.extent.width.saturating_sub(self.horizontal()),
                outer.extent.height.saturating_sub(self.vertical()),
            ),
        )
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rect() -> Rect {
        Rect::from_coords(10, 20, 300, 200)
    }

    #[test]
    fn test_rect_edges() {
        let rect = sample_rect();
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.right(), 310);
        assert_eq!(rect.bottom(), 220);
        assert_eq!(rect.center(), Position2D::new(160, 120));
    }

    #[test]
    fn test_rect_negative_origin() {
        let rect = Rect::from_coords(-1920, -50, 1920, 1080);
        assert_eq!(rect.right(), 0);
        assert_eq!(rect.bottom(), 1030);
        assert!(rect.contains_point(Position2D::new(-1, -1)));
    }

    #[test]
    fn test_contains_point_half_open() {
        let rect = sample_rect();
        assert!(rect.contains_point(Position2D::new(10, 20)));
        assert!(rect.contains_point(Position2D::new(309, 219)));
        assert!(!rect.contains_point(Position2D::new(310, 20)));
        assert!(!rect.contains_point(Position2D::new(10, 220)));
        assert!(!rect.contains_point(Position2D::new(9, 20)));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let rect = Rect::from_coords(5, 5, 0, 10);
        assert!(rect.is_empty());
        assert!(!rect.contains_point(Position2D::new(5, 5)));
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = Rect::from_coords(0, 0, 100, 100);
        let b = Rect::from_coords(50, 50, 100, 100);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_disjoint_and_touching() {
        let a = Rect::from_coords(0, 0, 100, 100);
        let disjoint = Rect::from_coords(200, 0, 50, 50);
        let touching = Rect::from_coords(100, 0, 50, 50);
        assert!(!a.intersects(&disjoint));
        // Sharing an edge is not an overlap.
        assert!(!a.intersects(&touching));
    }

    #[test]
    fn test_intersection_region() {
        let a = Rect::from_coords(0, 0, 100, 100);
        let b = Rect::from_coords(60, -40, 100, 100);
        let overlap = a.intersection(&b).expect("rects overlap");
        assert_eq!(overlap, Rect::from_coords(60, 0, 40, 60));
        assert_eq!(a.intersection(&Rect::from_coords(500, 500, 10, 10)), None);
    }

    #[test]
    fn test_centered_within() {
        let window = Rect::from_coords(0, 0, 800, 600);
        let work_area = Rect::from_coords(0, 0, 1920, 1080);
        let centered = window.centered_within(&work_area);
        assert_eq!(centered, Rect::from_coords(560, 240, 800, 600));
    }

    #[test]
    fn test_centered_within_offset_container() {
        // A monitor to the right of the primary one.
        let window = Rect::from_coords(0, 0, 400, 300);
        let work_area = Rect::from_coords(1920, 0, 1280, 720);
        let centered = window.centered_within(&work_area);
        assert_eq!(centered, Rect::from_coords(2360, 210, 400, 300));
    }

    #[test]
    fn test_centered_within_oversized() {
        let window = Rect::from_coords(0, 0, 2000, 1200);
        let work_area = Rect::from_coords(0, 0, 1920, 1080);
        let centered = window.centered_within(&work_area);
        assert_eq!(centered.origin, Position2D::new(-40, -60));
        assert_eq!(centered.extent, window.extent);
    }

    #[test]
    fn test_frame_extents_expand() {
        let extents = FrameExtents::new(8, 31, 8, 8);
        let client = Rect::from_coords(100, 100, 640, 480);
        let outer = extents.expand(client);
        assert_eq!(outer, Rect::from_coords(92, 69, 656, 519));
    }

    #[test]
    fn test_frame_extents_round_trip() {
        let extents = FrameExtents::new(1, 37, 1, 1);
        let client = Rect::from_coords(-200, 40, 1024, 768);
        assert_eq!(extents.shrink(extents.expand(client)), client);
    }

    #[test]
    fn test_frame_extents_shrink_saturates() {
        let extents = FrameExtents::new(10, 40, 10, 10);
        let tiny = Rect::from_coords(0, 0, 15, 30);
        let client = extents.shrink(tiny);
        assert_eq!(client.extent, Extent2D::new(0, 0));
        assert_eq!(client.origin, Position2D::new(10, 40));
    }

    #[test]
    fn test_frame_extents_none_is_identity() {
        let client = sample_rect();
        assert_eq!(FrameExtents::NONE.expand(client), client);
        assert_eq!(FrameExtents::NONE.shrink(client), client);
    }
}
