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

//! Provides the integer geometry primitives used for window placement.
//!
//! Screen space uses the native convention: the y axis grows downward and
//! positions are signed, because a window on a secondary monitor to the left
//! of the primary one lives at negative coordinates. Sizes are unsigned.

pub mod dimension;
pub mod geometry;

pub use self::dimension::{Extent2D, Position2D};
pub use self::geometry::{FrameExtents, Rect};
