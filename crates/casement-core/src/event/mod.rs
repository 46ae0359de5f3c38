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

//! Provides the window event model and the channel that delivers it.
//!
//! A platform backend translates its native callback stream into
//! [`WindowEvent`] values and publishes them through an [`EventBus`]. The
//! bus is a plain FIFO: events arrive at the consumer in exactly the order
//! the native library reported them, with no reordering or coalescing.

mod bus;
mod window;

pub use self::bus::EventBus;
pub use self::window::WindowEvent;
