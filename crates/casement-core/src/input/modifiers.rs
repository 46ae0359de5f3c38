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

//! Flags representing the modifier keys held during an input event.

/// Flags for the modifier keys held when an input event was generated.
///
/// Multiple modifiers can be combined using bitwise operations. The lock
/// flags report the state of the corresponding lock, not a held key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    bits: u32,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self { bits: 0 };
    /// A Shift key is held.
    pub const SHIFT: Self = Self { bits: 1 << 0 };
    /// A Control key is held.
    pub const CONTROL: Self = Self { bits: 1 << 1 };
    /// An Alt key is held.
    pub const ALT: Self = Self { bits: 1 << 2 };
    /// A Super (Windows/Command) key is held.
    pub const SUPER: Self = Self { bits: 1 << 3 };
    /// Caps Lock is enabled.
    pub const CAPS_LOCK: Self = Self { bits: 1 << 4 };
    /// Num Lock is enabled.
    pub const NUM_LOCK: Self = Self { bits: 1 << 5 };

    /// Creates a set of modifier flags from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Returns the raw bits.
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Combines two sets of flags.
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Checks if all flags in `other` are set in `self`.
    pub const fn contains(&self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Sets the given flags.
    pub fn insert(&mut self, other: Self) {
        self.bits |= other.bits;
    }

    /// Clears the given flags.
    pub fn remove(&mut self, other: Self) {
        self.bits &= !other.bits;
    }

    /// Checks if no flags are set.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_contains() {
        let mods = Modifiers::SHIFT | Modifiers::CONTROL;
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(mods.contains(Modifiers::CONTROL));
        assert!(mods.contains(Modifiers::SHIFT | Modifiers::CONTROL));
        assert!(!mods.contains(Modifiers::ALT));
        assert!(!mods.contains(Modifiers::SHIFT | Modifiers::ALT));
    }

    #[test]
    fn test_none_is_empty_and_contained_everywhere() {
        assert!(Modifiers::NONE.is_empty());
        assert!(Modifiers::SHIFT.contains(Modifiers::NONE));
        assert!(!Modifiers::SHIFT.is_empty());
    }

    #[test]
    fn test_insert_remove() {
        let mut mods = Modifiers::NONE;
        mods.insert(Modifiers::ALT);
        mods |= Modifiers::SUPER;
        assert!(mods.contains(Modifiers::ALT | Modifiers::SUPER));

        mods.remove(Modifiers::ALT);
        assert!(!mods.contains(Modifiers::ALT));
        assert!(mods.contains(Modifiers::SUPER));
    }

    #[test]
    fn test_from_bits_round_trip() {
        let mods = Modifiers::CAPS_LOCK | Modifiers::NUM_LOCK;
        assert_eq!(Modifiers::from_bits(mods.bits()), mods);
    }
}
