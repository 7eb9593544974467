//! HID modifier flags and their on-screen abbreviations

use core::fmt::Write;
use core::ops::BitOr;

use heapless::String;

use crate::config::LABEL_LEN;

/// Text shown when no modifier is held
pub const NO_MODIFIERS: &str = "---";

/// Explicit modifier bitmask in HID report order
///
/// Bit layout: LCTL, LSFT, LALT, LGUI, RCTL, RSFT, RALT, RGUI (LSB first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModFlags(u8);

impl ModFlags {
    pub const NONE: Self = Self(0);
    pub const LEFT_CTRL: Self = Self(0x01);
    pub const LEFT_SHIFT: Self = Self(0x02);
    pub const LEFT_ALT: Self = Self(0x04);
    pub const LEFT_GUI: Self = Self(0x08);
    pub const RIGHT_CTRL: Self = Self(0x10);
    pub const RIGHT_SHIFT: Self = Self(0x20);
    pub const RIGHT_ALT: Self = Self(0x40);
    pub const RIGHT_GUI: Self = Self(0x80);

    /// Wrap a raw bitmask
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw bitmask
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if no bit is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if any bit of `other` is set
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Check if a modifier is held on either side
    pub const fn has(self, modifier: Modifier) -> bool {
        self.intersects(modifier.mask())
    }

    /// Held modifiers in display order
    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL.into_iter().filter(move |&m| self.has(m))
    }
}

impl BitOr for ModFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<u8> for ModFlags {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

/// A modifier key, regardless of side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Gui,
}

impl Modifier {
    /// All modifiers in display order
    pub const ALL: [Modifier; 4] = [Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Gui];

    /// Left and right bits for this modifier
    pub const fn mask(self) -> ModFlags {
        match self {
            Modifier::Ctrl => ModFlags(ModFlags::LEFT_CTRL.0 | ModFlags::RIGHT_CTRL.0),
            Modifier::Alt => ModFlags(ModFlags::LEFT_ALT.0 | ModFlags::RIGHT_ALT.0),
            Modifier::Shift => ModFlags(ModFlags::LEFT_SHIFT.0 | ModFlags::RIGHT_SHIFT.0),
            Modifier::Gui => ModFlags(ModFlags::LEFT_GUI.0 | ModFlags::RIGHT_GUI.0),
        }
    }

    /// Three-letter label
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Modifier::Ctrl => "Ctl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Sft",
            Modifier::Gui => "Gui",
        }
    }
}

/// Modifier label text, e.g. "Ctl Sft "
///
/// Each held modifier contributes its abbreviation and a trailing space.
/// An empty set renders as [`NO_MODIFIERS`].
pub fn modifier_text(mods: ModFlags) -> String<LABEL_LEN> {
    let mut text = String::new();
    for modifier in mods.modifiers() {
        let _ = write!(text, "{} ", modifier.abbreviation());
    }
    if text.is_empty() {
        let _ = text.push_str(NO_MODIFIERS);
    }
    text
}
